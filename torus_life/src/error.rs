// error.rs - Precondition failures raised by the simulation core

use std::fmt;

/// Every failure here is a local precondition violation reported to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum LifeError {
    /// A grid was requested with a zero-length axis.
    ZeroDimension { width: usize, height: usize },
    /// `width * height` does not fit in memory addressing.
    TooLarge { width: usize, height: usize },
    /// Two grids that must share a shape do not.
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Tick rate is not a positive finite number, or one tick would not fit
    /// inside the catch-up window.
    InvalidTickRate(f64),
    /// Pattern tiling with a stride of zero.
    ZeroStride,
    /// Seed name that matches no built-in seed or pattern.
    UnknownSeed(String),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "grid of {width}x{height} cells is too large")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "grid dimension mismatch: expected {}x{}, found {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::InvalidTickRate(rate) => write!(f, "invalid tick rate: {rate} ticks/sec"),
            Self::ZeroStride => write!(f, "tiling stride must be positive"),
            Self::UnknownSeed(name) => write!(f, "unknown seed pattern: {name:?}"),
        }
    }
}

impl std::error::Error for LifeError {}
