// config.rs - Startup settings read from the environment

use torus_life::Seed;
use torus_life::scheduler::DEFAULT_TICK_RATE;

pub const DEFAULT_GRID_SIZE: usize = 100;
pub const DEFAULT_WINDOW_SIZE: f32 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    /// Generations per second.
    pub tick_rate: f64,
    pub seed: Seed,
    /// Initial side length of the square canvas, in logical pixels.
    pub window_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_SIZE,
            grid_height: DEFAULT_GRID_SIZE,
            tick_rate: DEFAULT_TICK_RATE,
            seed: Seed::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// `LIFE_GRID_WIDTH`, `LIFE_GRID_HEIGHT`, `LIFE_TICK_RATE`, `LIFE_SEED`,
    /// `LIFE_WINDOW_SIZE`. Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            grid_width: parse_or(&lookup, "LIFE_GRID_WIDTH", defaults.grid_width),
            grid_height: parse_or(&lookup, "LIFE_GRID_HEIGHT", defaults.grid_height),
            tick_rate: parse_or(&lookup, "LIFE_TICK_RATE", defaults.tick_rate),
            seed: parse_or(&lookup, "LIFE_SEED", defaults.seed),
            window_size: parse_or(&lookup, "LIFE_WINDOW_SIZE", defaults.window_size),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "ignoring unparsable setting");
            default
        }
    }
}
