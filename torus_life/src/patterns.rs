use std::str::FromStr;

use crate::error::LifeError;
use crate::grid::{ALIVE, Grid, wrap};

/// A named shape, as (x, y) offsets from its top-left corner.
#[derive(Debug, PartialEq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

/// .X.
/// ..X
/// XXX
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
];

/// Stride of the startup glider wall.
pub const GLIDER_WALL_STRIDE: usize = 5;
/// Wider tiling used by the glider-crash seed.
pub const GLIDER_CRASH_STRIDE: usize = 6;

pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let wanted = normalize(name);
    PATTERNS.iter().find(|p| normalize(p.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Set the pattern's cells alive with its corner at (x, y). Wraps around edges.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, x: i64, y: i64) {
    let x = wrap(x, grid.width()) as i64;
    let y = wrap(y, grid.height()) as i64;
    for &(dx, dy) in pattern.cells {
        grid.set(x + dx, y + dy, ALIVE);
    }
}

/// Stamp the pattern at every multiple of `stride` along both axes.
pub fn tile(grid: &mut Grid, pattern: &Pattern, stride: usize) -> Result<(), LifeError> {
    if stride == 0 {
        return Err(LifeError::ZeroStride);
    }
    for y in (0..grid.height()).step_by(stride) {
        for x in (0..grid.width()).step_by(stride) {
            stamp(grid, pattern, x as i64, y as i64);
        }
    }
    Ok(())
}

/// Initial population written once before the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Seed {
    #[default]
    GliderWall,
    GliderCrash,
    /// A single pattern at the centre of the grid.
    Pattern(&'static Pattern),
    Empty,
}

impl Seed {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GliderWall => "glider-wall",
            Self::GliderCrash => "glider-crash",
            Self::Pattern(p) => p.name,
            Self::Empty => "empty",
        }
    }

    /// Adds cells on top of whatever the grid holds.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), LifeError> {
        match self {
            Self::GliderWall => tile(grid, &GLIDER, GLIDER_WALL_STRIDE),
            Self::GliderCrash => tile(grid, &GLIDER, GLIDER_CRASH_STRIDE),
            Self::Pattern(pattern) => {
                let x = (grid.width() / 2) as i64;
                let y = (grid.height() / 2) as i64;
                stamp(grid, pattern, x, y);
                Ok(())
            }
            Self::Empty => Ok(()),
        }
    }
}

impl FromStr for Seed {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "glider-wall" => Ok(Self::GliderWall),
            "glider-crash" => Ok(Self::GliderCrash),
            "empty" => Ok(Self::Empty),
            _ => find_pattern(s)
                .map(Self::Pattern)
                .ok_or_else(|| LifeError::UnknownSeed(s.to_string())),
        }
    }
}
