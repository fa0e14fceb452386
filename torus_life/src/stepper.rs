// stepper.rs - Transition rule and the current/next buffer pair

use crate::error::LifeError;
use crate::grid::{ALIVE, DEAD, Grid, State, wrap};
use crate::patterns::Seed;

/// The 3x3 neighbourhood minus the centre, as (dx, dy).
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Classic B3/S23 table.
#[inline]
pub fn next_state(alive: bool, alive_count: u8) -> bool {
    match (alive, alive_count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Count of non-dead cells among the 8 wrapped neighbours of (x, y).
#[inline]
pub fn alive_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    let x = wrap(x, grid.width()) as i64;
    let y = wrap(y, grid.height()) as i64;
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.is_alive(x + dx, y + dy))
        .count() as u8
}

/// Compute one generation of `current` into `next`.
///
/// Every cell of `next` is written, so its prior contents never leak into the
/// result. `current` is only read.
pub fn step(current: &Grid, next: &mut Grid) -> Result<(), LifeError> {
    current.ensure_same_shape(next)?;
    apply_rule(current, next);
    Ok(())
}

fn apply_rule(current: &Grid, next: &mut Grid) {
    let width = current.width();
    let out = next.cells_mut();
    for (i, cell) in current.cells().iter().enumerate() {
        let x = (i % width) as i64;
        let y = (i / width) as i64;
        let count = alive_neighbors(current, x, y);
        out[i] = if next_state(*cell != DEAD, count) { ALIVE } else { DEAD };
    }
}

/// Owns the two generation buffers.
///
/// Outside of [`Stepper::tick`] both buffers hold the same cells; `current`
/// is what callers read and edit.
#[derive(Clone, Debug)]
pub struct Stepper {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Stepper {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        Ok(Self::from_grid(Grid::new(width, height)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            next: grid.clone(),
            current: grid,
            generation: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance by exactly one generation.
    pub fn tick(&mut self) {
        apply_rule(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.resync();
        self.generation += 1;
    }

    /// Write into both buffers so a pending tick can't overwrite the edit.
    pub fn paint(&mut self, x: i64, y: i64, state: State) {
        self.current.set(x, y, state);
        self.next.set(x, y, state);
    }

    /// Discard whatever `next` holds and re-seed it from `current`.
    pub fn resync(&mut self) {
        // Both slots are built from the same grid and never replaced, so the
        // shapes always agree.
        self.next.cells_mut().copy_from_slice(self.current.cells());
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
    }

    pub fn seed(&mut self, seed: &Seed) -> Result<(), LifeError> {
        self.current.clear();
        seed.apply(&mut self.current)?;
        self.resync();
        self.generation = 0;
        Ok(())
    }
}
