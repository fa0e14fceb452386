// grid.rs - Toroidal cell buffer for the Game of Life

use crate::error::LifeError;

pub type State = u8;

pub const DEAD: State = 0;
pub const ALIVE: State = 1;

/// Resolve an axis value onto `0..extent`, wrapping around both edges.
///
/// Holds for any magnitude, so `wrap(-1, 10) == 9` and `wrap(25, 10) == 5`.
#[inline]
pub fn wrap(v: i64, extent: usize) -> usize {
    v.rem_euclid(extent as i64) as usize
}

/// Fixed-size binary grid stored row-major (`index = y * width + x`).
///
/// Coordinates passed to [`Grid::get`] and [`Grid::set`] are never out of
/// range: both edges connect to the opposite one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<State>,
}

impl Grid {
    /// All cells start dead.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::ZeroDimension { width, height });
        }
        // Coordinates resolve through i64, so the cell count must fit there too
        let len = width
            .checked_mul(height)
            .filter(|&n| i64::try_from(n).is_ok())
            .ok_or(LifeError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![DEAD; len],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major cell states, `width * height` long.
    #[inline]
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    #[inline]
    pub fn index(&self, x: i64, y: i64) -> usize {
        wrap(y, self.height) * self.width + wrap(x, self.width)
    }

    #[inline]
    pub fn get(&self, x: i64, y: i64) -> State {
        self.cells[self.index(x, y)]
    }

    /// Any non-zero state is stored as [`ALIVE`].
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, state: State) {
        let i = self.index(x, y);
        self.cells[i] = if state != DEAD { ALIVE } else { DEAD };
    }

    #[inline]
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.get(x, y) != DEAD
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != DEAD).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }

    pub fn copy_from(&mut self, other: &Grid) -> Result<(), LifeError> {
        self.ensure_same_shape(other)?;
        self.cells.copy_from_slice(&other.cells);
        Ok(())
    }

    pub(crate) fn ensure_same_shape(&self, other: &Grid) -> Result<(), LifeError> {
        if self.dimensions() != other.dimensions() {
            return Err(LifeError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }
        Ok(())
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [State] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_grid_is_dead_and_sized() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.cells().len(), 21);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.dimensions(), (7, 3));
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::ZeroDimension { width: 0, height: 5 })
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(LifeError::TooLarge { width: usize::MAX, height: 2 })
        );
        let side = 1usize << (usize::BITS / 2);
        assert!(matches!(Grid::new(side, side), Err(LifeError::TooLarge { .. })));
    }

    #[test]
    fn wrap_handles_both_edges_and_large_offsets() {
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(25, 10), 5);
        assert_eq!(wrap(-25, 10), 5);
        assert_eq!(wrap(-10, 10), 0);
        assert_eq!(wrap(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
    }

    #[test]
    fn index_is_row_major() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(4, 0), 4);
        assert_eq!(grid.index(0, 1), 5);
        assert_eq!(grid.index(3, 2), 13);
        // Corners wrap onto each other
        assert_eq!(grid.index(-1, -1), 19);
        assert_eq!(grid.index(5, 4), 0);
    }

    #[test]
    fn set_wraps_and_normalizes() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(-1, 4, 9);
        assert_eq!(grid.get(3, 0), ALIVE);
        assert_eq!(grid.get(-5, -8), ALIVE);
        grid.set(3, 0, DEAD);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn clear_then_copy_reproduces_source() {
        let mut source = Grid::new(6, 5).unwrap();
        for (x, y) in [(0, 0), (2, 3), (5, 4), (1, 1)] {
            source.set(x, y, ALIVE);
        }
        let mut target = Grid::new(6, 5).unwrap();
        target.set(3, 3, ALIVE);
        target.clear();
        target.copy_from(&source).unwrap();
        assert_eq!(target, source);

        // Copying again changes nothing
        target.copy_from(&source).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn copy_from_rejects_other_shapes() {
        let mut a = Grid::new(4, 4).unwrap();
        let b = Grid::new(4, 5).unwrap();
        assert_eq!(
            a.copy_from(&b),
            Err(LifeError::DimensionMismatch { expected: (4, 4), found: (4, 5) })
        );
    }
}
