//! Behaviour of well-known patterns under the full stepper.

use pretty_assertions::assert_eq;
use torus_life::patterns::{self, find_pattern};
use torus_life::{ALIVE, GLIDER, Grid, Stepper};

fn stamped(width: usize, height: usize, name: &str, x: i64, y: i64) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    let pattern = find_pattern(name).unwrap();
    patterns::stamp(&mut grid, pattern, x, y);
    grid
}

#[test]
fn glider_translates_diagonally_every_four_ticks() {
    let mut grid = Grid::new(20, 20).unwrap();
    patterns::stamp(&mut grid, &GLIDER, 3, 3);
    let mut stepper = Stepper::from_grid(grid);

    for cycle in 1..=3i64 {
        for _ in 0..4 {
            stepper.tick();
        }
        let mut expected = Grid::new(20, 20).unwrap();
        patterns::stamp(&mut expected, &GLIDER, 3 + cycle, 3 + cycle);
        assert_eq!(stepper.current(), &expected, "after {} ticks", cycle * 4);
    }
}

#[test]
fn glider_returns_home_after_circling_the_torus() {
    let mut grid = Grid::new(10, 10).unwrap();
    patterns::stamp(&mut grid, &GLIDER, 0, 0);
    let start = grid.clone();
    let mut stepper = Stepper::from_grid(grid);
    for _ in 0..40 {
        stepper.tick();
    }
    assert_eq!(stepper.current(), &start);
}

#[test]
fn block_is_a_still_life() {
    let start = stamped(8, 8, "block", 3, 3);
    let mut stepper = Stepper::from_grid(start.clone());
    for _ in 0..25 {
        stepper.tick();
        assert_eq!(stepper.current(), &start);
    }
}

#[test]
fn block_on_the_seam_is_still_stable() {
    let start = stamped(6, 6, "block", 5, 5);
    assert!(start.is_alive(0, 0) && start.is_alive(5, 5));
    let mut stepper = Stepper::from_grid(start.clone());
    stepper.tick();
    stepper.tick();
    assert_eq!(stepper.current(), &start);
}

#[test]
fn period_two_oscillators() {
    for name in ["blinker", "toad", "beacon"] {
        let start = stamped(12, 12, name, 4, 4);
        let mut stepper = Stepper::from_grid(start.clone());
        stepper.tick();
        assert_ne!(stepper.current(), &start, "{name} should change on odd ticks");
        stepper.tick();
        assert_eq!(stepper.current(), &start, "{name} should repeat after two ticks");
    }
}

#[test]
fn lone_cells_die() {
    let mut grid = Grid::new(9, 9).unwrap();
    grid.set(1, 1, ALIVE);
    grid.set(6, 6, ALIVE);
    let mut stepper = Stepper::from_grid(grid);
    stepper.tick();
    assert_eq!(stepper.current().population(), 0);
}
