//! Toroidal Game of Life core.
//!
//! A [`Grid`] holds binary cell states with wrap-around addressing. A
//! [`Stepper`] owns the current/next buffer pair and applies the B3/S23 rule.
//! A [`Scheduler`] advances the stepper at a fixed rate from wall-clock
//! timestamps supplied once per rendered frame.

pub mod controls;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod scheduler;
pub mod stepper;

pub use controls::LifeControls;
pub use error::LifeError;
pub use grid::{ALIVE, DEAD, Grid, State, wrap};
pub use patterns::{GLIDER, PATTERNS, Pattern, Seed};
pub use scheduler::{Scheduler, SchedulerConfig};
pub use stepper::{Stepper, alive_neighbors, next_state, step};
