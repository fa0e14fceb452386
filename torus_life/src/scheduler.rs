// scheduler.rs - Fixed-step driver that keeps generations in step with wall time

use std::time::{Duration, Instant};

use crate::controls::LifeControls;
use crate::error::LifeError;
use crate::grid::{ALIVE, DEAD, Grid};
use crate::stepper::Stepper;

pub const DEFAULT_TICK_RATE: f64 = 10.0;

/// Longest stretch of wall time a single `advance` will catch up on.
pub const DEFAULT_MAX_CATCH_UP: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchedulerConfig {
    /// Generations per second.
    pub tick_rate: f64,
    /// Elapsed time beyond this is dropped instead of simulated.
    pub max_catch_up: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }
}

impl SchedulerConfig {
    pub fn with_tick_rate(tick_rate: f64) -> Self {
        Self { tick_rate, ..Self::default() }
    }

    pub fn tick_duration(&self) -> Result<Duration, LifeError> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(LifeError::InvalidTickRate(self.tick_rate));
        }
        let tick = Duration::try_from_secs_f64(1.0 / self.tick_rate)
            .map_err(|_| LifeError::InvalidTickRate(self.tick_rate))?;
        // A tick must fit in the catch-up window or the loop never fires
        if tick.is_zero() || tick >= self.max_catch_up {
            return Err(LifeError::InvalidTickRate(self.tick_rate));
        }
        Ok(tick)
    }
}

/// Runs zero or more generations per frame so simulated time tracks wall time
/// at a constant rate, independent of how often frames arrive.
#[derive(Debug)]
pub struct Scheduler {
    stepper: Stepper,
    tick_duration: Duration,
    max_catch_up: Duration,
    /// Wall time that the simulation has been advanced to.
    last_tick: Instant,
    /// Most recent frame time seen by `advance`.
    last_frame: Instant,
    paused: bool,
}

impl Scheduler {
    pub fn new(stepper: Stepper, config: SchedulerConfig, start: Instant) -> Result<Self, LifeError> {
        let tick_duration = config.tick_duration()?;
        tracing::debug!(
            tick_rate = config.tick_rate,
            tick_ms = tick_duration.as_secs_f64() * 1000.0,
            width = stepper.current().width(),
            height = stepper.current().height(),
            "scheduler created"
        );
        Ok(Self {
            stepper,
            tick_duration,
            max_catch_up: config.max_catch_up,
            last_tick: start,
            last_frame: start,
            paused: false,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        self.stepper.current()
    }

    #[inline]
    pub fn stepper_mut(&mut self) -> &mut Stepper {
        &mut self.stepper
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.stepper.generation()
    }

    #[inline]
    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Called once per frame. Returns how many generations were computed.
    pub fn advance(&mut self, now: Instant) -> u32 {
        self.last_frame = now;
        // A frame stamped at or before the anchor has nothing left to simulate
        if self.paused || now <= self.last_tick {
            return 0;
        }

        let mut elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed > self.max_catch_up {
            tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                "catch-up clamped after a stall"
            );
            elapsed = self.max_catch_up;
        }

        let mut ticks = 0;
        while elapsed > self.tick_duration {
            self.stepper.tick();
            elapsed -= self.tick_duration;
            ticks += 1;
        }
        // Carry the sub-tick remainder into the next frame
        self.last_tick = now.checked_sub(elapsed).unwrap_or(now);

        tracing::trace!(ticks, generation = self.stepper.generation(), "advance");
        ticks
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.toggle_pause();
        }
    }
}

impl LifeControls for Scheduler {
    fn paint(&mut self, x: i64, y: i64) {
        self.stepper.paint(x, y, ALIVE);
    }

    fn erase(&mut self, x: i64, y: i64) {
        self.stepper.paint(x, y, DEAD);
    }

    /// Flip the pause flag, anchored at the last frame time so the paused
    /// stretch is never simulated afterwards.
    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.last_tick = self.last_tick.max(self.last_frame);
        self.stepper.resync();
        tracing::info!(paused = self.paused, generation = self.stepper.generation(), "pause toggled");
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
