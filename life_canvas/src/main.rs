// main.rs - Toroidal Game of Life on an egui canvas
// The simulation runs at a fixed rate; frames only decide how often it is drawn.

use std::fmt;
use std::time::Instant;

use eframe::egui;
use torus_life::{LifeError, Scheduler, SchedulerConfig, Seed, Stepper};
use tracing_subscriber::EnvFilter;

mod canvas;   // Pixel upload and pointer mapping
mod config;   // Environment settings
mod ui;       // eframe::App impl

use config::AppConfig;

/// Height reserved for the status bar under the square canvas.
const STATUS_BAR_HEIGHT: f32 = 32.0;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    let app = LifeCanvas::new(&config, Instant::now())?;
    tracing::info!(
        width = config.grid_width,
        height = config.grid_height,
        tick_rate = config.tick_rate,
        seed = config.seed.name(),
        "starting"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_size, config.window_size + STATUS_BAR_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Toroidal Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Host state: the simulation plus what the UI needs to draw it.
pub struct LifeCanvas {
    scheduler: Scheduler,
    seed: Seed,
    texture: Option<egui::TextureHandle>,
    /// Where the grid was drawn last frame, for pointer lookup.
    canvas_rect: Option<egui::Rect>,
}

impl LifeCanvas {
    pub fn new(config: &AppConfig, start: Instant) -> Result<Self, LifeError> {
        let mut stepper = Stepper::new(config.grid_width, config.grid_height)?;
        stepper.seed(&config.seed)?;
        let scheduler = Scheduler::new(stepper, SchedulerConfig::with_tick_rate(config.tick_rate), start)?;
        Ok(Self {
            scheduler,
            seed: config.seed,
            texture: None,
            canvas_rect: None,
        })
    }

    pub fn clear(&mut self) {
        self.scheduler.stepper_mut().clear();
        tracing::info!("grid cleared");
    }

    pub fn reseed(&mut self) {
        match self.scheduler.stepper_mut().seed(&self.seed) {
            Ok(()) => tracing::info!(seed = self.seed.name(), "grid reseeded"),
            Err(e) => tracing::warn!(error = %e, "reseed failed"),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Life(LifeError),
    Ui(eframe::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Life(e) => write!(f, "simulation setup failed: {e}"),
            Self::Ui(e) => write!(f, "window failed: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Life(e) => Some(e),
            Self::Ui(e) => Some(e),
        }
    }
}

impl From<LifeError> for AppError {
    fn from(e: LifeError) -> Self {
        Self::Life(e)
    }
}

impl From<eframe::Error> for AppError {
    fn from(e: eframe::Error) -> Self {
        Self::Ui(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_config_surfaces_as_error() {
        let config = AppConfig { grid_width: 0, ..AppConfig::default() };
        let err = LifeCanvas::new(&config, Instant::now()).err().map(AppError::from);
        assert!(matches!(err, Some(AppError::Life(LifeError::ZeroDimension { .. }))));

        let config = AppConfig { tick_rate: 0.0, ..AppConfig::default() };
        assert!(LifeCanvas::new(&config, Instant::now()).is_err());
    }

    #[test]
    fn clear_and_reseed() {
        let mut app = LifeCanvas::new(&AppConfig::default(), Instant::now()).unwrap();
        let seeded = app.scheduler.grid().population();
        assert_eq!(seeded, 20 * 20 * 5);
        app.clear();
        assert_eq!(app.scheduler.grid().population(), 0);
        app.reseed();
        assert_eq!(app.scheduler.grid().population(), seeded);
    }
}
