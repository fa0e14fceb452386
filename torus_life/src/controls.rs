// controls.rs - Edit commands a host forwards from its input events

/// The discrete operations a host may invoke between two `advance` calls.
///
/// Coordinates are grid coordinates and wrap like every other grid access.
/// Edits apply to both generation buffers, so an edit made while the
/// simulation is running is not lost to the next tick.
pub trait LifeControls {
    fn paint(&mut self, x: i64, y: i64);
    fn erase(&mut self, x: i64, y: i64);
    fn toggle_pause(&mut self);
    fn is_paused(&self) -> bool;
}
