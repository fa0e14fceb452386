// canvas.rs - Grid <-> screen mapping: pixel upload and pointer lookup

use egui::{Color32, ColorImage, Pos2, Rect};
use torus_life::Grid;

/// One opaque grey pixel per cell: 0 for dead, 255 for alive.
pub fn grid_image(grid: &Grid) -> ColorImage {
    let pixels = grid
        .cells()
        .iter()
        .map(|&state| Color32::from_gray(state.saturating_mul(255)))
        .collect();
    ColorImage {
        size: [grid.width(), grid.height()],
        pixels,
    }
}

/// Grid coordinate under `pos` when the grid is stretched over `rect`.
/// `None` when the pointer is outside the canvas.
pub fn pointer_to_cell(rect: Rect, pos: Pos2, grid_width: usize, grid_height: usize) -> Option<(i64, i64)> {
    if !rect.contains(pos) || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let cell_w = rect.width() / grid_width as f32;
    let cell_h = rect.height() / grid_height as f32;
    let x = ((pos.x - rect.left()) / cell_w).floor() as i64;
    let y = ((pos.y - rect.top()) / cell_h).floor() as i64;
    // `Rect::contains` is inclusive of the far edge
    Some((
        x.min(grid_width as i64 - 1),
        y.min(grid_height as i64 - 1),
    ))
}
