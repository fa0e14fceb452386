// ui.rs - Per-frame loop: input, fixed-step advance, blit

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Key, Rect, Sense, TextureId, TextureOptions, pos2};
use torus_life::LifeControls;

use crate::{LifeCanvas, canvas};

impl eframe::App for LifeCanvas {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Edits land before the frame's ticks, like the pointer did last frame
        self.handle_keys(ctx);
        self.handle_pointer(ctx);
        self.scheduler.advance(now);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = if self.scheduler.is_paused() { "⏸ Paused" } else { "▶ Running" };
                ui.label(state);
                ui.separator();
                ui.label(format!("Generation: {}", self.scheduler.generation()));
                ui.separator();
                let grid = self.scheduler.grid();
                let live = grid.population();
                ui.label(format!(
                    "Population: {} ({:.1}%)",
                    live,
                    live as f32 / grid.cells().len() as f32 * 100.0
                ));
                ui.separator();
                ui.label(format!(
                    "{:.1} gen/sec",
                    1.0 / self.scheduler.tick_duration().as_secs_f64()
                ));
                ui.separator();
                ui.label("Space: pause   C: clear   R: reseed   Left: paint   Right: erase");
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let texture = self.upload(ctx);
                painter.image(
                    texture,
                    response.rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
                self.canvas_rect = Some(response.rect);
            });

        ctx.request_repaint();
    }
}

impl LifeCanvas {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pause, clear, reseed) = ctx.input(|i| {
            (i.key_pressed(Key::Space), i.key_pressed(Key::C), i.key_pressed(Key::R))
        });
        if pause {
            self.scheduler.toggle_pause();
        }
        if clear {
            self.clear();
        }
        if reseed {
            self.reseed();
        }
    }

    /// Primary button paints, secondary erases, for as long as it is held.
    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let Some(rect) = self.canvas_rect else {
            return;
        };
        let (pos, paint, erase) = ctx.input(|i| {
            (i.pointer.hover_pos(), i.pointer.primary_down(), i.pointer.secondary_down())
        });
        if !paint && !erase {
            return;
        }
        let Some(pos) = pos else {
            return;
        };
        let grid = self.scheduler.grid();
        let Some((x, y)) = canvas::pointer_to_cell(rect, pos, grid.width(), grid.height()) else {
            return;
        };
        if paint {
            self.scheduler.paint(x, y);
        }
        if erase {
            self.scheduler.erase(x, y);
        }
    }

    fn upload(&mut self, ctx: &egui::Context) -> TextureId {
        let image = canvas::grid_image(self.scheduler.grid());
        match &mut self.texture {
            Some(texture) => {
                texture.set(image, TextureOptions::NEAREST);
                texture.id()
            }
            None => {
                let texture = ctx.load_texture("life-grid", image, TextureOptions::NEAREST);
                let id = texture.id();
                self.texture = Some(texture);
                id
            }
        }
    }
}
