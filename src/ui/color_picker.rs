use egui_macroquad::egui::{self, Slider, Vec2};

use crate::app::App;
use crate::ui::palette_strip::palette_strip;
use crate::ui::widgets::draw_color_chip;

const PREVIEW_SIZE: Vec2 = Vec2::new(40.0, 20.0);
const SAVED_CHIP_SIZE: Vec2 = Vec2::new(16.0, 16.0);

/// Draw the color picker window: hue, brightness, preview and saved palette
pub fn draw_color_picker(egui_ctx: &egui::Context, app: &mut App) {
    egui::Window::new("Color Picker")
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Hue:");
                ui.color_edit_button_srgba(&mut app.wheel.color);
            });
            ui.add(Slider::new(&mut app.slider.value, 0..=100).text("Brightness"));

            ui.horizontal(|ui| {
                ui.label("Current:");
                let current = app.current_color();
                draw_color_chip(ui, current, PREVIEW_SIZE);
                ui.monospace(crate::color::to_hex(current));
            });

            ui.separator();
            ui.label("Palette (right-click a swatch to remove it)");
            palette_strip(ui, &mut app.palette, &app.wheel, &app.slider);

            ui.separator();
            ui.horizontal_wrapped(|ui| {
                for &color in app.saved_colors() {
                    draw_color_chip(ui, color, SAVED_CHIP_SIZE)
                        .on_hover_text(crate::color::to_hex(color));
                }
            });
            ui.label(format!("{} saved colors", app.saved_colors().len()));
        });
}
