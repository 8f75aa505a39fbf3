use egui_macroquad::egui::{self, TopBottomPanel};

use crate::app::App;

/// Draw the top menu panel
pub fn draw_top_panel(egui_ctx: &egui::Context, app: &mut App) {
    TopBottomPanel::top("top_panel").show(egui_ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Palette Strip");

            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    std::process::exit(0);
                }
            });

            ui.menu_button("Palette", |ui| {
                if ui.button("Reset to Seed Colors").clicked() {
                    app.reset_palette();
                    ui.close_menu();
                }
                if ui.button("Clear").clicked() {
                    app.clear_palette();
                    ui.close_menu();
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let scroll = app.palette.scroll();
                ui.label(format!(
                    "{} colors | scroll {}/{}",
                    app.saved_colors().len(),
                    scroll.value(),
                    scroll.maximum()
                ));
            });
        });
    });
}
