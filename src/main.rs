use macroquad::prelude::*;

use palette_strip::app::App;
use palette_strip::config::{ResolvedConfig, WidgetConfig};
use palette_strip::ui::{draw_color_picker, draw_top_panel};

fn window_conf() -> Conf {
    Conf {
        window_title: "Palette Strip".to_owned(),
        window_width: 640,
        window_height: 420,
        ..Default::default()
    }
}

/// Config from the path given as the first argument, or the built-in defaults
fn load_config() -> ResolvedConfig {
    let Some(path) = std::env::args().nth(1) else {
        return ResolvedConfig::default();
    };

    match WidgetConfig::load(&path).and_then(|config| config.validate()) {
        Ok(resolved) => resolved,
        Err(err) => {
            log::warn!("ignoring config {path}: {err}");
            ResolvedConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let mut app = App::new(load_config());

    loop {
        clear_background(Color::new(79.0 / 255.0, 92.0 / 255.0, 98.0 / 255.0, 1.0));

        egui_macroquad::ui(|egui_ctx| {
            draw_top_panel(egui_ctx, &mut app);
            draw_color_picker(egui_ctx, &mut app);
        });

        app.sync_saved_colors();

        egui_macroquad::draw();
        next_frame().await;
    }
}
