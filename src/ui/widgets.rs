//! Small custom egui widgets for the color picker dialog

use egui_macroquad::egui::{Color32, Response, Sense, Ui, Vec2};

const CHIP_BORDER: Color32 = Color32::from_rgb(80, 80, 90);

/// Draw a single color chip with a one pixel border
pub fn draw_color_chip(ui: &mut Ui, color: Color32, size: Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, CHIP_BORDER);
        painter.rect_filled(rect.shrink(1.0), 2.0, color);
    }

    response
}
