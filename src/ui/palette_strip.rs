use egui_macroquad::egui::{self, Event, Response, Sense, Slider, Ui};

use crate::rendering::paint_display_list;
use crate::sources::{BrightnessSource, HueSource};
use crate::widget::{PaletteWidget, PointerButton, PointerPress};

fn map_button(button: egui::PointerButton) -> PointerButton {
    match button {
        egui::PointerButton::Primary => PointerButton::Primary,
        egui::PointerButton::Secondary => PointerButton::Secondary,
        egui::PointerButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

/// Draw the swatch row and, when the palette overflows, its scrollbar.
/// Presses inside the row are forwarded to the widget before painting so
/// the frame already shows their effect.
pub fn palette_strip(
    ui: &mut Ui,
    widget: &mut PaletteWidget,
    hue: &dyn HueSource,
    brightness: &dyn BrightnessSource,
) -> Response {
    let size = widget.canvas_size();
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    // Layers drawn over the strip (popups, menus, other windows) keep their presses
    let owns_pointer = ui.is_enabled() && ui.rect_contains_pointer(rect);

    let presses: Vec<PointerPress> = if !owns_pointer {
        Vec::new()
    } else {
        ui.input(|input| {
            input
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } if rect.contains(*pos) => Some(PointerPress {
                        pos: (*pos - rect.min).to_pos2(),
                        button: map_button(*button),
                    }),
                    _ => None,
                })
                .collect()
        })
    };

    for press in presses {
        widget.handle_pointer_press(press, hue, brightness);
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, widget.background());
        paint_display_list(&painter, rect.min.to_vec2(), &widget.display_list());
    }

    let scroll = widget.scroll();
    let bar_height = widget.scrollbar_height();
    if scroll.is_visible() {
        let mut value = scroll.value();
        let moved = ui
            .scope(|ui| {
                ui.spacing_mut().slider_width = size.x;
                ui.spacing_mut().interact_size.y = bar_height;
                ui.add(Slider::new(&mut value, 0..=scroll.maximum()).show_value(false))
                    .changed()
            })
            .inner;
        if moved {
            widget.set_scroll_value(value);
        }
    }

    if widget.take_repaint_request() {
        ui.ctx().request_repaint();
    }

    response
}
