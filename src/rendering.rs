use egui_macroquad::egui::{vec2, Color32, Painter, Pos2, Stroke, Vec2};

use crate::layout::{
    plus_sign, slot_origin, ADD_BUTTON_STROKE, DIAMETER, SELECTED_STROKE, SWATCH_STROKE,
};
use crate::palette::Palette;

// =============================================================================
// Display list
// =============================================================================
//
// The widget describes what to draw as a flat list of commands in
// widget-local pixels. Circles are given by the top-left corner of their
// bounding box, the same anchor the layout uses.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    FilledCircle {
        origin: Pos2,
        diameter: f32,
        color: Color32,
    },
    CircleOutline {
        origin: Pos2,
        diameter: f32,
        width: f32,
        color: Color32,
    },
    Line {
        from: Pos2,
        to: Pos2,
        width: f32,
        color: Color32,
    },
}

/// Swatches in display order, then the add button with its plus sign
pub fn build_display_list(palette: &Palette, shift: i32, outline: Color32) -> Vec<DrawCommand> {
    let diameter = DIAMETER as f32;
    let mut commands = Vec::with_capacity(palette.len() * 2 + 3);

    for (i, &color) in palette.colors().iter().enumerate() {
        let origin = slot_origin(i, shift);
        let width = if palette.is_selected(color) {
            SELECTED_STROKE
        } else {
            SWATCH_STROKE
        };
        commands.push(DrawCommand::FilledCircle { origin, diameter, color });
        commands.push(DrawCommand::CircleOutline {
            origin,
            diameter,
            width,
            color: outline,
        });
    }

    let origin = slot_origin(palette.len(), shift);
    commands.push(DrawCommand::CircleOutline {
        origin,
        diameter,
        width: ADD_BUTTON_STROKE,
        color: outline,
    });
    for [from, to] in plus_sign(origin) {
        commands.push(DrawCommand::Line {
            from,
            to,
            width: ADD_BUTTON_STROKE,
            color: outline,
        });
    }

    commands
}

// =============================================================================
// egui backend
// =============================================================================

/// Paint `commands` with their local origin placed at `offset`.
/// The painter should already be clipped to the widget rect.
pub fn paint_display_list(painter: &Painter, offset: Vec2, commands: &[DrawCommand]) {
    for command in commands {
        match *command {
            DrawCommand::FilledCircle { origin, diameter, color } => {
                let radius = diameter / 2.0;
                painter.circle_filled(origin + offset + vec2(radius, radius), radius, color);
            }
            DrawCommand::CircleOutline { origin, diameter, width, color } => {
                let radius = diameter / 2.0;
                painter.circle_stroke(
                    origin + offset + vec2(radius, radius),
                    radius,
                    Stroke::new(width, color),
                );
            }
            DrawCommand::Line { from, to, width, color } => {
                painter.line_segment([from + offset, to + offset], Stroke::new(width, color));
            }
        }
    }
}
