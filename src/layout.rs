use egui_macroquad::egui::{pos2, Pos2};

// =============================================================================
// Swatch row geometry
// =============================================================================
//
// Every item in the row (swatches, then the add button) occupies a slot of
// SEPARATION pixels. Slot `i` has its circle's bounding box anchored at
// `(i * SEPARATION + OFFSET - shift, OFFSET)` in widget-local pixels, where
// `shift` is the scroll value converted to pixels.

pub const DIAMETER: i32 = 50;
pub const SEPARATION: i32 = 10 + DIAMETER;
pub const OFFSET: i32 = 5;
/// Scroll units are abstract; this converts them to pixels
pub const PIXELS_PER_SCROLL_UNIT: i32 = 10;
/// A press counts as a hit when strictly closer than this to a slot's hit anchor
pub const HIT_RADIUS: i32 = DIAMETER / 2 + OFFSET;

pub const SWATCH_STROKE: f32 = 3.0;
pub const SELECTED_STROKE: f32 = 5.0;
pub const ADD_BUTTON_STROKE: f32 = 3.0;

/// Half length of each arm of the plus sign
const PLUS_HALF_SPAN: i32 = 10;

/// Pixel shift for a scroll value
pub fn scroll_shift(scroll_value: i32) -> i32 {
    scroll_value * PIXELS_PER_SCROLL_UNIT
}

/// Top-left corner of the bounding box of slot `index`
pub fn slot_origin(index: usize, shift: i32) -> Pos2 {
    let x = index as i32 * SEPARATION + OFFSET - shift;
    pos2(x as f32, OFFSET as f32)
}

/// Center of the circle drawn in slot `index`
pub fn slot_center(index: usize, shift: i32) -> Pos2 {
    let origin = slot_origin(index, shift);
    pos2(origin.x + (DIAMETER / 2) as f32, origin.y + (DIAMETER / 2) as f32)
}

/// Point that presses are measured against.
///
/// This is the top edge midpoint of the circle's bounding box, not the
/// circle's center, so the clickable area sits above the visible swatch.
pub fn hit_anchor(index: usize, shift: i32) -> Pos2 {
    let x = index as i32 * SEPARATION + OFFSET + DIAMETER / 2 - shift;
    pos2(x as f32, OFFSET as f32)
}

pub fn is_hit(pointer: Pos2, index: usize, shift: i32) -> bool {
    pointer.distance(hit_anchor(index, shift)) < HIT_RADIUS as f32
}

/// Horizontal and vertical bars of the plus sign inside the add button at `origin`
pub fn plus_sign(origin: Pos2) -> [[Pos2; 2]; 2] {
    let mid = (DIAMETER / 2) as f32;
    let lo = mid - PLUS_HALF_SPAN as f32;
    let hi = mid + PLUS_HALF_SPAN as f32;
    [
        [pos2(origin.x + lo, origin.y + mid), pos2(origin.x + hi, origin.y + mid)],
        [pos2(origin.x + mid, origin.y + lo), pos2(origin.x + mid, origin.y + hi)],
    ]
}
