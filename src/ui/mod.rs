// egui front end for the palette strip and its host dialog

pub mod color_picker;
pub mod palette_strip;
pub mod top_panel;
pub mod widgets;

pub use color_picker::draw_color_picker;
pub use palette_strip::palette_strip;
pub use top_panel::draw_top_panel;
