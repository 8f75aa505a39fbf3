//! A horizontally scrollable row of saved colors for a color picker dialog.
//!
//! [`widget::PaletteWidget`] holds the model (colors, scroll state, change
//! listeners, repaint requests) and is toolkit independent; [`ui`] hosts it in
//! egui.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod listeners;
pub mod palette;
pub mod rendering;
pub mod scroll;
pub mod sources;
pub mod ui;
pub mod widget;

pub use listeners::{ChangeEvent, ChangeListeners, ListenerId};
pub use widget::{PaletteWidget, PointerButton, PointerPress, PressOutcome};
