use egui_macroquad::egui::{Color32, Pos2, Vec2};

use crate::color::compose_current_color;
use crate::config::ResolvedConfig;
use crate::layout;
use crate::listeners::{ChangeEvent, ChangeListeners, ListenerId};
use crate::palette::Palette;
use crate::rendering::{build_display_list, DrawCommand};
use crate::scroll::ScrollState;
use crate::sources::{BrightnessSource, HueSource};

/// Height of the scrollbar strip below the swatch canvas
pub const SCROLLBAR_HEIGHT: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// A button going down at a widget-local position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPress {
    pub pos: Pos2,
    pub button: PointerButton,
}

/// What a press did to the palette
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PressOutcome {
    pub removed: Vec<Color32>,
    pub added: Option<Color32>,
}

impl PressOutcome {
    pub fn changed(&self) -> bool {
        !self.removed.is_empty() || self.added.is_some()
    }
}

// =============================================================================
// PaletteWidget: Scrollable row of saved colors with an add button
// =============================================================================
//
// Right-clicking a swatch removes it; pressing the add button with any button
// appends the color currently composed from the hue wheel and brightness
// slider. The widget never draws on its own: mutations raise a repaint
// request that the host loop consumes with `take_repaint_request`.

pub struct PaletteWidget {
    palette: Palette,
    scroll: ScrollState,
    listeners: ChangeListeners,
    config: ResolvedConfig,
    repaint_requested: bool,
}

impl Default for PaletteWidget {
    fn default() -> Self {
        Self::new(ResolvedConfig::default())
    }
}

impl PaletteWidget {
    pub fn new(config: ResolvedConfig) -> Self {
        let palette = Palette::from_colors(&config.seed_colors);
        let mut scroll = ScrollState::default();
        scroll.update_for_count(palette.len());

        log::info!(
            "palette widget {}x{} with {} seed colors",
            config.size.x,
            config.size.y,
            palette.len()
        );

        Self {
            palette,
            scroll,
            listeners: ChangeListeners::new(),
            config,
            repaint_requested: true,
        }
    }

    /// Snapshot of the stored colors in display order
    pub fn palette(&self) -> Vec<Color32> {
        self.palette.to_vec()
    }

    /// Replace the stored colors. Listeners are not notified, the scrollbar is
    /// left as is and no repaint is requested; callers redraw themselves.
    pub fn set_palette(&mut self, colors: &[Color32]) {
        log::debug!("palette replaced with {} colors", colors.len());
        self.palette.replace(colors);
    }

    /// The color the add button would append right now
    pub fn compute_current_color(
        &self,
        hue: &dyn HueSource,
        brightness: &dyn BrightnessSource,
    ) -> Color32 {
        compose_current_color(hue.color(), brightness.value())
    }

    pub fn selected_color(&self) -> Option<Color32> {
        self.palette.selected()
    }

    /// Nothing in the widget's own interaction sets this
    pub fn set_selected_color(&mut self, color: Option<Color32>) {
        self.palette.set_selected(color);
        self.request_repaint();
    }

    pub fn display_list(&self) -> Vec<DrawCommand> {
        build_display_list(&self.palette, self.scroll.pixel_shift(), self.config.outline)
    }

    /// Apply a pointer press given in widget-local coordinates
    pub fn handle_pointer_press(
        &mut self,
        press: PointerPress,
        hue: &dyn HueSource,
        brightness: &dyn BrightnessSource,
    ) -> PressOutcome {
        let shift = self.scroll.pixel_shift();
        let mut outcome = PressOutcome::default();

        // Length is re-read on every step: a removal shortens the scan, and
        // the add button is tested in the slot where the scan stopped.
        let mut index = 0;
        while index < self.palette.len() {
            if press.button == PointerButton::Secondary && layout::is_hit(press.pos, index, shift) {
                if let Some(color) = self.palette.get(index) {
                    if let Some(removed_at) = self.palette.remove_first(color) {
                        log::debug!("removed {:?} at index {}", color, removed_at);
                        outcome.removed.push(color);
                        self.palette_changed();
                    }
                }
            }
            index += 1;
        }

        if layout::is_hit(press.pos, index, shift) {
            let color = self.compute_current_color(hue, brightness);
            log::debug!("added {:?} as swatch {}", color, self.palette.len());
            self.palette.push(color);
            outcome.added = Some(color);
            self.palette_changed();
        }

        outcome
    }

    fn palette_changed(&mut self) {
        self.listeners.notify(&ChangeEvent);
        self.scroll.update_for_count(self.palette.len());
        self.request_repaint();
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Scroll-value-changed hook. Returns true if the row moved.
    pub fn set_scroll_value(&mut self, value: i32) -> bool {
        let moved = self.scroll.set_value(value);
        if moved {
            self.request_repaint();
        }
        moved
    }

    pub fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    pub fn needs_repaint(&self) -> bool {
        self.repaint_requested
    }

    /// Consume the pending repaint request, if any
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    pub fn add_change_listener(&self, callback: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        self.listeners.add(callback)
    }

    pub fn remove_change_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn change_listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Handle to the listener registry, usable from inside callbacks
    pub fn change_listeners(&self) -> ChangeListeners {
        self.listeners.clone()
    }

    /// Size of the swatch canvas, excluding the scrollbar
    pub fn canvas_size(&self) -> Vec2 {
        self.config.size
    }

    /// Height of the scrollbar strip below the canvas
    pub fn scrollbar_height(&self) -> f32 {
        SCROLLBAR_HEIGHT
    }

    pub fn background(&self) -> Color32 {
        self.config.background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::hit_anchor;
    use crate::sources::{FixedBrightness, FixedHue};
    use egui_macroquad::egui::{pos2, vec2};
    use std::cell::Cell;
    use std::rc::Rc;

    const RED: Color32 = Color32::from_rgb(255, 0, 0);
    const GREEN: Color32 = Color32::from_rgb(0, 255, 0);
    const BLUE: Color32 = Color32::from_rgb(0, 0, 255);

    const WHEEL: FixedHue = FixedHue(Color32::from_rgb(255, 0, 0));
    const SLIDER: FixedBrightness = FixedBrightness(50);

    fn counting_listener(widget: &PaletteWidget) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        widget.add_change_listener(move |_| counter.set(counter.get() + 1));
        hits
    }

    fn press(widget: &mut PaletteWidget, pos: Pos2, button: PointerButton) -> PressOutcome {
        widget.handle_pointer_press(PointerPress { pos, button }, &WHEEL, &SLIDER)
    }

    fn click_add(widget: &mut PaletteWidget) -> PressOutcome {
        let slot = widget.palette().len();
        let shift = widget.scroll().pixel_shift();
        press(widget, hit_anchor(slot, shift), PointerButton::Primary)
    }

    fn right_click_swatch(widget: &mut PaletteWidget, index: usize) -> PressOutcome {
        let shift = widget.scroll().pixel_shift();
        press(widget, hit_anchor(index, shift), PointerButton::Secondary)
    }

    #[test]
    fn test_starts_with_seed_colors_and_hidden_scrollbar() {
        let widget = PaletteWidget::default();
        assert_eq!(widget.palette(), vec![RED, GREEN, BLUE]);
        assert!(!widget.scroll().is_visible());
        assert_eq!(widget.selected_color(), None);
        assert_eq!(widget.canvas_size(), vec2(350.0, 60.0));
        assert_eq!(widget.scrollbar_height(), 20.0);
    }

    #[test]
    fn test_right_click_removes_green_and_notifies_once() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);

        let outcome = right_click_swatch(&mut widget, 1);

        assert_eq!(widget.palette(), vec![RED, BLUE]);
        assert_eq!(hits.get(), 1);
        assert_eq!(outcome.removed, vec![GREEN]);
        assert_eq!(outcome.added, None);
    }

    #[test]
    fn test_right_click_last_swatch_does_not_add() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);

        right_click_swatch(&mut widget, 2);

        assert_eq!(widget.palette(), vec![RED, GREEN]);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_left_click_on_swatch_is_ignored() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);
        widget.take_repaint_request();

        let outcome = press(&mut widget, hit_anchor(0, 0), PointerButton::Primary);

        assert!(!outcome.changed());
        assert_eq!(widget.palette().len(), 3);
        assert_eq!(hits.get(), 0);
        assert!(!widget.needs_repaint());
    }

    #[test]
    fn test_add_button_appends_current_color_for_any_button() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);

        let outcome = click_add(&mut widget);
        assert_eq!(outcome.added, Some(Color32::from_rgb(128, 0, 0)));

        let slot = widget.palette().len();
        press(&mut widget, hit_anchor(slot, 0), PointerButton::Secondary);
        press(&mut widget, hit_anchor(slot + 1, 0), PointerButton::Middle);

        assert_eq!(widget.palette().len(), 6);
        assert_eq!(widget.palette()[3..], [Color32::from_rgb(128, 0, 0); 3]);
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn test_add_uses_sources_at_click_time() {
        let mut widget = PaletteWidget::default();
        let wheel = FixedHue(Color32::from_rgb(0, 0, 200));
        let slider = FixedBrightness(100);

        widget.handle_pointer_press(
            PointerPress {
                pos: hit_anchor(3, 0),
                button: PointerButton::Primary,
            },
            &wheel,
            &slider,
        );

        assert_eq!(widget.palette().last(), Some(&BLUE));
        assert_eq!(widget.compute_current_color(&wheel, &slider), BLUE);
    }

    #[test]
    fn test_remove_takes_first_equal_entry() {
        let mut widget = PaletteWidget::default();
        widget.set_palette(&[RED, BLUE, RED]);

        right_click_swatch(&mut widget, 2);

        assert_eq!(widget.palette(), vec![BLUE, RED]);
    }

    #[test]
    fn test_press_outside_everything_is_noop() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);

        for pos in [pos2(-100.0, -100.0), pos2(1000.0, 5.0), pos2(30.0, 55.0)] {
            for button in [PointerButton::Primary, PointerButton::Secondary] {
                assert!(!press(&mut widget, pos, button).changed());
            }
        }
        assert_eq!(widget.palette().len(), 3);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_hit_region_sits_above_circle_center() {
        let mut widget = PaletteWidget::default();
        // Center of swatch 0 is (30, 30): 25 px from the anchor, still a hit
        assert_eq!(right_click_swatch_at(&mut widget, pos2(30.0, 30.0)).removed, vec![RED]);
        // Bottom of what is now swatch 0 (green) is 50 px away from its anchor
        assert!(!right_click_swatch_at(&mut widget, pos2(30.0, 52.0)).changed());
        // Above the row, outside the drawn circle, still hits
        assert_eq!(right_click_swatch_at(&mut widget, pos2(30.0, -20.0)).removed, vec![GREEN]);
    }

    fn right_click_swatch_at(widget: &mut PaletteWidget, pos: Pos2) -> PressOutcome {
        press(widget, pos, PointerButton::Secondary)
    }

    #[test]
    fn test_scrollbar_tracks_count_after_interactions() {
        let mut widget = PaletteWidget::default();
        click_add(&mut widget);
        assert!(widget.scroll().is_visible());
        assert_eq!(widget.scroll().maximum(), 4);

        right_click_swatch(&mut widget, 0);
        assert!(!widget.scroll().is_visible());
        assert_eq!(widget.scroll().maximum(), 0);
    }

    #[test]
    fn test_scroll_shifts_hit_testing() {
        let mut widget = PaletteWidget::default();
        widget.set_palette(&[RED, GREEN, BLUE, RED, GREEN, BLUE, RED]);
        click_add(&mut widget);
        assert_eq!(widget.scroll().maximum(), 28);

        assert!(widget.set_scroll_value(6));
        // Swatch 1 now has its anchor at 90 - 60 = 30
        let outcome = press(&mut widget, pos2(30.0, 5.0), PointerButton::Secondary);
        assert_eq!(outcome.removed, vec![GREEN]);
    }

    #[test]
    fn test_set_palette_is_silent_copy() {
        let mut widget = PaletteWidget::default();
        let hits = counting_listener(&widget);
        widget.take_repaint_request();

        let mut colors = vec![BLUE; 10];
        widget.set_palette(&colors);
        colors.clear();

        assert_eq!(widget.palette(), vec![BLUE; 10]);
        assert_eq!(hits.get(), 0);
        assert!(!widget.scroll().is_visible());
        assert!(!widget.needs_repaint());

        widget.set_palette(&[]);
        assert!(widget.palette().is_empty());
    }

    #[test]
    fn test_empty_palette_add_button_in_first_slot() {
        let mut widget = PaletteWidget::default();
        widget.set_palette(&[]);
        assert_eq!(widget.display_list().len(), 3);

        let outcome = press(&mut widget, hit_anchor(0, 0), PointerButton::Secondary);
        assert_eq!(outcome.added, Some(Color32::from_rgb(128, 0, 0)));
        assert_eq!(widget.palette().len(), 1);
    }

    #[test]
    fn test_length_tracks_adds_minus_removes() {
        let mut widget = PaletteWidget::default();
        let mut expected = widget.palette();

        for step in 0..12 {
            if step % 3 == 2 {
                let outcome = right_click_swatch(&mut widget, 0);
                assert_eq!(outcome.removed.len(), 1);
                expected.remove(0);
            } else {
                click_add(&mut widget);
                expected.push(Color32::from_rgb(128, 0, 0));
            }
            // Keep the row scrolled to the start so slot anchors stay predictable
            widget.set_scroll_value(0);
        }

        assert_eq!(widget.palette(), expected);
    }

    #[test]
    fn test_repaint_requests_are_consumed() {
        let mut widget = PaletteWidget::default();
        assert!(widget.take_repaint_request());
        assert!(!widget.take_repaint_request());

        click_add(&mut widget);
        assert!(widget.take_repaint_request());

        assert!(widget.set_scroll_value(2));
        assert!(widget.take_repaint_request());
        assert!(!widget.set_scroll_value(2));
        assert!(!widget.needs_repaint());
    }

    #[test]
    fn test_removed_listener_is_not_called() {
        let mut widget = PaletteWidget::default();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = widget.add_change_listener(move |_| counter.set(counter.get() + 1));
        assert_eq!(widget.change_listener_count(), 1);

        assert!(widget.remove_change_listener(id));
        click_add(&mut widget);
        assert_eq!(hits.get(), 0);
        assert_eq!(widget.change_listener_count(), 0);
    }

    #[test]
    fn test_selected_marker_survives_interactions() {
        let mut widget = PaletteWidget::default();
        click_add(&mut widget);
        right_click_swatch(&mut widget, 0);
        assert_eq!(widget.selected_color(), None);

        widget.set_selected_color(Some(BLUE));
        assert_eq!(widget.selected_color(), Some(BLUE));
    }
}
