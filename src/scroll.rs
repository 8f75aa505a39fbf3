use crate::layout::scroll_shift;

/// Horizontal scroll control for the swatch row.
///
/// Values are abstract scroll units in `[0, maximum]`. Converting to pixels
/// happens only at render and hit-test time (see [`ScrollState::pixel_shift`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    value: i32,
    maximum: i32,
    visible: bool,
}

/// Scroll range needed for `count` swatches; non-positive means no scrolling
pub fn range_for_count(count: usize) -> i32 {
    count as i32 * 6 - 20
}

impl ScrollState {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pixel_shift(&self) -> i32 {
        scroll_shift(self.value)
    }

    /// Recompute visibility and range after the palette length changed.
    /// Hiding the bar resets it to the start.
    pub fn update_for_count(&mut self, count: usize) {
        let range = range_for_count(count);
        if range > 0 {
            self.visible = true;
            self.maximum = range;
            self.value = self.value.clamp(0, range);
        } else {
            self.visible = false;
            self.maximum = 0;
            self.value = 0;
        }
    }

    /// Move the thumb. Returns true if the value actually changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let value = value.clamp(0, self.maximum);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}
