use egui_macroquad::egui::Color32;

use crate::color::SEED_COLORS;

// =============================================================================
// Palette: The ordered list of saved colors
// =============================================================================
//
// Insertion order is display order. Entries have no identity beyond their
// value and position, so duplicates are allowed and removal is by value
// (first match wins).

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    colors: Vec<Color32>,
    /// Swatch drawn with the heavier outline. Compared by value.
    selected: Option<Color32>,
}

impl Palette {
    /// An empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Red, green and blue
    pub fn with_seed_colors() -> Self {
        Self::from_colors(&SEED_COLORS)
    }

    pub fn from_colors(colors: &[Color32]) -> Self {
        Self {
            colors: colors.to_vec(),
            selected: None,
        }
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    /// Owned copy of the current contents
    pub fn to_vec(&self) -> Vec<Color32> {
        self.colors.clone()
    }

    /// Replace the contents wholesale with a copy of `colors`
    pub fn replace(&mut self, colors: &[Color32]) {
        self.colors = colors.to_vec();
    }

    pub fn push(&mut self, color: Color32) {
        self.colors.push(color);
    }

    /// Remove the first entry equal to `color`, returning where it was
    pub fn remove_first(&mut self, color: Color32) -> Option<usize> {
        let index = self.colors.iter().position(|c| *c == color)?;
        self.colors.remove(index);
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<Color32> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn selected(&self) -> Option<Color32> {
        self.selected
    }

    pub fn set_selected(&mut self, color: Option<Color32>) {
        self.selected = color;
    }

    pub fn is_selected(&self, color: Color32) -> bool {
        self.selected == Some(color)
    }
}
