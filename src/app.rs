use std::cell::Cell;
use std::rc::Rc;

use egui_macroquad::egui::Color32;

use crate::color::to_hex;
use crate::config::ResolvedConfig;
use crate::listeners::ListenerId;
use crate::sources::{BrightnessSource, HueSource};
use crate::widget::PaletteWidget;

// =============================================================================
// Collaborators: hue wheel and brightness slider state
// =============================================================================

pub struct HueWheel {
    pub color: Color32,
}

impl Default for HueWheel {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(255, 0, 0),
        }
    }
}

impl HueSource for HueWheel {
    fn color(&self) -> Color32 {
        self.color
    }
}

pub struct BrightnessSlider {
    /// 0-100
    pub value: i32,
}

impl Default for BrightnessSlider {
    fn default() -> Self {
        Self { value: 100 }
    }
}

impl BrightnessSource for BrightnessSlider {
    fn value(&self) -> i32 {
        self.value
    }
}

// =============================================================================
// App: Color picker dialog state
// =============================================================================

pub struct App {
    pub wheel: HueWheel,
    pub slider: BrightnessSlider,
    pub palette: PaletteWidget,
    /// Seed colors the palette can be reset to
    seed_colors: Vec<Color32>,
    /// Last palette contents read back after a change notification
    saved_colors: Vec<Color32>,
    /// Raised by the change listener, cleared when `saved_colors` is refreshed
    palette_dirty: Rc<Cell<bool>>,
    listener: ListenerId,
}

impl App {
    pub fn new(config: ResolvedConfig) -> Self {
        let seed_colors = config.seed_colors.clone();
        let palette = PaletteWidget::new(config);

        let palette_dirty = Rc::new(Cell::new(false));
        let dirty = palette_dirty.clone();
        let listener = palette.add_change_listener(move |_| dirty.set(true));

        Self {
            wheel: HueWheel::default(),
            slider: BrightnessSlider::default(),
            saved_colors: palette.palette(),
            palette,
            seed_colors,
            palette_dirty,
            listener,
        }
    }

    /// Color the add button would append right now
    pub fn current_color(&self) -> Color32 {
        self.palette.compute_current_color(&self.wheel, &self.slider)
    }

    /// Re-read the palette if a change was announced. Returns true if it did.
    pub fn sync_saved_colors(&mut self) -> bool {
        if !self.palette_dirty.replace(false) {
            return false;
        }
        self.saved_colors = self.palette.palette();
        log::info!("palette now holds {} colors", self.saved_colors.len());
        true
    }

    pub fn saved_colors(&self) -> &[Color32] {
        &self.saved_colors
    }

    pub fn saved_colors_hex(&self) -> Vec<String> {
        self.saved_colors.iter().copied().map(to_hex).collect()
    }

    /// Put the configured seed colors back
    pub fn reset_palette(&mut self) {
        let seeds = self.seed_colors.clone();
        self.replace_palette(&seeds);
    }

    pub fn clear_palette(&mut self) {
        self.replace_palette(&[]);
    }

    // `set_palette` is silent, so the host refreshes its own view and asks
    // for the redraw.
    fn replace_palette(&mut self, colors: &[Color32]) {
        self.palette.set_palette(colors);
        self.palette.request_repaint();
        self.saved_colors = self.palette.palette();
    }

    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ResolvedConfig::default())
    }
}
