use egui_macroquad::egui::Color32;

/// Sibling widget that provides the picked hue (a hue wheel, typically)
pub trait HueSource {
    fn color(&self) -> Color32;
}

/// Sibling widget that provides brightness on a 0-100 scale
pub trait BrightnessSource {
    fn value(&self) -> i32;
}

/// Fixed hue, for hosts without a wheel and for tests
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedHue(pub Color32);

impl HueSource for FixedHue {
    fn color(&self) -> Color32 {
        self.0
    }
}

/// Fixed brightness percentage
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBrightness(pub i32);

impl BrightnessSource for FixedBrightness {
    fn value(&self) -> i32 {
        self.0
    }
}
