use egui_macroquad::egui::Color32;

use crate::error::ColorParseError;

// =============================================================================
// Fixed chrome colors
// =============================================================================

/// Outline color for swatches and the add button
pub const OUTLINE_GRAY: Color32 = Color32::from_rgb(128, 128, 128);
/// Canvas background behind the swatch row
pub const BACKGROUND_DARK_GRAY: Color32 = Color32::from_rgb(64, 64, 64);

/// Colors a fresh palette starts with
pub const SEED_COLORS: [Color32; 3] = [
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(0, 255, 0),
    Color32::from_rgb(0, 0, 255),
];

// =============================================================================
// RGB <-> HSB conversion
// =============================================================================
//
// Hue is normalized to [0.0, 1.0) rather than degrees. Channel rounding uses
// `(x * 255 + 0.5)` truncation so a round trip through HSB lands on the same
// bytes a classic desktop color chooser would produce.

/// Convert an RGB color to (hue, saturation, brightness), all in [0.0, 1.0]
pub fn rgb_to_hsb(col: Color32) -> (f32, f32, f32) {
    let r = col.r() as i32;
    let g = col.g() as i32;
    let b = col.b() as i32;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = cmax as f32 / 255.0;
    let saturation = if cmax != 0 {
        (cmax - cmin) as f32 / cmax as f32
    } else {
        0.0
    };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = (cmax - cmin) as f32;
        let redc = (cmax - r) as f32 / span;
        let greenc = (cmax - g) as f32 / span;
        let bluec = (cmax - b) as f32 / span;

        let sector = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        let h = sector / 6.0;

        if h < 0.0 { h + 1.0 } else { h }
    };

    (hue, saturation, brightness)
}

/// Convert (hue, saturation, brightness) back to an opaque RGB color.
/// Hue wraps around, so 1.25 and 0.25 are the same hue.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Color32 {
    if saturation == 0.0 {
        let v = to_channel(brightness);
        return Color32::from_rgb(v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Color32::from_rgb(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(x: f32) -> u8 {
    (x * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Blend the hue and saturation of `hue_color` with a brightness given on a
/// 0-100 scale. The brightness of `hue_color` itself is discarded.
pub fn compose_current_color(hue_color: Color32, brightness_percent: i32) -> Color32 {
    let (h, s, _) = rgb_to_hsb(hue_color);
    let brightness = brightness_percent.clamp(0, 100) as f32 / 100.0;
    hsb_to_rgb(h, s, brightness)
}

// =============================================================================
// Hex notation
// =============================================================================

/// Format as `#RRGGBB`
pub fn to_hex(col: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}", col.r(), col.g(), col.b())
}

/// Parse `#RRGGBB` or `RRGGBB`, case-insensitive
pub fn parse_hex(text: &str) -> Result<Color32, ColorParseError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorParseError::Length(text.to_owned()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorParseError::Digit(text.to_owned()))
    };

    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
