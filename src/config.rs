use std::fs;
use std::path::Path;

use egui_macroquad::egui::{vec2, Color32, Vec2};
use serde::Deserialize;

use crate::color::{parse_hex, to_hex, BACKGROUND_DARK_GRAY, OUTLINE_GRAY, SEED_COLORS};
use crate::error::ConfigError;

// =============================================================================
// WidgetConfig: Size and colors of the palette strip
// =============================================================================
//
// Loaded from TOML. Every key is optional:
//
//     width = 350.0
//     height = 60.0
//     seed_colors = ["#FF0000", "#00FF00", "#0000FF"]
//     background = "#404040"
//     outline = "#808080"

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Canvas width in pixels (the scrollbar spans the same width)
    pub width: f32,
    /// Canvas height in pixels, excluding the scrollbar
    pub height: f32,
    pub seed_colors: Vec<String>,
    pub background: String,
    pub outline: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: 350.0,
            height: 60.0,
            seed_colors: SEED_COLORS.iter().copied().map(to_hex).collect(),
            background: to_hex(BACKGROUND_DARK_GRAY),
            outline: to_hex(OUTLINE_GRAY),
        }
    }
}

/// A validated config with colors already parsed
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub size: Vec2,
    pub seed_colors: Vec<Color32>,
    pub background: Color32,
    pub outline: Color32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            size: vec2(350.0, 60.0),
            seed_colors: SEED_COLORS.to_vec(),
            background: BACKGROUND_DARK_GRAY,
            outline: OUTLINE_GRAY,
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("loaded widget config from {}", path.display());
        Ok(config)
    }

    /// Check sizes and parse every color
    pub fn validate(&self) -> Result<ResolvedConfig, ConfigError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveSize { field, value });
            }
        }

        let seed_colors = self
            .seed_colors
            .iter()
            .enumerate()
            .map(|(index, text)| {
                parse_hex(text).map_err(|source| ConfigError::SeedColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let chrome = |field: &'static str, text: &str| {
            parse_hex(text).map_err(|source| ConfigError::ChromeColor { field, source })
        };

        Ok(ResolvedConfig {
            size: vec2(self.width, self.height),
            seed_colors,
            background: chrome("background", &self.background)?,
            outline: chrome("outline", &self.outline)?,
        })
    }
}
