use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorParseError {
    #[error("expected six hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("bad seed color at index {index}")]
    SeedColor {
        index: usize,
        #[source]
        source: ColorParseError,
    },
    #[error("bad {field} color")]
    ChromeColor {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("widget {field} must be positive, got {value}")]
    NonPositiveSize { field: &'static str, value: f32 },
}
