// File: crates/accrue-core/src/config.rs
// Summary: Chart settings loaded from TOML; every field has a default.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{Margin, HEIGHT};

/// Top-level chart settings (accrue.toml).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// CSV file with `Date` and `accumulate` columns.
    pub data: PathBuf,
    /// Outer chart height; fixed regardless of container size.
    pub height: f32,
    /// Delay between animation ticks.
    pub tick_delay_ms: u64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    pub currency_prefix: String,
    pub theme: String,
    pub margin: Margin,
    pub label: LabelSettings,
    pub marker: MarkerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: PathBuf::from("Orphasol_1000days.csv"),
            height: HEIGHT,
            tick_delay_ms: 25,
            tick_count: 10,
            currency_prefix: "NT$ ".to_string(),
            theme: "light".to_string(),
            margin: Margin::default(),
            label: LabelSettings::default(),
            marker: MarkerSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}

/// Value label placement relative to the marker.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Horizontal gap between marker and label.
    pub spacing: f32,
    /// Vertical offset of the label baseline from the marker.
    pub height_offset: f32,
    /// Plate padding on each side of the text.
    pub padding: f32,
    /// Nominal text height used to size the plate.
    pub text_height: f32,
    /// Distance from the baseline to the top of the text box.
    pub ascent: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            height_offset: -10.0,
            padding: 3.0,
            text_height: 16.0,
            ascent: 12.0,
            font_size: 12.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerSettings {
    pub radius: f32,
    pub shadow_radius: f32,
}

impl Default for MarkerSettings {
    fn default() -> Self {
        Self { radius: 5.0, shadow_radius: 7.0 }
    }
}
