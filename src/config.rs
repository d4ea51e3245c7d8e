//! Scene configuration: window, trajectory endpoints and marker style.
//!
//! Every field has a default reproducing the stock scene, so a TOML file only
//! needs to name what it changes.

use std::fs;
use std::path::Path;
use ggez::glam::Vec2;
use ggez::graphics::Color;
use serde::{Deserialize, Serialize};
use crate::error::ConfigError;
use crate::parabola_curve::FitMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Clear color as RGB bytes.
    pub background: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Parabola"),
            width: 1000.0,
            height: 1000.0,
            // Slate gray
            background: [112, 128, 144],
        }
    }
}

impl WindowConfig {
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::from_rgb(r, g, b)
    }
}

/// Visual constants of the trajectory markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParabolaStyle {
    /// Texture stamped on every sample, looked up as `/<name>.png` in the resources.
    pub circle_texture: String,
    /// Texture of the arrow head, pointing along +x.
    pub arrow_texture: String,
    /// Scale of the first circle.
    pub base_scale: f32,
    /// Scale added per sample.
    pub size_growth: f32,
    pub max_scale: f32,
    pub fit: FitMode,
}

impl Default for ParabolaStyle {
    fn default() -> Self {
        Self {
            circle_texture: String::from("blue-circle-fadeout"),
            arrow_texture: String::from("blue-arrow"),
            base_scale: 0.33,
            size_growth: 0.00125,
            max_scale: 1.0,
            fit: FitMode::Exact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParabolaConfig {
    pub window: WindowConfig,
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub style: ParabolaStyle,
}

impl Default for ParabolaConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            from: [325.0, 250.0],
            to: [28.0, 64.0],
            style: ParabolaStyle::default(),
        }
    }
}

impl ParabolaConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ParabolaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Validation(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        for (name, p) in [("from", self.from), ("to", self.to)] {
            if !p.iter().all(|v| v.is_finite()) {
                return Err(ConfigError::Validation(format!("{} must be a finite point", name)));
            }
        }
        let style = &self.style;
        if !(style.base_scale > 0.0 && style.max_scale > 0.0) {
            return Err(ConfigError::Validation(String::from("marker scales must be positive")));
        }
        if style.base_scale > style.max_scale {
            return Err(ConfigError::Validation(format!(
                "base_scale ({}) exceeds max_scale ({})",
                style.base_scale, style.max_scale
            )));
        }
        if !(style.size_growth >= 0.0) {
            return Err(ConfigError::Validation(String::from("size_growth must not be negative")));
        }
        Ok(())
    }

    pub fn from_point(&self) -> Vec2 {
        Vec2::from(self.from)
    }

    pub fn to_point(&self) -> Vec2 {
        Vec2::from(self.to)
    }
}

/// Parses `X,Y` as given on the command line.
pub fn parse_point(s: &str) -> Result<Vec2, ConfigError> {
    let invalid = || ConfigError::InvalidPoint(s.to_string());
    let (x, y) = s.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x.trim().parse().map_err(|_| invalid())?;
    let y: f32 = y.trim().parse().map_err(|_| invalid())?;
    if !(x.is_finite() && y.is_finite()) {
        return Err(invalid());
    }
    Ok(Vec2::new(x, y))
}
