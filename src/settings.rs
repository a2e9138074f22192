//! TOML settings files
//!
//! A settings file covers the same surface as [`QrOptions`]. Every key is
//! optional; missing keys keep their defaults and unknown keys are errors.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::encode::EccLevel;
use crate::layout::{OverlaySpec, QrOptions};

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Render settings as written in a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub size: Option<f64>,
    pub level: Option<EccLevel>,
    pub min_version: Option<u8>,
    pub background_color: Option<String>,
    pub foreground_color: Option<String>,
    pub include_margin: Option<bool>,
    pub margin_modules: Option<f64>,
    pub title: Option<String>,
    pub overlay: Option<OverlaySettings>,
}

/// The `[overlay]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlaySettings {
    pub source: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    #[serde(default)]
    pub excavate: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub opacity: Option<f64>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay these settings onto `options`, keeping values not set here
    pub fn apply_to(self, mut options: QrOptions) -> QrOptions {
        if let Some(size) = self.size {
            options.size = size;
        }
        if let Some(level) = self.level {
            options.level = level;
        }
        if let Some(version) = self.min_version {
            options.min_version = version;
        }
        if let Some(bg) = self.background_color {
            options.background_color = bg;
        }
        if let Some(fg) = self.foreground_color {
            options.foreground_color = fg;
        }
        if let Some(include) = self.include_margin {
            options.include_margin = include;
        }
        if let Some(margin) = self.margin_modules {
            options.margin_modules = Some(margin);
        }
        if let Some(title) = self.title {
            options.title = Some(title);
        }
        if let Some(overlay) = self.overlay {
            options.overlay = Some(overlay.into());
        }
        options
    }

    /// Settings merged over the defaults
    pub fn into_options(self) -> QrOptions {
        self.apply_to(QrOptions::default())
    }
}

impl From<OverlaySettings> for OverlaySpec {
    fn from(o: OverlaySettings) -> Self {
        OverlaySpec {
            source: o.source,
            width: o.width,
            height: o.height,
            excavate: o.excavate,
            x: o.x,
            y: o.y,
            opacity: o.opacity,
        }
    }
}
