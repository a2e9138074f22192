//! Render options recognised by the pipeline

use crate::encode::EccLevel;
use crate::error::{require_finite, require_non_negative, RenderError};

/// Default edge length of the rendered symbol
pub const DEFAULT_SIZE: f64 = 128.0;
pub const DEFAULT_BG_COLOR: &str = "#FFFFFF";
pub const DEFAULT_FG_COLOR: &str = "#000000";
pub const DEFAULT_MIN_VERSION: u8 = 1;

/// An image drawn on top of the symbol
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySpec {
    /// Image reference (URL, path or data URI), emitted as-is
    pub source: String,
    /// Width in output units; `None` or zero falls back to a default
    pub width: Option<f64>,
    /// Height in output units; `None` or zero falls back to a default
    pub height: Option<f64>,
    /// Clear the modules beneath the image
    pub excavate: bool,
    /// Left edge in output units; centered when `None`
    pub x: Option<f64>,
    /// Top edge in output units; centered when `None`
    pub y: Option<f64>,
    /// Opacity in `[0, 1]`, default 1
    pub opacity: Option<f64>,
}

impl OverlaySpec {
    /// Create an overlay for `source` with default geometry
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            width: None,
            height: None,
            excavate: false,
            x: None,
            y: None,
            opacity: None,
        }
    }

    /// Set the width and height in output units
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set an explicit top-left position in output units
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the opacity
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Clear the modules beneath the image
    pub fn with_excavate(mut self, excavate: bool) -> Self {
        self.excavate = excavate;
        self
    }

    /// Reject negative sizes, non-finite coordinates and out-of-range opacity
    pub fn validate(&self) -> Result<(), RenderError> {
        if let Some(w) = self.width {
            require_non_negative("overlay.width", w)?;
        }
        if let Some(h) = self.height {
            require_non_negative("overlay.height", h)?;
        }
        if let Some(x) = self.x {
            require_finite("overlay.x", x)?;
        }
        if let Some(y) = self.y {
            require_finite("overlay.y", y)?;
        }
        if let Some(opacity) = self.opacity {
            let opacity = require_finite("overlay.opacity", opacity)?;
            if !(0.0..=1.0).contains(&opacity) {
                return Err(RenderError::invalid_config(
                    "overlay.opacity",
                    format!("must be within [0, 1], got {}", opacity),
                ));
            }
        }
        Ok(())
    }
}

/// Options for one render call
#[derive(Debug, Clone, PartialEq)]
pub struct QrOptions {
    /// Output edge length
    pub size: f64,
    /// Error-correction level handed to the encoder
    pub level: EccLevel,
    /// Smallest symbol version the encoder may choose
    pub min_version: u8,
    pub background_color: String,
    pub foreground_color: String,
    /// Use the standard 4-module quiet zone when no explicit margin is set
    pub include_margin: bool,
    /// Explicit margin in modules, overriding `include_margin`
    pub margin_modules: Option<f64>,
    pub overlay: Option<OverlaySpec>,
    /// Accessible label
    pub title: Option<String>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            level: EccLevel::default(),
            min_version: DEFAULT_MIN_VERSION,
            background_color: DEFAULT_BG_COLOR.to_string(),
            foreground_color: DEFAULT_FG_COLOR.to_string(),
            include_margin: false,
            margin_modules: None,
            overlay: None,
            title: None,
        }
    }
}

impl QrOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output edge length
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the error-correction level
    pub fn with_level(mut self, level: EccLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the smallest symbol version
    pub fn with_min_version(mut self, version: u8) -> Self {
        self.min_version = version;
        self
    }

    /// Set the background and foreground colors
    pub fn with_colors(mut self, background: impl Into<String>, foreground: impl Into<String>) -> Self {
        self.background_color = background.into();
        self.foreground_color = foreground.into();
        self
    }

    /// Use the standard quiet zone
    pub fn with_include_margin(mut self, include: bool) -> Self {
        self.include_margin = include;
        self
    }

    /// Set an explicit margin in modules
    pub fn with_margin(mut self, modules: f64) -> Self {
        self.margin_modules = Some(modules);
        self
    }

    /// Draw an image over the symbol
    pub fn with_overlay(mut self, overlay: OverlaySpec) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Set the accessible title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Reject a non-positive or non-finite size
    pub fn validated_size(&self) -> Result<f64, RenderError> {
        let size = require_finite("size", self.size)?;
        if size <= 0.0 {
            return Err(RenderError::invalid_config(
                "size",
                format!("must be positive, got {}", size),
            ));
        }
        Ok(size)
    }
}
