//! qr-vector - QR module matrices to compact vector drawings
//!
//! This library turns a square grid of dark/light modules into an SVG made of
//! one path rectangle per horizontal run of dark modules, with an optional
//! quiet zone, overlay image (optionally clearing the modules beneath it) and
//! accessible title.
//!
//! # Example
//!
//! ```rust
//! use qr_vector::{render, ModuleMatrix};
//!
//! let matrix = ModuleMatrix::parse("#.#\n.#.\n#.#").unwrap();
//! let svg = render(&matrix).unwrap();
//! assert!(svg.contains(r#"viewBox="0 0 3 3""#));
//! ```

pub mod drawing;
pub mod encode;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod renderer;
pub mod settings;

pub use drawing::{compose, DrawingDescription, ImagePlacement};
pub use encode::{encode, EccLevel, EncodeError};
pub use error::RenderError;
pub use layout::{OverlaySpec, QrOptions};
pub use matrix::ModuleMatrix;
pub use renderer::{generate_path, render_svg, PathCommands, SvgConfig};
pub use settings::{Settings, SettingsError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Symbol options
    pub options: QrOptions,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol options
    pub fn with_options(mut self, options: QrOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render a module matrix to SVG with default configuration
pub fn render(matrix: &ModuleMatrix) -> Result<String, RenderError> {
    render_with_config(matrix, &RenderConfig::default())
}

/// Render a module matrix to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use qr_vector::{render_with_config, ModuleMatrix, QrOptions, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_options(QrOptions::new().with_include_margin(true))
///     .with_svg(SvgConfig::new().with_standalone(false));
///
/// let matrix = ModuleMatrix::parse("#").unwrap();
/// let svg = render_with_config(&matrix, &config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 9 9""#));
/// ```
pub fn render_with_config(matrix: &ModuleMatrix, config: &RenderConfig) -> Result<String, RenderError> {
    let drawing = compose(matrix, &config.options)?;
    Ok(render_svg(&drawing, &config.svg))
}

/// Encode `value` and render it to SVG
///
/// The error-correction level and minimum version come from
/// `config.options`; they are only used by the encoder.
pub fn render_value(value: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let matrix = encode(value, config.options.level, config.options.min_version)?;
    render_with_config(&matrix, config)
}
