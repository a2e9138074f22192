//! Composition of one symbol drawing
//!
//! [`compose`] runs the whole pipeline: margin, overlay geometry, excavation,
//! path generation. The resulting [`DrawingDescription`] is renderer-neutral;
//! [`crate::renderer::render_svg`] serialises it.

use std::borrow::Cow;

use crate::error::RenderError;
use crate::layout::{
    excavate_modules, margin_size, num_cells, overlay_placement, QrOptions,
};
use crate::matrix::ModuleMatrix;
use crate::renderer::path::{generate_path, PathCommands};

/// An overlay image positioned in viewport coordinates (margin applied)
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePlacement {
    pub source: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

/// Everything needed to draw one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingDescription {
    /// Output edge length
    pub size: f64,
    /// Viewport edge length in modules, `matrix size + 2 * margin`
    pub num_cells: usize,
    pub margin: usize,
    pub background_color: String,
    pub foreground_color: String,
    /// Dark modules, offset by the margin
    pub foreground: PathCommands,
    pub image: Option<ImagePlacement>,
    pub title: Option<String>,
}

impl DrawingDescription {
    /// `min-x min-y width height` of the square viewport
    pub fn view_box(&self) -> [usize; 4] {
        [0, 0, self.num_cells, self.num_cells]
    }

    /// Path filling the whole viewport
    pub fn background_d(&self) -> String {
        format!("M0,0 h{0}v{0}H0z", self.num_cells)
    }
}

/// Build the drawing for `matrix` under `options`
pub fn compose(matrix: &ModuleMatrix, options: &QrOptions) -> Result<DrawingDescription, RenderError> {
    let size = options.validated_size()?;
    let margin = margin_size(options.include_margin, options.margin_modules)?;
    let num_cells = num_cells(matrix.size(), margin)?;
    tracing::debug!(modules = matrix.size(), margin, num_cells, "composing drawing");

    let placement = overlay_placement(matrix.size(), size, margin, options.overlay.as_ref())?;

    let cells = match placement.as_ref().and_then(|p| p.excavation.as_ref()) {
        Some(rect) => Cow::Owned(excavate_modules(matrix, rect)),
        None => Cow::Borrowed(matrix),
    };

    let image = match (&options.overlay, &placement) {
        (Some(spec), Some(placement)) => Some(ImagePlacement {
            source: spec.source.clone(),
            x: placement.footprint.x + margin as f64,
            y: placement.footprint.y + margin as f64,
            width: placement.footprint.width,
            height: placement.footprint.height,
            opacity: placement.opacity,
        }),
        _ => None,
    };

    let foreground = generate_path(&cells, margin);
    tracing::debug!(ops = foreground.len(), "foreground path ready");

    Ok(DrawingDescription {
        size,
        num_cells,
        margin,
        background_color: options.background_color.clone(),
        foreground_color: options.foreground_color.clone(),
        foreground,
        image,
        title: options.title.clone().filter(|t| !t.is_empty()),
    })
}
