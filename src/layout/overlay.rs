//! Overlay image geometry
//!
//! Overlay sizes and positions are given in output units (the same units as
//! the render `size`) and converted here into module space. Sizing and
//! positioning are kept as separate steps: a missing size falls back to a
//! fixed fraction of the output, a missing position centers the image on the
//! matrix.

use crate::error::RenderError;

use super::config::OverlaySpec;
use super::margin::num_cells;
use super::types::{Footprint, ModuleRect, OverlayPlacement};

/// Fallback overlay edge as a fraction of the output size.
///
/// Rough estimate kept for compatibility; a better bound would count covered
/// modules rather than area.
pub const DEFAULT_IMG_SCALE: f64 = 0.1;

/// Overlay width and height in module space
///
/// A missing or zero dimension falls back to `floor(size * 0.1)` output units.
pub fn overlay_size(spec: &OverlaySpec, size: f64, scale: f64) -> (f64, f64) {
    let fallback = (size * DEFAULT_IMG_SCALE).floor();
    let pick = |v: Option<f64>| v.filter(|&v| v != 0.0).unwrap_or(fallback);
    (pick(spec.width) * scale, pick(spec.height) * scale)
}

/// Overlay top-left corner in module space, margin not applied
///
/// Unspecified coordinates center the overlay on the un-margined matrix.
pub fn overlay_position(
    spec: &OverlaySpec,
    matrix_size: usize,
    scale: f64,
    width: f64,
    height: f64,
) -> (f64, f64) {
    let half = matrix_size as f64 / 2.0;
    let x = spec.x.map_or(half - width / 2.0, |x| x * scale);
    let y = spec.y.map_or(half - height / 2.0, |y| y * scale);
    (x, y)
}

/// Smallest module-aligned rectangle containing `footprint`
pub fn excavation_rect(footprint: &Footprint) -> ModuleRect {
    let floor_x = footprint.x.floor();
    let floor_y = footprint.y.floor();
    let ceil_w = (footprint.width + footprint.x - floor_x).ceil();
    let ceil_h = (footprint.height + footprint.y - floor_y).ceil();
    ModuleRect::new(floor_x as i64, floor_y as i64, ceil_w as i64, ceil_h as i64)
}

/// Scale an overlay into module space and work out what it covers
///
/// Returns `None` when no overlay is requested.
pub fn overlay_placement(
    matrix_size: usize,
    size: f64,
    margin: usize,
    spec: Option<&OverlaySpec>,
) -> Result<Option<OverlayPlacement>, RenderError> {
    let Some(spec) = spec else {
        return Ok(None);
    };
    spec.validate()?;

    let scale = num_cells(matrix_size, margin)? as f64 / size;
    let (width, height) = overlay_size(spec, size, scale);
    let (x, y) = overlay_position(spec, matrix_size, scale, width, height);
    let footprint = Footprint {
        x,
        y,
        width,
        height,
    };
    let excavation = spec.excavate.then(|| excavation_rect(&footprint));

    tracing::debug!(
        x,
        y,
        width,
        height,
        excavation = ?excavation,
        "placed overlay"
    );

    Ok(Some(OverlayPlacement {
        footprint,
        opacity: spec.opacity.unwrap_or(1.0),
        excavation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_overlay() {
        assert_eq!(overlay_placement(21, 128.0, 0, None).unwrap(), None);
    }

    #[test]
    fn test_default_size_fallback() {
        // floor(128 * 0.1) = 12 output units, scaled by 21/128
        let spec = OverlaySpec::new("logo.png");
        let (w, h) = overlay_size(&spec, 128.0, 21.0 / 128.0);
        assert!(approx(w, 12.0 * 21.0 / 128.0));
        assert!(approx(h, w));
    }

    #[test]
    fn test_zero_dimension_uses_fallback() {
        let spec = OverlaySpec::new("logo.png").with_size(0.0, 20.0);
        let (w, h) = overlay_size(&spec, 100.0, 1.0);
        assert!(approx(w, 10.0));
        assert!(approx(h, 20.0));
    }

    #[test]
    fn test_centered_position() {
        let spec = OverlaySpec::new("logo.png");
        let (x, y) = overlay_position(&spec, 21, 1.0, 3.0, 5.0);
        assert!(approx(x, 9.0));
        assert!(approx(y, 8.0));
    }

    #[test]
    fn test_explicit_position_is_scaled() {
        let spec = OverlaySpec::new("logo.png").with_position(40.0, 10.0);
        let (x, y) = overlay_position(&spec, 21, 0.5, 3.0, 3.0);
        assert!(approx(x, 20.0));
        assert!(approx(y, 5.0));
    }

    #[test]
    fn test_excavation_rect_expands_to_module_boundaries() {
        let rect = excavation_rect(&Footprint {
            x: 9.5,
            y: 2.25,
            width: 2.0,
            height: 1.5,
        });
        assert_eq!(rect, ModuleRect::new(9, 2, 3, 2));
    }

    #[test]
    fn test_excavation_rect_on_integer_grid() {
        let rect = excavation_rect(&Footprint {
            x: 4.0,
            y: 4.0,
            width: 3.0,
            height: 3.0,
        });
        assert_eq!(rect, ModuleRect::new(4, 4, 3, 3));
    }

    #[test]
    fn test_placement_with_margin_scale() {
        // 21 modules + 2*4 margin = 29 cells over 290 units
        let spec = OverlaySpec::new("logo.png")
            .with_size(30.0, 30.0)
            .with_excavate(true);
        let placement = overlay_placement(21, 290.0, 4, Some(&spec))
            .unwrap()
            .unwrap();
        assert!(approx(placement.footprint.width, 3.0));
        assert!(approx(placement.footprint.x, 9.0));
        assert_eq!(placement.opacity, 1.0);
        assert_eq!(placement.excavation, Some(ModuleRect::new(9, 9, 3, 3)));
    }

    #[test]
    fn test_placement_without_excavation() {
        let spec = OverlaySpec::new("logo.png").with_opacity(0.25);
        let placement = overlay_placement(21, 128.0, 0, Some(&spec))
            .unwrap()
            .unwrap();
        assert_eq!(placement.excavation, None);
        assert_eq!(placement.opacity, 0.25);
    }

    #[test]
    fn test_placement_rejects_bad_spec() {
        let spec = OverlaySpec::new("logo.png").with_opacity(-0.1);
        assert!(overlay_placement(21, 128.0, 0, Some(&spec)).is_err());
    }
}
