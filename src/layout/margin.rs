//! Quiet-zone policy

use crate::error::{require_non_negative, RenderError};

/// Quiet zone required by the QR standard
pub const SPEC_MARGIN_SIZE: usize = 4;
/// Margin used when no quiet zone is requested
pub const DEFAULT_MARGIN_SIZE: usize = 0;

/// Number of empty modules to pad on each side of the matrix
///
/// An explicit `margin_modules` wins and is floored. Negative or non-finite
/// values are rejected rather than clamped.
pub fn margin_size(include_margin: bool, margin_modules: Option<f64>) -> Result<usize, RenderError> {
    match margin_modules {
        Some(modules) => {
            let modules = require_non_negative("margin_modules", modules)?;
            Ok(modules.floor() as usize)
        }
        None if include_margin => Ok(SPEC_MARGIN_SIZE),
        None => Ok(DEFAULT_MARGIN_SIZE),
    }
}

/// Viewport edge length in modules
///
/// Fails when `matrix_size + 2 * margin` does not fit in a `usize`.
pub fn num_cells(matrix_size: usize, margin: usize) -> Result<usize, RenderError> {
    margin
        .checked_mul(2)
        .and_then(|m| m.checked_add(matrix_size))
        .ok_or_else(|| {
            RenderError::invalid_config(
                "margin_modules",
                format!("margin of {} modules is too large", margin),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_margin_flag() {
        assert_eq!(margin_size(true, None).unwrap(), 4);
        assert_eq!(margin_size(false, None).unwrap(), 0);
    }

    #[test]
    fn test_explicit_margin_overrides_flag() {
        assert_eq!(margin_size(true, Some(1.0)).unwrap(), 1);
        assert_eq!(margin_size(false, Some(6.0)).unwrap(), 6);
        assert_eq!(margin_size(true, Some(0.0)).unwrap(), 0);
    }

    #[test]
    fn test_explicit_margin_is_floored() {
        assert_eq!(margin_size(false, Some(2.9)).unwrap(), 2);
        assert_eq!(margin_size(false, Some(0.4)).unwrap(), 0);
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = margin_size(false, Some(-1.0)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidConfig {
                field: "margin_modules",
                ..
            }
        ));
        assert!(margin_size(true, Some(-0.5)).is_err());
        assert!(margin_size(true, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_num_cells() {
        assert_eq!(num_cells(21, 4).unwrap(), 29);
        assert_eq!(num_cells(21, 0).unwrap(), 21);
        assert_eq!(num_cells(1, 2).unwrap(), 5);
    }

    #[test]
    fn test_huge_margin_rejected() {
        let margin = margin_size(false, Some(1e30)).unwrap();
        let err = num_cells(21, margin).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidConfig {
                field: "margin_modules",
                ..
            }
        ));
        assert!(num_cells(2, usize::MAX / 2).is_err());
        assert_eq!(num_cells(1, usize::MAX / 2 - 1).unwrap(), usize::MAX - 2);
    }
}
