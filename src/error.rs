//! Error types for the render pipeline

use thiserror::Error;

use crate::encode::EncodeError;

/// Errors that can occur while turning a module matrix into a drawing
#[derive(Debug, Error)]
pub enum RenderError {
    /// The module matrix is empty, ragged, non-square or unparseable
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A numeric option is negative, non-finite or out of range
    #[error("invalid config for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The encoding collaborator could not produce a matrix
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
}

impl RenderError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid config error for the named option
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject non-finite values for `field`
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, RenderError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RenderError::invalid_config(
            field,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Reject negative or non-finite values for `field`
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, RenderError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(RenderError::invalid_config(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message_names_field() {
        let err = RenderError::invalid_config("size", "must be positive");
        assert_eq!(err.to_string(), "invalid config for 'size': must be positive");
    }

    #[test]
    fn test_require_non_negative() {
        assert_eq!(require_non_negative("margin", 0.0).unwrap(), 0.0);
        assert_eq!(require_non_negative("margin", 2.5).unwrap(), 2.5);
        assert!(require_non_negative("margin", -1.0).is_err());
        assert!(require_non_negative("margin", f64::NAN).is_err());
        assert!(require_non_negative("margin", f64::INFINITY).is_err());
    }
}
