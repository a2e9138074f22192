//! Adapter over the `qrcode` encoder
//!
//! Symbol encoding (error correction, masking, version choice) is delegated
//! entirely to the `qrcode` crate. This module only maps our options onto it
//! and converts the result into a [`ModuleMatrix`].

use std::fmt;
use std::str::FromStr;

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};
use serde::Deserialize;
use thiserror::Error;

use crate::matrix::ModuleMatrix;

/// Smallest QR symbol version
pub const MIN_VERSION: u8 = 1;
/// Largest QR symbol version
pub const MAX_VERSION: u8 = 40;

/// Errors reported by the encoding collaborator
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Unrecognised error-correction level name
    #[error("unknown error correction level '{0}' (expected L, M, Q or H)")]
    UnknownLevel(String),

    /// Requested minimum version outside 1..=40
    #[error("minimum version {0} is outside 1..=40")]
    InvalidVersion(u8),

    /// Payload does not fit even the largest symbol
    #[error("payload of {len} bytes does not fit any version from {min_version} to 40 at level {level}")]
    DataTooLong {
        len: usize,
        min_version: u8,
        level: EccLevel,
    },

    /// Any other encoder failure
    #[error("qr encoder: {0}")]
    Encoder(#[from] QrError),
}

/// Error-correction level, passed straight through to the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EccLevel {
    /// ~7% recovery
    #[default]
    L,
    /// ~15% recovery
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl EccLevel {
    fn to_qrcode(self) -> EcLevel {
        match self {
            EccLevel::L => EcLevel::L,
            EccLevel::M => EcLevel::M,
            EccLevel::Q => EcLevel::Q,
            EccLevel::H => EcLevel::H,
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            EccLevel::L => "L",
            EccLevel::M => "M",
            EccLevel::Q => "Q",
            EccLevel::H => "H",
        };
        f.write_str(letter)
    }
}

impl FromStr for EccLevel {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(EccLevel::L),
            "m" | "medium" => Ok(EccLevel::M),
            "q" | "quartile" => Ok(EccLevel::Q),
            "h" | "high" => Ok(EccLevel::H),
            _ => Err(EncodeError::UnknownLevel(s.to_string())),
        }
    }
}

impl TryFrom<String> for EccLevel {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Encode `value` into a module matrix using the smallest version at or above
/// `min_version` that fits.
pub fn encode(value: &str, level: EccLevel, min_version: u8) -> Result<ModuleMatrix, EncodeError> {
    if !(MIN_VERSION..=MAX_VERSION).contains(&min_version) {
        return Err(EncodeError::InvalidVersion(min_version));
    }

    let data = value.as_bytes();
    for version in min_version..=MAX_VERSION {
        match QrCode::with_version(data, Version::Normal(i16::from(version)), level.to_qrcode()) {
            Ok(code) => {
                tracing::debug!(version, %level, width = code.width(), "encoded payload");
                return Ok(to_matrix(&code));
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(EncodeError::DataTooLong {
        len: data.len(),
        min_version,
        level,
    })
}

fn to_matrix(code: &QrCode) -> ModuleMatrix {
    let width = code.width();
    let cells = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect::<Vec<_>>();
    ModuleMatrix::from_square(width, cells)
}
