//! Module-space geometry for the symbol
//!
//! This module decides the quiet zone, scales an optional overlay image into
//! module coordinates and clears the modules it covers. Everything here is a
//! pure function of its inputs.

pub mod config;
pub mod excavate;
pub mod margin;
pub mod overlay;
pub mod types;

pub use config::{OverlaySpec, QrOptions};
pub use excavate::excavate_modules;
pub use margin::{margin_size, num_cells, SPEC_MARGIN_SIZE};
pub use overlay::{excavation_rect, overlay_placement, overlay_position, overlay_size};
pub use types::*;
