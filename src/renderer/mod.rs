//! SVG renderer for symbol drawings
//!
//! `path` turns a module matrix into run rectangles; `svg` serialises a
//! composed [`crate::drawing::DrawingDescription`].

pub mod config;
pub mod path;
pub mod svg;

pub use config::SvgConfig;
pub use path::{generate_path, PathCommands, RunRect};
pub use svg::render_svg;
