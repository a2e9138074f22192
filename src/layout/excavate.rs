//! Clearing modules beneath an overlay

use crate::matrix::ModuleMatrix;

use super::types::ModuleRect;

/// Copy of `matrix` with every module inside `rect` forced light
///
/// The rectangle is clamped to the matrix; a rectangle entirely outside it
/// yields an unchanged copy. The input is never modified.
pub fn excavate_modules(matrix: &ModuleMatrix, rect: &ModuleRect) -> ModuleMatrix {
    let mut out = matrix.clone();
    if let Some((cols, rows)) = rect.clamped(matrix.size()) {
        for y in rows {
            for x in cols.clone() {
                out.set_light(x, y);
            }
        }
    }
    out
}
