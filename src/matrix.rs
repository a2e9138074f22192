//! Square grid of dark/light modules
//!
//! The matrix is produced by an encoder (see [`crate::encode`]) or parsed from
//! a plain-text drawing, and is never mutated once built. Excavation derives a
//! fresh matrix instead.

use crate::error::RenderError;

/// A square, row-major grid of module states (`true` = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from rows, rejecting empty, ragged or non-square input
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, RenderError> {
        let size = rows.len();
        if size == 0 {
            return Err(RenderError::invalid_input("matrix has no rows"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(RenderError::invalid_input(format!(
                    "matrix is not square: row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    size
                )));
            }
            cells.extend(row);
        }

        Ok(Self { size, cells })
    }

    /// Build a matrix from a flat row-major cell vector of length `size * size`
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Result<Self, RenderError> {
        if size == 0 {
            return Err(RenderError::invalid_input("matrix has no rows"));
        }
        if cells.len() != size * size {
            return Err(RenderError::invalid_input(format!(
                "expected {} cells for a {}x{} matrix, got {}",
                size * size,
                size,
                size,
                cells.len()
            )));
        }
        Ok(Self { size, cells })
    }

    /// Encoder output is square by construction.
    pub(crate) fn from_square(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Parse a text drawing, one row per line
    ///
    /// `#`, `1`, `X` and `x` are dark; `.`, `0`, `-` and space are light.
    /// Leading and trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, RenderError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (first, last) = match (first, last) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(RenderError::invalid_input("matrix text is empty")),
        };

        let mut rows = Vec::with_capacity(last - first + 1);
        for (offset, line) in lines[first..=last].iter().enumerate() {
            let line_no = first + offset + 1;
            let row = line
                .chars()
                .enumerate()
                .map(|(col, c)| match c {
                    '#' | '1' | 'X' | 'x' => Ok(true),
                    '.' | '0' | '-' | ' ' => Ok(false),
                    other => Err(RenderError::invalid_input(format!(
                        "unexpected character {:?} at line {}, column {}",
                        other,
                        line_no,
                        col + 1
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Self::from_rows(rows)
    }

    /// Render back to `#`/`.` text, one row per line
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.rows() {
            out.extend(row.iter().map(|&dark| if dark { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }

    /// Side length of the matrix in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the module at column `x`, row `y` is dark
    ///
    /// Coordinates outside the matrix are light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[y * self.size + x]
    }

    /// The cells of row `y`
    pub fn row(&self, y: usize) -> &[bool] {
        &self.cells[y * self.size..(y + 1) * self.size]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&dark| dark).count()
    }

    pub(crate) fn set_light(&mut self, x: usize, y: usize) {
        self.cells[y * self.size + x] = false;
    }
}
