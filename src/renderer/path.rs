//! Foreground path generation
//!
//! Each maximal horizontal run of dark modules becomes one closed rectangle
//! of height 1. Rows are scanned independently; runs are never merged across
//! rows.

use std::collections::BTreeSet;
use std::fmt;

use crate::matrix::ModuleMatrix;

/// One horizontal run of dark modules, in margin-offset module coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
}

/// Ordered rectangle operations covering every dark module exactly once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathCommands {
    runs: Vec<RunRect>,
}

impl PathCommands {
    pub fn runs(&self) -> &[RunRect] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Convert to an SVG path `d` attribute string
    ///
    /// `M0 0h7v1H0z` folds the separator into the move and drops the comma, so
    /// consecutive operations need no delimiter.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.runs.len() * 16);
        for run in &self.runs {
            d.push_str(&format!(
                "M{} {}h{}v1H{}z",
                run.x, run.y, run.width, run.x
            ));
        }
        d
    }

    /// Every module coordinate painted by these operations
    pub fn covered_cells(&self) -> BTreeSet<(usize, usize)> {
        self.runs
            .iter()
            .flat_map(|run| (run.x..run.x + run.width).map(move |x| (x, run.y)))
            .collect()
    }
}

impl fmt::Display for PathCommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_d())
    }
}

/// Emit one rectangle per maximal dark run, rows top to bottom
pub fn generate_path(matrix: &ModuleMatrix, margin: usize) -> PathCommands {
    let mut runs = Vec::new();

    for (y, row) in matrix.rows().enumerate() {
        let mut start: Option<usize> = None;
        let mut close = |start: usize, end: usize| {
            runs.push(RunRect {
                x: start + margin,
                y: y + margin,
                width: end - start,
            });
        };

        for (x, &dark) in row.iter().enumerate() {
            match (dark, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    close(s, x);
                    start = None;
                }
                _ => {}
            }
        }

        // A run still open at the end of the row reaches the last column
        if let Some(s) = start {
            close(s, row.len());
        }
    }

    tracing::trace!(ops = runs.len(), margin, "generated foreground path");
    PathCommands { runs }
}
