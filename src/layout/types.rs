//! Geometric types in module space

use std::ops::Range;

/// An axis-aligned rectangle on integer module coordinates
///
/// May extend past the matrix (including negative origins); use
/// [`ModuleRect::clamped`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl ModuleRect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `i64::MAX`
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i64::MAX`
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// Column and row ranges of this rectangle intersected with `[0, size)²`
    ///
    /// Returns `None` when the intersection is empty.
    pub fn clamped(&self, size: usize) -> Option<(Range<usize>, Range<usize>)> {
        let limit = i64::try_from(size).unwrap_or(i64::MAX);
        let clamp = |v: i64| v.clamp(0, limit) as usize;

        let cols = clamp(self.x)..clamp(self.right());
        let rows = clamp(self.y)..clamp(self.bottom());
        if cols.is_empty() || rows.is_empty() {
            None
        } else {
            Some((cols, rows))
        }
    }

    /// Whether the module at `(x, y)` lies inside this rectangle
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The overlay's unrounded footprint in module space (margin not applied)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Footprint {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the unit module at `(x, y)` overlaps the interior of this footprint
    pub fn overlaps_module(&self, x: i64, y: i64) -> bool {
        let (mx, my) = (x as f64, y as f64);
        mx < self.right() && mx + 1.0 > self.x && my < self.bottom() && my + 1.0 > self.y
    }
}

/// Scaled overlay geometry ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayPlacement {
    /// Position and size in module space
    pub footprint: Footprint,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    /// Modules to clear beneath the overlay, when excavation was requested
    pub excavation: Option<ModuleRect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_inside() {
        let r = ModuleRect::new(1, 2, 3, 4);
        assert_eq!(r.clamped(10), Some((1..4, 2..6)));
    }

    #[test]
    fn test_clamped_overflowing() {
        let r = ModuleRect::new(-2, 8, 5, 5);
        assert_eq!(r.clamped(10), Some((0..3, 8..10)));
    }

    #[test]
    fn test_clamped_outside_is_none() {
        assert_eq!(ModuleRect::new(12, 0, 3, 3).clamped(10), None);
        assert_eq!(ModuleRect::new(-5, 0, 3, 3).clamped(10), None);
        assert_eq!(ModuleRect::new(2, 2, 0, 3).clamped(10), None);
    }

    #[test]
    fn test_huge_rect_saturates() {
        let r = ModuleRect::new(5, 5, i64::MAX, 2);
        assert_eq!(r.right(), i64::MAX);
        assert_eq!(r.bottom(), 7);
        assert_eq!(r.clamped(21), Some((5..21, 5..7)));

        let r = ModuleRect::new(i64::MIN, i64::MIN, i64::MAX, i64::MAX);
        assert_eq!(r.right(), -1);
        assert_eq!(r.clamped(21), None);
    }

    #[test]
    fn test_contains() {
        let r = ModuleRect::new(1, 1, 2, 2);
        assert!(r.contains(1, 1));
        assert!(r.contains(2, 2));
        assert!(!r.contains(3, 2));
        assert!(!r.contains(0, 1));
    }

    #[test]
    fn test_footprint_overlap_is_strict() {
        let f = Footprint {
            x: 1.0,
            y: 1.0,
            width: 2.0,
            height: 2.0,
        };
        assert!(f.overlaps_module(1, 1));
        assert!(f.overlaps_module(2, 2));
        // Touching an edge is not overlapping
        assert!(!f.overlaps_module(0, 1));
        assert!(!f.overlaps_module(3, 1));
    }
}
