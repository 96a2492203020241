//! Axis-aligned rectangles and overlap testing
//!
//! Every collision in the game is an AABB check: the player against the gate
//! zone, and the player against each falling toy. Callers supply
//! phase-adjusted hitboxes; this module knows nothing about phases.

use glam::Vec2;

/// An axis-aligned rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict AABB overlap: rectangles that merely touch along an edge do
    /// not count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Point containment (half-open on the far edges), used for pointer
    /// hit tests against UI button rects.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x < self.x + self.w
            && point.y >= self.y
            && point.y < self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let far = Rect::new(500.0, 500.0, 10.0, 10.0);
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        // Shares the x=100 edge exactly
        let right = Rect::new(100.0, 0.0, 50.0, 100.0);
        assert!(!a.overlaps(&right));
        // Shares the y=100 edge exactly
        let below = Rect::new(0.0, 100.0, 100.0, 50.0);
        assert!(!a.overlaps(&below));
        // One unit of penetration flips both
        let near = Rect::new(99.0, 0.0, 50.0, 100.0);
        assert!(a.overlaps(&near));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 200.0, 200.0);
        let inner = Rect::new(80.0, 80.0, 20.0, 20.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(60.0, 35.0)));
        // Far edges are exclusive
        assert!(!r.contains(Vec2::new(110.0, 35.0)));
        assert!(!r.contains(Vec2::new(60.0, 60.0)));
        assert!(!r.contains(Vec2::new(9.9, 35.0)));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (
            -2000.0f32..2000.0,
            -2000.0f32..2000.0,
            0.1f32..500.0,
            0.1f32..500.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_nonzero_rect_overlaps_itself(a in arb_rect()) {
            prop_assert!(a.overlaps(&a));
        }
    }
}
