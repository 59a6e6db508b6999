//! Axis-aligned bounding rectangles
//!
//! Every square is represented by one of these, used both for rendering and
//! for the pairwise overlap tests that drive direction changes.

use glam::Vec2;

/// Axis-aligned rectangle stored as center plus half-extents.
///
/// The canvas uses screen coordinates: x grows right, y grows down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub const fn from_center(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// True if the rectangles overlap. Rects that merely share an edge do
    /// not count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, half: f32) -> Rect {
        Rect::from_center(Vec2::new(x, y), Vec2::splat(half))
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = rect(100.0, 100.0, 30.0);
        let b = rect(140.0, 110.0, 25.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = rect(100.0, 100.0, 30.0);
        let b = rect(300.0, 100.0, 30.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        // Right edge of a exactly touches left edge of b
        let a = rect(100.0, 100.0, 30.0);
        let b = rect(160.0, 100.0, 30.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let outer = rect(100.0, 100.0, 50.0);
        let inner = rect(100.0, 100.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn edge_accessors() {
        let r = rect(100.0, 200.0, 25.0);
        assert_eq!(r.left(), 75.0);
        assert_eq!(r.right(), 125.0);
        assert_eq!(r.top(), 175.0);
        assert_eq!(r.bottom(), 225.0);
    }
}
