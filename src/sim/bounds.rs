//! Axis-aligned collision boxes
//!
//! Every body collides through an axis-aligned rectangle. A rotated sprite
//! gets the bounding box of its rotated image, re-centred on the body so
//! rotation never moves the center.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: DVec2,
    /// Bottom-right corner
    pub max: DVec2,
}

impl Rect {
    /// Rectangle of the given size centred on `center`
    pub fn from_center(center: DVec2, size: DVec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    /// Strict overlap test: rectangles sharing only an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Bounding-box size of a `size` sprite rotated by `degrees`
pub fn rotated_size(size: DVec2, degrees: f64) -> DVec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    DVec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, side: f64) -> Rect {
        Rect::from_center(DVec2::new(x, y), DVec2::splat(side))
    }

    #[test]
    fn test_from_center() {
        let r = square(100.0, 50.0, 20.0);
        assert_eq!(r.left(), 90.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), DVec2::new(100.0, 50.0));
        assert_eq!(r.size(), DVec2::splat(20.0));
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(9.0, 9.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = square(0.0, 0.0, 10.0);
        let right = square(10.0, 0.0, 10.0);
        let below = square(0.0, 10.0, 10.0);
        let corner = square(10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_separated() {
        let a = square(0.0, 0.0, 10.0);
        assert!(!a.intersects(&square(30.0, 0.0, 10.0)));
        // Overlap on one axis only is not enough
        assert!(!a.intersects(&square(5.0, 30.0, 10.0)));
    }

    #[test]
    fn test_containment_intersects() {
        let outer = square(0.0, 0.0, 100.0);
        let inner = square(5.0, -5.0, 2.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_rotated_size() {
        let s = DVec2::splat(50.0);
        let r0 = rotated_size(s, 0.0);
        assert!((r0 - s).length() < 1e-9);

        let r90 = rotated_size(DVec2::new(40.0, 10.0), 90.0);
        assert!((r90 - DVec2::new(10.0, 40.0)).length() < 1e-9);

        // A square at 45° grows to side * √2
        let r45 = rotated_size(s, 45.0);
        assert!((r45.x - 50.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((r45.x - r45.y).abs() < 1e-9);
    }
}
