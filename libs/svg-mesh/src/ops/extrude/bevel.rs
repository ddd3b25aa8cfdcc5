//! Contour orientation and bevel offset directions.

use std::f64::consts::SQRT_2;

use config::constants::COLLINEAR_EPSILON;
use glam::DVec2;

use crate::shape::{signed_area, Shape};

/// Returns a copy of `shape` with a counter-clockwise outer contour and
/// clockwise holes, so the filled area always lies left of every edge.
pub fn orient(shape: &Shape) -> Shape {
    let mut outer = shape.outer.clone();
    if signed_area(&outer) < 0.0 {
        outer.reverse();
    }
    let holes = shape
        .holes
        .iter()
        .map(|hole| {
            let mut hole = hole.clone();
            if signed_area(&hole) > 0.0 {
                hole.reverse();
            }
            hole
        })
        .collect();
    Shape::with_holes(outer, holes)
}

/// Per-point direction that moves both adjacent edges of a closed ring one
/// unit to their right (away from the filled area for an oriented shape).
///
/// Sharp corners are capped at a length of √2.
pub fn bevel_offsets(ring: &[DVec2]) -> Vec<DVec2> {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let prev = ring[(i + n - 1) % n];
            let point = ring[i];
            let next = ring[(i + 1) % n];
            miter(point - prev, next - point)
        })
        .collect()
}

fn right_normal(edge: DVec2) -> DVec2 {
    DVec2::new(edge.y, -edge.x).normalize_or_zero()
}

fn miter(incoming: DVec2, outgoing: DVec2) -> DVec2 {
    let n1 = right_normal(incoming);
    let n2 = right_normal(outgoing);
    if n1 == DVec2::ZERO {
        return n2;
    }
    if n2 == DVec2::ZERO {
        return n1;
    }

    let denom = 1.0 + n1.dot(n2);
    if denom.abs() <= COLLINEAR_EPSILON {
        // The ring doubles back on itself; push along the incoming edge.
        return incoming.normalize_or_zero();
    }

    let v = (n1 + n2) / denom;
    if v.length_squared() > 2.0 {
        v.normalize() * SQRT_2
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orient_fixes_winding() {
        let mut outer = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
        outer.reverse();
        let hole = Shape::rect(DVec2::splat(3.0), DVec2::splat(4.0)).outer;
        let oriented = orient(&Shape::with_holes(outer, vec![hole]));
        assert!(signed_area(&oriented.outer) > 0.0);
        assert!(signed_area(&oriented.holes[0]) < 0.0);
    }

    #[test]
    fn test_square_corner_offset_points_outward() {
        let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
        let offsets = bevel_offsets(&square);
        // Corner at origin moves diagonally away from the square.
        assert!((offsets[0] - DVec2::new(-1.0, -1.0)).length() < 1e-12);
        assert!((offsets[2] - DVec2::new(1.0, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_collinear_point_offset_is_unit_normal() {
        let ring = vec![
            DVec2::ZERO,
            DVec2::new(5.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        let offsets = bevel_offsets(&ring);
        assert!((offsets[1] - DVec2::new(0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_sharp_corner_is_capped() {
        let ring = vec![DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(0.0, 0.5)];
        for offset in bevel_offsets(&ring) {
            assert!(offset.length() <= SQRT_2 + 1e-12);
        }
    }
}
