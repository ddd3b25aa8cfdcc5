//! Cap triangulation with hole support via `earcutr`.

use glam::DVec2;

use crate::error::MeshError;
use crate::shape::Shape;

/// Triangulates a shape's outer contour and holes.
///
/// Returned indices address the concatenation `outer ++ holes[0] ++ ...`.
/// Every triangle is wound counter-clockwise in a Y-up frame.
pub fn triangulate(shape: &Shape) -> Result<Vec<[usize; 3]>, MeshError> {
    let points: Vec<DVec2> = shape
        .outer
        .iter()
        .chain(shape.holes.iter().flatten())
        .copied()
        .collect();

    let mut hole_indices = Vec::with_capacity(shape.holes.len());
    let mut start = shape.outer.len();
    for hole in &shape.holes {
        hole_indices.push(start);
        start += hole.len();
    }

    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
    let indices = earcutr::earcut(&flat, &hole_indices, 2)
        .map_err(|err| MeshError::triangulation(format!("{err:?}")))?;

    Ok(indices
        .chunks_exact(3)
        .map(|tri| {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            if (points[b] - points[a]).perp_dot(points[c] - points[a]) < 0.0 {
                [a, c, b]
            } else {
                [a, b, c]
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(points: &[DVec2], tris: &[[usize; 3]]) -> f64 {
        tris.iter()
            .map(|t| 0.5 * (points[t[1]] - points[t[0]]).perp_dot(points[t[2]] - points[t[0]]))
            .sum()
    }

    #[test]
    fn test_triangulate_square() {
        let shape = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
        let tris = triangulate(&shape).unwrap();
        assert_eq!(tris.len(), 2);
        assert!((area(&shape.outer, &tris) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_triangulate_with_hole_excludes_hole_area() {
        let outer = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
        let mut hole = Shape::rect(DVec2::splat(3.0), DVec2::splat(4.0)).outer;
        hole.reverse();
        let shape = Shape::with_holes(outer, vec![hole]);

        let tris = triangulate(&shape).unwrap();
        let points: Vec<DVec2> = shape.outer.iter().chain(shape.holes.iter().flatten()).copied().collect();
        assert!((area(&points, &tris) - 84.0).abs() < 1e-9);
        assert!(tris.iter().all(|t| t.iter().all(|&i| i < points.len())));
    }

    #[test]
    fn test_triangles_are_counter_clockwise() {
        let mut outer = Shape::rect(DVec2::ZERO, DVec2::splat(10.0)).outer;
        outer.reverse();
        let shape = Shape::new(outer);
        let tris = triangulate(&shape).unwrap();
        for t in &tris {
            let p = &shape.outer;
            assert!((p[t[1]] - p[t[0]]).perp_dot(p[t[2]] - p[t[0]]) > 0.0);
        }
    }
}
