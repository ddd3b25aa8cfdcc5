//! # Shapes
//!
//! A [`Shape`] is one filled region: an outer contour plus the holes cut
//! into it. [`decompose`] builds shapes from the contours of one path using
//! its fill rule.

use config::constants::MIN_CONTOUR_AREA;
use glam::DVec2;

use crate::path::{Contour, FillRule};

/// A closed 2D region ready for extrusion.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Outer boundary.
    pub outer: Contour,
    /// Holes cut into the outer boundary.
    pub holes: Vec<Contour>,
}

impl Shape {
    /// Creates a shape without holes.
    pub fn new(outer: Contour) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a shape with holes.
    pub fn with_holes(outer: Contour, holes: Vec<Contour>) -> Self {
        Self { outer, holes }
    }

    /// Creates an axis-aligned rectangle with its minimum corner at `origin`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use svg_mesh::Shape;
    /// use glam::DVec2;
    ///
    /// let rect = Shape::rect(DVec2::ZERO, DVec2::new(10.0, 20.0));
    /// assert_eq!(rect.vertex_count(), 4);
    /// assert!((rect.area() - 200.0).abs() < 1e-12);
    /// ```
    pub fn rect(origin: DVec2, size: DVec2) -> Self {
        Self::new(vec![
            origin,
            DVec2::new(origin.x + size.x, origin.y),
            origin + size,
            DVec2::new(origin.x, origin.y + size.y),
        ])
    }

    /// Creates a regular polygon approximating a circle.
    pub fn circle(center: DVec2, radius: f64, segments: u32) -> Self {
        let segments = segments.max(3);
        let outer = (0..segments)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / segments as f64;
                center + DVec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Self::new(outer)
    }

    /// Number of points across the outer contour and all holes.
    pub fn vertex_count(&self) -> usize {
        self.outer.len() + self.holes.iter().map(Vec::len).sum::<usize>()
    }

    /// Filled area: outer area minus hole areas.
    pub fn area(&self) -> f64 {
        signed_area(&self.outer).abs() - self.holes.iter().map(|h| signed_area(h).abs()).sum::<f64>()
    }
}

/// Shoelace area; positive for counter-clockwise contours in a Y-up frame.
pub fn signed_area(contour: &[DVec2]) -> f64 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n).map(|i| contour[i].perp_dot(contour[(i + 1) % n])).sum();
    twice * 0.5
}

/// Winding number of `contour` around `point`.
pub fn winding_number(point: DVec2, contour: &[DVec2]) -> i32 {
    let n = contour.len();
    let mut winding = 0;
    for i in 0..n {
        let a = contour[i];
        let b = contour[(i + 1) % n];
        let side = (b - a).perp_dot(point - a);
        if a.y <= point.y {
            if b.y > point.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= point.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Role {
    Outer,
    Hole,
    Interior,
}

/// Groups contours into shapes according to `fill_rule`.
///
/// Each contour is classified from the winding (nonzero) or crossing parity
/// (evenodd) of the other contours at its first point:
///
/// - filled inside but not outside: an outer boundary
/// - filled outside but not inside: a hole, attached to the smallest outer
///   boundary containing it
/// - filled on both sides: an interior seam, dropped
///
/// Degenerate contours (fewer than three points or no area) are dropped.
/// Shapes come out in the order of their outer contours.
///
/// # Example
///
/// ```rust
/// use svg_mesh::shape::decompose;
/// use svg_mesh::path::FillRule;
/// use glam::DVec2;
///
/// let outer = vec![DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0), DVec2::new(0.0, 10.0)];
/// let hole = vec![DVec2::new(3.0, 3.0), DVec2::new(7.0, 3.0), DVec2::new(7.0, 7.0), DVec2::new(3.0, 7.0)];
///
/// let shapes = decompose(&[outer, hole], FillRule::EvenOdd);
/// assert_eq!(shapes.len(), 1);
/// assert_eq!(shapes[0].holes.len(), 1);
/// ```
pub fn decompose(contours: &[Contour], fill_rule: FillRule) -> Vec<Shape> {
    let contours: Vec<(&Contour, f64)> = contours
        .iter()
        .filter(|c| c.len() >= 3)
        .map(|c| (c, signed_area(c)))
        .filter(|(_, area)| area.abs() >= MIN_CONTOUR_AREA)
        .collect();

    let roles: Vec<Role> = contours
        .iter()
        .enumerate()
        .map(|(i, (contour, area))| {
            let probe = contour[0];
            let others = contours
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, (other, _))| winding_number(probe, other));
            match fill_rule {
                FillRule::NonZero => {
                    let outside: i32 = others.sum();
                    let inside = outside + if *area > 0.0 { 1 } else { -1 };
                    match (outside != 0, inside != 0) {
                        (false, true) => Role::Outer,
                        (true, false) => Role::Hole,
                        _ => Role::Interior,
                    }
                }
                FillRule::EvenOdd => {
                    let depth = others.filter(|w| *w != 0).count();
                    if depth % 2 == 0 {
                        Role::Outer
                    } else {
                        Role::Hole
                    }
                }
            }
        })
        .collect();

    let mut shapes: Vec<Shape> = contours
        .iter()
        .zip(&roles)
        .filter(|(_, role)| **role == Role::Outer)
        .map(|((contour, _), _)| Shape::new((*contour).clone()))
        .collect();

    for (i, ((contour, _), role)) in contours.iter().zip(&roles).enumerate() {
        if *role != Role::Hole {
            continue;
        }
        let probe = contour[0];
        let owner = shapes
            .iter_mut()
            .filter(|shape| winding_number(probe, &shape.outer) != 0)
            .min_by(|a, b| {
                signed_area(&a.outer)
                    .abs()
                    .total_cmp(&signed_area(&b.outer).abs())
            });
        match owner {
            Some(shape) => shape.holes.push((*contour).clone()),
            None => tracing::debug!(contour = i, "hole without enclosing outer contour dropped"),
        }
    }

    shapes
}
