//! # Bounding Boxes
//!
//! Axis-aligned bounding boxes used for group centering.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box with inclusive `min`/`max` corners.
///
/// # Example
///
/// ```rust
/// use svg_mesh::Aabb;
/// use glam::DVec3;
///
/// let bounds = Aabb::from_points([DVec3::ZERO, DVec3::new(4.0, 2.0, 1.0)]).unwrap();
/// assert_eq!(bounds.size(), DVec3::new(4.0, 2.0, 1.0));
/// assert_eq!(bounds.center(), DVec3::new(2.0, 1.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from two corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all points, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for p in points {
            bounds.expand(p);
        }
        Some(bounds)
    }

    /// Grows the box to include `point`.
    pub fn expand(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Smallest box enclosing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Box enclosing the eight transformed corners.
    #[must_use]
    pub fn transformed(&self, matrix: &DMat4) -> Aabb {
        let corners = (0..8).map(|i| {
            DVec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });
        // Eight corners always yield a box.
        let mut out = Aabb::new(matrix.transform_point3(self.min), matrix.transform_point3(self.min));
        for corner in corners {
            out.expand(matrix.transform_point3(corner));
        }
        out
    }
}
