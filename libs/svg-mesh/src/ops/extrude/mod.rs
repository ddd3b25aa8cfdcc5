//! # Bevelled Extrusion
//!
//! Sweeps a [`Shape`] along +Z into a closed solid with quarter-round
//! bevels at both ends.
//!
//! ## Layers
//!
//! Every contour point is emitted once per layer, bottom to top:
//!
//! ```text
//! z = -thickness .. 0            bottom bevel rings (bevel_segments)
//! z = 0 .. depth                 wall rings (steps + 1)
//! z = depth .. depth + thickness top bevel rings (bevel_segments)
//! ```
//!
//! Bevel rings are pushed outward (away from the filled area) by
//! `size * sin(t * π/2) + offset` while `z` follows `thickness * cos(t * π/2)`.
//!
//! The output is a triangle soup: each face owns its three vertices and
//! carries its flat face normal, so callers are expected to merge vertices
//! and recompute normals.

mod bevel;

#[cfg(test)]
mod tests;

pub use bevel::{bevel_offsets, orient};

use std::f64::consts::FRAC_PI_2;

use config::constants::{
    BEVEL_OFFSET, BEVEL_SEGMENTS, BEVEL_SIZE, BEVEL_THICKNESS, EXTRUDE_DEPTH, EXTRUDE_STEPS,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::triangulate::triangulate;
use crate::shape::Shape;

/// Fixed parameters of the extrusion.
///
/// # Example
///
/// ```rust
/// use svg_mesh::ExtrusionProfile;
///
/// let profile = ExtrusionProfile::default();
/// assert_eq!(profile.depth, 15.0);
/// assert_eq!(profile.bevel_segments, 5);
/// assert_eq!(profile.layer_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionProfile {
    /// Wall height along +Z.
    pub depth: f64,
    /// Number of wall layers along the depth.
    pub steps: u32,
    /// Bevel extent along Z beyond each cap.
    pub bevel_thickness: f64,
    /// Outward bevel extent.
    pub bevel_size: f64,
    /// Distance between the outline and the start of the bevel.
    pub bevel_offset: f64,
    /// Rings per bevel; zero disables bevelling.
    pub bevel_segments: u32,
}

impl Default for ExtrusionProfile {
    fn default() -> Self {
        Self {
            depth: EXTRUDE_DEPTH,
            steps: EXTRUDE_STEPS,
            bevel_thickness: BEVEL_THICKNESS,
            bevel_size: BEVEL_SIZE,
            bevel_offset: BEVEL_OFFSET,
            bevel_segments: BEVEL_SEGMENTS,
        }
    }
}

impl ExtrusionProfile {
    /// Checks depth and step count.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.depth > 0.0) {
            return Err(MeshError::invalid_profile(format!(
                "depth must be positive, got {}",
                self.depth
            )));
        }
        if self.steps == 0 {
            return Err(MeshError::invalid_profile("steps must be at least 1"));
        }
        if self.bevel_thickness < 0.0 || self.bevel_size < 0.0 {
            return Err(MeshError::invalid_profile(
                "bevel thickness and size must not be negative",
            ));
        }
        Ok(())
    }

    /// Number of rings emitted per contour point.
    pub fn layer_count(&self) -> usize {
        self.steps as usize + 2 * self.bevel_segments as usize + 1
    }

    /// `(z, outward offset)` of every layer, bottom to top.
    pub fn layers(&self) -> Vec<(f64, f64)> {
        let segments = self.bevel_segments;
        let bevel_at = |b: u32| {
            let t = b as f64 / segments as f64 * FRAC_PI_2;
            (
                self.bevel_thickness * t.cos(),
                self.bevel_size * t.sin() + self.bevel_offset,
            )
        };

        let mut layers = Vec::with_capacity(self.layer_count());
        for b in 0..segments {
            let (z, offset) = bevel_at(b);
            layers.push((-z, offset));
        }

        let wall_offset = if segments > 0 {
            self.bevel_size + self.bevel_offset
        } else {
            0.0
        };
        for s in 0..=self.steps {
            layers.push((self.depth * s as f64 / self.steps as f64, wall_offset));
        }

        for b in (0..segments).rev() {
            let (z, offset) = bevel_at(b);
            layers.push((self.depth + z, offset));
        }
        layers
    }
}

/// Extrudes one shape into a triangle soup with flat face normals.
///
/// # Example
///
/// ```rust
/// use svg_mesh::{extrude, ExtrusionProfile, Shape};
/// use glam::DVec2;
///
/// let square = Shape::rect(DVec2::ZERO, DVec2::splat(10.0));
/// let mesh = extrude(&square, &ExtrusionProfile::default()).unwrap();
///
/// let bounds = mesh.bounding_box().unwrap();
/// assert!((bounds.min.z + 3.0).abs() < 1e-9);
/// assert!((bounds.max.z - 18.0).abs() < 1e-9);
/// ```
pub fn extrude(shape: &Shape, profile: &ExtrusionProfile) -> Result<Mesh, MeshError> {
    profile.validate()?;
    if shape.outer.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "outer contour needs at least 3 points, got {}",
            shape.outer.len()
        )));
    }

    let shape = orient(shape);
    let rings: Vec<&[DVec2]> = std::iter::once(shape.outer.as_slice())
        .chain(shape.holes.iter().map(Vec::as_slice))
        .collect();
    let base: Vec<DVec2> = rings.iter().flat_map(|r| r.iter().copied()).collect();
    let offsets: Vec<DVec2> = rings.iter().flat_map(|r| bevel_offsets(r)).collect();
    let ring_len = base.len();

    let layers = profile.layers();
    let mut positions = Vec::with_capacity(ring_len * layers.len());
    for &(z, offset) in &layers {
        for (p, dir) in base.iter().zip(&offsets) {
            let q = *p + *dir * offset;
            positions.push(DVec3::new(q.x, q.y, z));
        }
    }

    let caps = triangulate(&shape)?;
    let side_quads: usize = rings.iter().map(|r| r.len()).sum::<usize>() * (layers.len() - 1);
    let face_count = caps.len() * 2 + side_quads * 2;
    let mut soup = Soup::with_capacity(face_count);

    // Bottom cap faces -Z, top cap faces +Z.
    let top = (layers.len() - 1) * ring_len;
    for [a, b, c] in &caps {
        soup.face(positions[*a], positions[*c], positions[*b]);
        soup.face(positions[top + a], positions[top + b], positions[top + c]);
    }

    let mut start = 0;
    for ring in &rings {
        let n = ring.len();
        for i in 0..n {
            let j = (i + 1) % n;
            for layer in 0..layers.len() - 1 {
                let lo = layer * ring_len + start;
                let hi = lo + ring_len;
                let (a, b) = (positions[lo + i], positions[lo + j]);
                let (c, d) = (positions[hi + j], positions[hi + i]);
                soup.face(a, b, c);
                soup.face(a, c, d);
            }
        }
        start += n;
    }

    Ok(soup.finish())
}

/// Accumulates triangles with per-face vertices and normals.
struct Soup {
    mesh: Mesh,
    normals: Vec<DVec3>,
}

impl Soup {
    fn with_capacity(faces: usize) -> Self {
        Self {
            mesh: Mesh::with_capacity(faces * 3, faces),
            normals: Vec::with_capacity(faces * 3),
        }
    }

    fn face(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let i = self.mesh.add_vertex(a);
        self.mesh.add_vertex(b);
        self.mesh.add_vertex(c);
        self.mesh.add_triangle(i, i + 1, i + 2);
        self.normals.extend_from_slice(&[normal; 3]);
    }

    fn finish(mut self) -> Mesh {
        self.mesh.set_normals(self.normals);
        self.mesh
    }
}
