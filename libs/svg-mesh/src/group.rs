//! # Mesh Groups
//!
//! A [`MeshGroup`] is the normalizer's output: one [`MeshNode`] per extruded
//! shape under a group root that mirrors Y.
//!
//! ## Transform Chain
//!
//! ```text
//! world = group.transform * node.transform * vertex
//! ```
//!
//! Each transform is `translate * rotate_y * scale`.

use std::sync::Arc;

use config::constants::GROUP_MIRROR_Y;
use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;
use crate::material::SurfaceMaterial;
use crate::mesh::Mesh;

/// Translation, rotation about Y, and scale of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeTransform {
    /// Position relative to the parent.
    pub translation: DVec3,
    /// Rotation around the Y axis, in radians.
    pub rotation_y: f64,
    /// Per-axis scale.
    pub scale: DVec3,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            translation: DVec3::ZERO,
            rotation_y: 0.0,
            scale: DVec3::ONE,
        }
    }
}

impl NodeTransform {
    /// Uniform scale without translation or rotation.
    pub fn from_scale(scale: DVec3) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// The `translate * rotate_y * scale` matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            self.scale,
            DQuat::from_rotation_y(self.rotation_y),
            self.translation,
        )
    }
}

/// One extruded shape with its geometry, shared material and local transform.
#[derive(Debug, Clone)]
pub struct MeshNode {
    /// Geometry in extrusion (path) space.
    pub geometry: Mesh,
    /// Material shared with every other node.
    pub material: Arc<SurfaceMaterial>,
    /// Transform relative to the group root.
    pub transform: NodeTransform,
}

impl MeshNode {
    /// Wraps geometry with a material and identity transform.
    pub fn new(geometry: Mesh, material: Arc<SurfaceMaterial>) -> Self {
        Self {
            geometry,
            material,
            transform: NodeTransform::default(),
        }
    }

    /// Bounding box in group-local space.
    pub fn local_bounding_box(&self) -> Option<Aabb> {
        self.geometry
            .bounding_box()
            .map(|b| b.transformed(&self.transform.matrix()))
    }
}

/// Ordered collection of mesh nodes under a Y-mirrored root.
#[derive(Debug, Clone)]
pub struct MeshGroup {
    children: Vec<MeshNode>,
    /// Transform of the group root.
    pub transform: NodeTransform,
}

impl Default for MeshGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshGroup {
    /// Creates an empty group whose root mirrors the Y axis.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            transform: NodeTransform::from_scale(DVec3::new(1.0, GROUP_MIRROR_Y, 1.0)),
        }
    }

    /// Appends a child node.
    pub fn push(&mut self, node: MeshNode) {
        self.children.push(node);
    }

    /// Child nodes in creation order.
    pub fn children(&self) -> &[MeshNode] {
        &self.children
    }

    /// Number of child meshes.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the group has no meshes.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total vertex count across children.
    pub fn vertex_count(&self) -> usize {
        self.children.iter().map(|c| c.geometry.vertex_count()).sum()
    }

    /// Total triangle count across children.
    pub fn triangle_count(&self) -> usize {
        self.children.iter().map(|c| c.geometry.triangle_count()).sum()
    }

    /// Combined bounding box of the children in group-local space.
    pub fn local_bounding_box(&self) -> Option<Aabb> {
        self.children
            .iter()
            .filter_map(MeshNode::local_bounding_box)
            .reduce(|a, b| a.union(&b))
    }

    /// Combined bounding box in the group's parent space.
    ///
    /// `None` when the group has no geometry.
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.local_bounding_box()
            .map(|b| b.transformed(&self.transform.matrix()))
    }

    /// Translates every child so the combined box is centered on X and Y.
    ///
    /// Z is left untouched. Returns the applied offset, or `None` (and does
    /// nothing) for a group without geometry.
    pub fn center_xy(&mut self) -> Option<DVec3> {
        let center = self.local_bounding_box()?.center();
        let offset = DVec3::new(-center.x, -center.y, 0.0);
        for child in &mut self.children {
            child.transform.translation += offset;
        }
        Some(offset)
    }

    /// Adds `radians` to the group's rotation around Y.
    pub fn rotate_y(&mut self, radians: f64) {
        self.transform.rotation_y += radians;
    }

    /// Bakes every child into a single mesh in the group's parent space.
    ///
    /// Normals are transformed along with positions when every child has them.
    pub fn bake(&self) -> Mesh {
        let root = self.transform.matrix();
        let mut baked = Mesh::new();
        for child in &self.children {
            let mut geometry = child.geometry.clone();
            geometry.transform(&(root * child.transform.matrix()));
            baked.merge(&geometry);
        }
        baked
    }
}
