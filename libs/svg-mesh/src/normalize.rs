//! # SVG Normalizer
//!
//! Turns SVG markup into a centered, uniformly scaled [`MeshGroup`].
//!
//! ## Pipeline
//!
//! ```text
//! markup ─► PathSource::parse ─► shapes_of ─► extrude ─► merge_vertices
//!        ─► compute_normals ─► MeshNode (scale 0.2) ─► MeshGroup (mirror Y)
//!        ─► center_xy
//! ```
//!
//! One mesh is produced per shape, in document order. Every mesh shares the
//! caller's material.

use std::sync::Arc;

use config::constants::{TessellationConfig, MESH_SCALE};
use glam::DVec3;

use crate::error::MeshError;
use crate::group::{MeshGroup, MeshNode, NodeTransform};
use crate::material::SurfaceMaterial;
use crate::ops::extrude::{extrude, ExtrusionProfile};
use crate::path::{PathSource, UsvgSource};

/// Configured SVG-to-mesh pipeline.
///
/// # Example
///
/// ```rust
/// use svg_mesh::{Normalizer, SurfaceMaterial};
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
///     <rect width="10" height="10"/>
/// </svg>"#;
///
/// let group = Normalizer::new().normalize(svg, &SurfaceMaterial::shared()).unwrap();
/// assert_eq!(group.len(), 1);
///
/// let bounds = group.bounding_box().unwrap();
/// assert!(bounds.center().x.abs() < 1e-9);
/// assert!(bounds.center().y.abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<S = UsvgSource> {
    source: S,
    profile: ExtrusionProfile,
    config: TessellationConfig,
}

impl Default for Normalizer<UsvgSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer<UsvgSource> {
    /// Creates the default `usvg`-backed pipeline.
    pub fn new() -> Self {
        let config = TessellationConfig::default();
        Self {
            source: UsvgSource::new(config.curve_segments),
            profile: ExtrusionProfile::default(),
            config,
        }
    }

    /// Replaces the tessellation settings, rebuilding the path source with
    /// the new curve segment count.
    pub fn with_config(mut self, config: TessellationConfig) -> Self {
        self.source = UsvgSource::new(config.curve_segments);
        self.config = config;
        self
    }
}

impl<S: PathSource> Normalizer<S> {
    /// Creates a pipeline over a custom path source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            profile: ExtrusionProfile::default(),
            config: TessellationConfig::default(),
        }
    }

    /// Replaces the extrusion profile.
    pub fn with_profile(mut self, profile: ExtrusionProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Builds the mesh group for `markup`.
    ///
    /// A document without fillable shapes yields an empty group. Any parse,
    /// triangulation or extrusion failure aborts the whole build.
    pub fn normalize(
        &self,
        markup: &str,
        material: &Arc<SurfaceMaterial>,
    ) -> Result<MeshGroup, MeshError> {
        let paths = self.source.parse(markup)?;

        let mut group = MeshGroup::new();
        for (path_index, path) in paths.iter().enumerate() {
            for shape in self.source.shapes_of(path)? {
                let mut geometry = extrude(&shape, &self.profile)?;
                geometry.clear_normals();
                let mut geometry = geometry.merge_vertices(self.config.merge_tolerance);
                geometry.compute_normals();

                tracing::trace!(
                    path = path_index,
                    outline_points = shape.vertex_count(),
                    area = shape.area(),
                    vertices = geometry.vertex_count(),
                    triangles = geometry.triangle_count(),
                    "extruded shape"
                );

                let mut node = MeshNode::new(geometry, Arc::clone(material));
                node.transform = NodeTransform::from_scale(DVec3::splat(MESH_SCALE));
                group.push(node);
            }
        }

        match group.center_xy() {
            Some(offset) => tracing::debug!(
                meshes = group.len(),
                offset_x = offset.x,
                offset_y = offset.y,
                "normalized svg"
            ),
            None => tracing::warn!(paths = paths.len(), "svg produced no shapes"),
        }

        Ok(group)
    }
}

/// Runs the default pipeline on `markup`.
pub fn normalize(markup: &str, material: &Arc<SurfaceMaterial>) -> Result<MeshGroup, MeshError> {
    Normalizer::new().normalize(markup, material)
}
