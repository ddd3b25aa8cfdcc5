//! # Mesh Data Structure
//!
//! Indexed triangle mesh with optional vertex normals, plus the
//! vertex-merging and smooth-normal passes the extruder relies on.

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_TOLERANCE;
use glam::{DMat4, DVec3};

use crate::bounds::Aabb;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use svg_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Sets vertex normals.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) {
        self.normals = Some(normals);
    }

    /// Drops the normal attribute.
    pub fn clear_normals(&mut self) {
        self.normals = None;
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes smooth vertex normals.
    ///
    /// Each face contributes its unnormalized cross product to its three
    /// corners, so larger faces weigh more.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Collapses vertices whose positions quantize to the same grid cell.
    ///
    /// The first occurrence of each position is kept and triangles are
    /// reindexed; triangles that collapse onto fewer than three distinct
    /// vertices are dropped. Normals are discarded because they no longer
    /// match the merged topology.
    ///
    /// # Example
    ///
    /// ```rust
    /// use svg_mesh::Mesh;
    /// use glam::DVec3;
    ///
    /// let mut mesh = Mesh::new();
    /// for p in [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::X, DVec3::ONE, DVec3::Y] {
    ///     mesh.add_vertex(p);
    /// }
    /// mesh.add_triangle(0, 1, 2);
    /// mesh.add_triangle(3, 4, 5);
    ///
    /// let merged = mesh.merge_vertices(1e-4);
    /// assert_eq!(merged.vertex_count(), 4);
    /// assert_eq!(merged.triangle_count(), 2);
    /// ```
    #[must_use]
    pub fn merge_vertices(&self, tolerance: f64) -> Mesh {
        let tolerance = if tolerance > 0.0 {
            tolerance
        } else {
            VERTEX_MERGE_TOLERANCE
        };
        let quantize = |v: DVec3| -> (i64, i64, i64) {
            (
                (v.x / tolerance).round() as i64,
                (v.y / tolerance).round() as i64,
                (v.z / tolerance).round() as i64,
            )
        };

        let mut lookup: HashMap<(i64, i64, i64), u32> = HashMap::with_capacity(self.vertices.len());
        let mut remap = Vec::with_capacity(self.vertices.len());
        let mut merged = Mesh::with_capacity(self.vertices.len(), self.triangles.len());

        for &v in &self.vertices {
            let index = *lookup
                .entry(quantize(v))
                .or_insert_with(|| merged.add_vertex(v));
            remap.push(index);
        }

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| remap[i as usize]);
            if a != b && b != c && a != c {
                merged.add_triangle(a, b, c);
            }
        }

        merged
    }

    /// Computes the axis-aligned bounding box, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose; a mirror also flips the winding.
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }
        if matrix.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Appends another mesh, offsetting its indices.
    ///
    /// Normals survive only when both meshes carry them.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        let had_vertices = !self.vertices.is_empty();

        self.vertices.extend_from_slice(&other.vertices);
        for tri in &other.triangles {
            self.triangles.push(tri.map(|i| i + offset));
        }

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            (None, Some(theirs)) if !had_vertices => Some(theirs.clone()),
            _ => None,
        };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - The normal buffer, if present, matches the vertex count
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        let indices_ok = self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        });

        let normals_ok = self
            .normals
            .as_ref()
            .map_or(true, |n| n.len() == self.vertices.len());

        indices_ok && normals_ok
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
