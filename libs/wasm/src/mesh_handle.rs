//! # Mesh Handles
//!
//! WASM-friendly wrappers for mesh groups that can be transferred to
//! JavaScript.

use serde::Serialize;
use svg_mesh::{Aabb, MeshGroup, MeshNode};
use wasm_bindgen::prelude::*;

/// A handle to one child mesh of a group.
///
/// Buffers are in the child's local (extrusion) space; apply
/// `position()` and `scale()` as the child's transform.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const group = normalize_svg(markup);
/// const root = new THREE.Group();
/// root.scale.fromArray(group.scale());
///
/// for (let i = 0; i < group.child_count; i++) {
///   const child = group.child(i);
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(child.vertices(), 3));
///   geometry.setAttribute('normal', new THREE.BufferAttribute(child.normals(), 3));
///   geometry.setIndex(new THREE.BufferAttribute(child.indices(), 1));
///
///   const mesh = new THREE.Mesh(geometry, material);
///   mesh.position.fromArray(child.position());
///   mesh.scale.fromArray(child.scale());
///   root.add(mesh);
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...], empty when absent
    normals: Vec<f32>,
    position: [f32; 3],
    scale: [f32; 3],
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the child's translation as [x, y, z].
    pub fn position(&self) -> Vec<f32> {
        self.position.to_vec()
    }

    /// Returns the child's scale as [x, y, z].
    pub fn scale(&self) -> Vec<f32> {
        self.scale.to_vec()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl MeshHandle {
    /// Creates a handle from a group child.
    pub fn from_node(node: &MeshNode) -> Self {
        let transform = &node.transform;
        Self {
            vertices: node.geometry.vertices_f32(),
            indices: node.geometry.indices_u32(),
            normals: node.geometry.normals_f32().unwrap_or_default(),
            position: transform.translation.as_vec3().to_array(),
            scale: transform.scale.as_vec3().to_array(),
        }
    }

    /// Creates a handle with world-space buffers and an identity transform.
    pub fn baked(group: &MeshGroup) -> Self {
        let mesh = group.bake();
        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            position: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// Summary of a group, serialized to JSON for the host.
#[derive(Debug, Serialize)]
struct GroupSummary {
    meshes: usize,
    vertices: usize,
    triangles: usize,
    bounds: Option<Aabb>,
}

/// A handle to a normalized mesh group.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct GroupHandle {
    group: MeshGroup,
    children: Vec<MeshHandle>,
}

#[wasm_bindgen]
impl GroupHandle {
    /// Returns the number of child meshes.
    #[wasm_bindgen(getter)]
    pub fn child_count(&self) -> u32 {
        self.children.len() as u32
    }

    /// Returns the child at `index`, or `undefined` past the end.
    pub fn child(&self, index: u32) -> Option<MeshHandle> {
        self.children.get(index as usize).cloned()
    }

    /// Returns the group's scale as [x, y, z]; Y is mirrored.
    pub fn scale(&self) -> Vec<f32> {
        self.group.transform.scale.as_vec3().to_array().to_vec()
    }

    /// Returns the group's rotation around Y in radians.
    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f64 {
        self.group.transform.rotation_y
    }

    /// Returns every child merged into one mesh in world space.
    pub fn baked(&self) -> MeshHandle {
        MeshHandle::baked(&self.group)
    }

    /// Returns mesh, vertex and triangle counts plus the world bounding box
    /// as a JSON string.
    ///
    /// # Errors
    /// Returns a JavaScript error if serialization fails.
    pub fn summary(&self) -> Result<String, JsValue> {
        self.summary_json()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl GroupHandle {
    /// Creates a handle from a group.
    pub fn from_group(group: &MeshGroup) -> Self {
        Self {
            children: group.children().iter().map(MeshHandle::from_node).collect(),
            group: group.clone(),
        }
    }

    /// Host-side variant of [`GroupHandle::summary`].
    pub fn summary_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&GroupSummary {
            meshes: self.group.len(),
            vertices: self.group.vertex_count(),
            triangles: self.group.triangle_count(),
            bounds: self.group.bounding_box(),
        })
    }
}
