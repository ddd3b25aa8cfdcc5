//! # SVG Mesh
//!
//! Browser-safe conversion of SVG markup into a group of extruded,
//! bevelled triangle meshes, centered and scaled for display.
//!
//! ## Architecture
//!
//! ```text
//! SVG markup → path (usvg) → shape (fill rule) → ops::extrude → Mesh
//!            → MeshNode (scale 0.2) → MeshGroup (mirror Y, centered X/Y)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Parsing**: `usvg` with fixed-segment curve flattening
//! - **Triangulation**: Ear clipping (`earcutr`)
//! - **Extrusion**: Quarter-round bevel rings swept along +Z
//! - **Welding**: Quantized position hashing, area-weighted normals
//!
//! ## Usage
//!
//! ```rust
//! use svg_mesh::{normalize, SurfaceMaterial};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20">
//!     <circle cx="10" cy="10" r="10"/>
//! </svg>"#;
//!
//! let group = normalize(svg, &SurfaceMaterial::shared()).unwrap();
//! assert_eq!(group.len(), 1);
//! ```

pub mod bounds;
pub mod error;
pub mod group;
pub mod material;
pub mod mesh;
pub mod normalize;
pub mod ops;
pub mod path;
pub mod shape;

pub use bounds::Aabb;
pub use error::MeshError;
pub use group::{MeshGroup, MeshNode, NodeTransform};
pub use material::{EnvironmentMap, SurfaceMaterial};
pub use mesh::Mesh;
pub use normalize::{normalize, Normalizer};
pub use ops::extrude::{extrude, ExtrusionProfile};
pub use shape::Shape;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Instant;

    const LETTER_O: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <path d="M0 0 H100 V100 H0 Z M25 25 V75 H75 V25 Z"/>
    </svg>"#;

    #[test]
    fn test_normalize_shape_with_hole() {
        let group = normalize(LETTER_O, &SurfaceMaterial::shared()).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.vertex_count(), 12 * 8);
    }

    #[test]
    fn test_children_share_material() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="10" height="10"/>
            <rect x="50" width="10" height="10"/>
        </svg>"#;
        let material = SurfaceMaterial::shared();
        let group = normalize(svg, &material).unwrap();

        assert_eq!(group.len(), 2);
        for child in group.children() {
            assert!(Arc::ptr_eq(&child.material, &material));
        }
    }

    #[test]
    fn test_normalize_performance() {
        let start = Instant::now();
        for _ in 0..10 {
            let _ = normalize(LETTER_O, &SurfaceMaterial::shared()).unwrap();
        }
        let elapsed = start.elapsed();
        assert!(elapsed.as_secs() < 5, "normalization too slow: {elapsed:?}");
    }
}
