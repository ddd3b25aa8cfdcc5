//! # Vector Paths
//!
//! Flattened vector paths and the capability interface that produces them.
//!
//! ## Pipeline
//!
//! ```text
//! SVG markup → PathSource::parse → Vec<VectorPath>
//! VectorPath → PathSource::shapes_of → Vec<Shape>
//! ```
//!
//! Any vector-path library can stand behind [`PathSource`]; the default is
//! [`UsvgSource`].

mod flatten;
mod usvg_source;


pub use flatten::{flatten_cubic, flatten_quad};
pub use usvg_source::UsvgSource;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::MeshError;
use crate::shape::{decompose, Shape};

/// Fill rule deciding which contours enclose filled area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    /// SVG `nonzero`: filled where the winding number is not zero.
    #[default]
    NonZero,
    /// SVG `evenodd`: filled where a ray crosses an odd number of edges.
    EvenOdd,
}

/// A closed polyline. The closing edge from the last point back to the
/// first is implicit.
pub type Contour = Vec<DVec2>;

/// One SVG path element, flattened into closed contours in document space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorPath {
    /// Closed sub-paths in the order they appear in the element.
    pub contours: Vec<Contour>,
    /// Fill rule of the element.
    pub fill_rule: FillRule,
}

impl VectorPath {
    /// Creates a path from contours and a fill rule.
    pub fn new(contours: Vec<Contour>, fill_rule: FillRule) -> Self {
        Self {
            contours,
            fill_rule,
        }
    }

    /// Returns true if the path has no contours.
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}

/// Capability interface over a vector-path library.
///
/// # Example
///
/// ```rust
/// use svg_mesh::path::{PathSource, UsvgSource};
///
/// let source = UsvgSource::default();
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
///     <path d="M0 0 H10 V10 H0 Z"/>
/// </svg>"#;
/// let paths = source.parse(svg).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert_eq!(source.shapes_of(&paths[0]).unwrap().len(), 1);
/// ```
pub trait PathSource {
    /// Parses markup into paths, preserving document order.
    fn parse(&self, markup: &str) -> Result<Vec<VectorPath>, MeshError>;

    /// Decomposes a path into shapes (outer contour plus holes).
    ///
    /// The default applies the path's fill rule to its contours.
    fn shapes_of(&self, path: &VectorPath) -> Result<Vec<Shape>, MeshError> {
        Ok(decompose(&path.contours, path.fill_rule))
    }
}
