//! # Mesh Operations
//!
//! Shape triangulation and bevelled extrusion.

pub mod extrude;
pub mod triangulate;

pub use extrude::{extrude, ExtrusionProfile};
pub use triangulate::triangulate;
