//! # Config Crate
//!
//! Centralized configuration constants for the SVG logo extrusion pipeline.
//! Every extrusion parameter, tolerance, and scene default lives here so the
//! mesh, scene, and WASM crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EXTRUDE_DEPTH, BEVEL_SEGMENTS, MESH_SCALE};
//!
//! // The extrusion profile is fixed across loads
//! assert_eq!(EXTRUDE_DEPTH, 15.0);
//! assert_eq!(BEVEL_SEGMENTS, 5);
//!
//! // Path-space units are downscaled for scene space
//! let scene_width = 100.0 * MESH_SCALE;
//! assert!((scene_width - 20.0).abs() < 1e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
