//! # Logo Scene
//!
//! Session state for an application that displays one extruded SVG logo at
//! a time.
//!
//! ## Architecture
//!
//! ```text
//! host events ─► SceneSession ─► svg_mesh::Normalizer ─► MeshGroup
//!                     │
//!                     └─► KeyValueStore ("user_svg")
//! ```
//!
//! The session replaces the displayed group on every load and hands the
//! detached group back to the caller, who owns any renderer resources built
//! from it.

pub mod error;
pub mod logos;
pub mod session;
pub mod store;

pub use error::{SessionError, StoreError};
pub use logos::BundledLogo;
pub use session::SceneSession;
pub use store::{KeyValueStore, MemoryStore};
