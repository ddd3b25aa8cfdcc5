//! WASM-facing entry points for the SVG logo extruder.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `normalize_svg_internal` to avoid depending on a JS host.
//!
//! ```
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
//!     <rect width="4" height="4"/>
//! </svg>"#;
//! let group = logo_wasm::normalize_svg_internal(svg).unwrap();
//! assert_eq!(group.child_count(), 1);
//! ```

use svg_mesh::{MeshError, SurfaceMaterial};
use wasm_bindgen::prelude::*;

mod app;
mod mesh_handle;
mod storage;

pub use app::SceneApp;
pub use mesh_handle::{GroupHandle, MeshHandle};
pub use storage::LocalStorageStore;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "logo-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the localStorage key holding the last loaded markup.
#[wasm_bindgen]
pub fn storage_key() -> String {
    config::constants::STORAGE_KEY.to_string()
}

/// Normalizes SVG markup into a centered, extruded mesh group.
///
/// This is the stateless entry point; use [`SceneApp`] for persistence and
/// rotation. For Rust tests, prefer `normalize_svg_internal`, which exposes
/// Rust error types directly.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the markup cannot be parsed or triangulated.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const group = normalize_svg(markup);
/// //   console.log("Meshes:", group.child_count);
/// // } catch (error) {
/// //   console.error("Normalization failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn normalize_svg(markup: &str) -> Result<GroupHandle, JsValue> {
    normalize_svg_internal(markup).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that normalizes markup with a fresh material.
///
/// # Examples
/// ```
/// let err = logo_wasm::normalize_svg_internal("<svg").unwrap_err();
/// assert!(err.to_string().contains("SVG parse error"));
/// ```
pub fn normalize_svg_internal(markup: &str) -> Result<GroupHandle, MeshError> {
    let group = svg_mesh::normalize(markup, &SurfaceMaterial::shared())?;
    tracing::debug!(meshes = group.len(), "normalized svg for host");
    Ok(GroupHandle::from_group(&group))
}
