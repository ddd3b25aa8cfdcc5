//! # Surface Material
//!
//! The single metallic/rough material shared by every mesh across reloads.
//! Only geometry changes between loads; the material instance stays the same
//! and its environment map is bound lazily, at most once.

use std::sync::{Arc, OnceLock};

use config::constants::{MATERIAL_ENV_INTENSITY, MATERIAL_METALNESS, MATERIAL_ROUGHNESS};
use serde::{Deserialize, Serialize};

/// Handle to a prefiltered environment map owned by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentMap {
    /// Renderer-side identifier (asset path or texture id).
    pub source: String,
}

impl EnvironmentMap {
    /// Creates a handle from a renderer-side identifier.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Physically based surface parameters.
///
/// # Example
///
/// ```rust
/// use svg_mesh::{EnvironmentMap, SurfaceMaterial};
///
/// let material = SurfaceMaterial::shared();
/// assert!(material.environment().is_none());
///
/// assert!(material.bind_environment(EnvironmentMap::new("sky.exr")));
/// assert!(!material.bind_environment(EnvironmentMap::new("other.exr")));
/// assert_eq!(material.environment().unwrap().source, "sky.exr");
/// ```
#[derive(Debug)]
pub struct SurfaceMaterial {
    /// Metalness in [0, 1].
    pub metalness: f32,
    /// Roughness in [0, 1].
    pub roughness: f32,
    /// Environment reflection intensity.
    pub env_intensity: f32,
    environment: OnceLock<EnvironmentMap>,
}

impl Default for SurfaceMaterial {
    fn default() -> Self {
        Self {
            metalness: MATERIAL_METALNESS,
            roughness: MATERIAL_ROUGHNESS,
            env_intensity: MATERIAL_ENV_INTENSITY,
            environment: OnceLock::new(),
        }
    }
}

impl SurfaceMaterial {
    /// Creates the default material behind an `Arc` for sharing.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Binds the environment map if none is bound yet.
    ///
    /// Returns `true` when this call performed the binding.
    pub fn bind_environment(&self, map: EnvironmentMap) -> bool {
        self.environment.set(map).is_ok()
    }

    /// The bound environment map, if any.
    pub fn environment(&self) -> Option<&EnvironmentMap> {
        self.environment.get()
    }
}
