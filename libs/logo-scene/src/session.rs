//! # Scene Session
//!
//! [`SceneSession`] owns everything the display needs between host events:
//! the current mesh group, the shared material, the persistence slot, the
//! select-list choice, and the rotation state.
//!
//! ## Load Pathways
//!
//! ```text
//! restore()            stored markup, else the default logo
//! upload(name, text)   extension check ─► change_svg
//! select(value)        bundled logo    ─► change_svg
//! change_svg(markup)   build ─► persist ─► replace
//! load_markup(markup)  build ─► replace
//! ```
//!
//! Every replace returns the detached group so the caller can release
//! renderer resources built from it.


use std::sync::Arc;

use config::constants::{ROTATION_SPEED, STORAGE_KEY, SVG_EXTENSION};
use svg_mesh::{EnvironmentMap, MeshGroup, Normalizer, SurfaceMaterial};

use crate::error::SessionError;
use crate::logos::BundledLogo;
use crate::store::KeyValueStore;

/// Scene state driven by host events.
///
/// # Example
///
/// ```rust
/// use logo_scene::{MemoryStore, SceneSession};
///
/// let mut session = SceneSession::new(MemoryStore::new());
/// session.restore().unwrap();
/// assert!(session.current().is_some());
///
/// session.advance(1.0);
/// let rotation = session.current().unwrap().transform.rotation_y;
/// assert!((rotation - 1.3).abs() < 1e-9);
/// ```
pub struct SceneSession<S> {
    store: S,
    normalizer: Normalizer,
    material: Arc<SurfaceMaterial>,
    current: Option<MeshGroup>,
    selection: Option<BundledLogo>,
    pointer_down: bool,
}

impl<S: KeyValueStore> SceneSession<S> {
    /// Creates a session with nothing displayed.
    pub fn new(store: S) -> Self {
        Self {
            store,
            normalizer: Normalizer::new(),
            material: SurfaceMaterial::shared(),
            current: None,
            selection: None,
            pointer_down: false,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads the stored markup, or the default logo when nothing usable is
    /// stored. Reads the persistence slot once and does not write it.
    pub fn restore(&mut self) -> Result<Option<MeshGroup>, SessionError> {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(error = %err, "could not read stored svg");
                None
            }
        };

        if let Some(markup) = stored {
            match self.load_markup(&markup) {
                Ok(previous) => return Ok(previous),
                Err(err) => tracing::warn!(error = %err, "stored svg failed to load"),
            }
        }

        tracing::debug!(logo = %BundledLogo::default(), "loading default logo");
        self.load_markup(BundledLogo::default().markup())
    }

    /// Builds a group from `markup` and makes it the displayed one.
    ///
    /// On failure the displayed group is left untouched.
    #[must_use = "the detached group owns renderer resources that must be released"]
    pub fn load_markup(&mut self, markup: &str) -> Result<Option<MeshGroup>, SessionError> {
        let group = self.build(markup)?;
        Ok(self.replace(group))
    }

    /// Builds, persists, then displays `markup`.
    ///
    /// The markup is written only after it built successfully, and the
    /// display changes only after it was written.
    #[must_use = "the detached group owns renderer resources that must be released"]
    pub fn change_svg(&mut self, markup: &str) -> Result<Option<MeshGroup>, SessionError> {
        let group = self.build(markup)?;
        self.store.set(STORAGE_KEY, markup)?;
        Ok(self.replace(group))
    }

    /// Handles a user-selected file.
    ///
    /// Names whose last `.`-separated segment is not `svg` (any case) are
    /// rejected before parsing.
    #[must_use = "the detached group owns renderer resources that must be released"]
    pub fn upload(
        &mut self,
        file_name: &str,
        contents: &str,
    ) -> Result<Option<MeshGroup>, SessionError> {
        let extension = file_name.rsplit('.').next().unwrap_or_default();
        if !extension.eq_ignore_ascii_case(SVG_EXTENSION) {
            return Err(SessionError::InvalidExtension {
                file_name: file_name.to_string(),
            });
        }

        self.selection = None;
        self.change_svg(contents)
    }

    /// Handles a select-list change.
    ///
    /// An empty value is the placeholder entry and does nothing; unknown
    /// values are ignored.
    #[must_use = "the detached group owns renderer resources that must be released"]
    pub fn select(&mut self, value: &str) -> Result<Option<MeshGroup>, SessionError> {
        if value.is_empty() {
            return Ok(None);
        }
        let logo = match value.parse::<BundledLogo>() {
            Ok(logo) => logo,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring select value");
                return Ok(None);
            }
        };

        let previous = self.change_svg(logo.markup())?;
        self.selection = Some(logo);
        Ok(previous)
    }

    fn build(&self, markup: &str) -> Result<MeshGroup, SessionError> {
        let group = self.normalizer.normalize(markup, &self.material)?;
        tracing::debug!(
            meshes = group.len(),
            vertices = group.vertex_count(),
            "built mesh group"
        );
        Ok(group)
    }

    fn replace(&mut self, group: MeshGroup) -> Option<MeshGroup> {
        self.current.replace(group)
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Pauses rotation while the pointer is held.
    pub fn pointer_down(&mut self) {
        self.pointer_down = true;
    }

    /// Resumes rotation.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
    }

    /// Advances the rotation by `delta_seconds` of animation time.
    pub fn advance(&mut self, delta_seconds: f64) {
        if self.pointer_down {
            return;
        }
        if let Some(group) = &mut self.current {
            group.rotate_y(ROTATION_SPEED * delta_seconds);
        }
    }

    /// Binds the environment map into the shared material.
    ///
    /// Only the first call has an effect; returns whether it did.
    pub fn bind_environment(&self, map: EnvironmentMap) -> bool {
        let bound = self.material.bind_environment(map);
        if !bound {
            tracing::debug!("environment map already bound");
        }
        bound
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The displayed group.
    pub fn current(&self) -> Option<&MeshGroup> {
        self.current.as_ref()
    }

    /// The material shared by every displayed mesh.
    pub fn material(&self) -> &Arc<SurfaceMaterial> {
        &self.material
    }

    /// The bundled logo chosen in the select list, if any.
    pub fn selection(&self) -> Option<BundledLogo> {
        self.selection
    }

    /// Returns true while rotation is paused.
    pub fn is_paused(&self) -> bool {
        self.pointer_down
    }

    /// The persistence slot.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning its persistence slot.
    pub fn into_store(self) -> S {
        self.store
    }
}
