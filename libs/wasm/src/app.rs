//! # Scene App
//!
//! The browser-side session: a [`SceneSession`] persisted in
//! `localStorage`, driven by DOM event handlers in the host.
//!
//! Every load returns a fresh [`GroupHandle`]. The host disposes the
//! geometry it built from the previous handle before adding the new one.

use logo_scene::{BundledLogo, SceneSession, SessionError};
use svg_mesh::EnvironmentMap;
use wasm_bindgen::prelude::*;

use crate::mesh_handle::GroupHandle;
use crate::storage::LocalStorageStore;

fn to_js(err: SessionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Scene session exported to JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const app = new SceneApp();
/// show(app.restore());
///
/// fileInput.onchange = async (e) => {
///   const file = e.target.files[0];
///   try {
///     show(app.upload(file.name, await file.text()));
///   } catch (message) {
///     alert(message);
///   }
/// };
///
/// renderer.setAnimationLoop(() => {
///   app.tick();
///   root.rotation.y = app.rotation_y;
/// });
/// ```
#[wasm_bindgen]
pub struct SceneApp {
    session: SceneSession<LocalStorageStore>,
    last_tick_ms: Option<f64>,
}

#[wasm_bindgen]
impl SceneApp {
    /// Creates a session over `window.localStorage`.
    ///
    /// # Errors
    /// Returns a JavaScript error when local storage is unavailable.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SceneApp, JsValue> {
        let store = LocalStorageStore::from_window()
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self {
            session: SceneSession::new(store),
            last_tick_ms: None,
        })
    }

    /// Loads the stored logo, or the default one.
    pub fn restore(&mut self) -> Result<GroupHandle, JsValue> {
        self.session.restore().map_err(to_js)?;
        self.current_handle()
    }

    /// Loads and persists raw markup.
    pub fn change_svg(&mut self, markup: &str) -> Result<GroupHandle, JsValue> {
        // Dropping the detached group frees only its Rust-side copy.
        let _detached = self.session.change_svg(markup).map_err(to_js)?;
        self.current_handle()
    }

    /// Handles a file chosen in the file picker.
    ///
    /// # Errors
    /// Throws "Please load only svg files!" for non-`.svg` names.
    pub fn upload(&mut self, file_name: &str, contents: &str) -> Result<GroupHandle, JsValue> {
        // Dropping the detached group frees only its Rust-side copy.
        let _detached = self.session.upload(file_name, contents).map_err(to_js)?;
        self.current_handle()
    }

    /// Handles a select-list change; returns `undefined` when nothing was
    /// loaded.
    pub fn select(&mut self, value: &str) -> Result<Option<GroupHandle>, JsValue> {
        let loads = value.parse::<BundledLogo>().is_ok();
        // Dropping the detached group frees only its Rust-side copy.
        let _detached = self.session.select(value).map_err(to_js)?;
        if !loads {
            return Ok(None);
        }
        self.current_handle().map(Some)
    }

    /// The value of the bundled logo chosen in the select list, or `""`.
    #[wasm_bindgen(getter)]
    pub fn selection(&self) -> String {
        self.session
            .selection()
            .map(|logo| logo.value().to_string())
            .unwrap_or_default()
    }

    /// Pauses rotation.
    pub fn pointer_down(&mut self) {
        self.session.pointer_down();
    }

    /// Resumes rotation.
    pub fn pointer_up(&mut self) {
        self.session.pointer_up();
    }

    /// Advances rotation by `delta_seconds`.
    pub fn advance(&mut self, delta_seconds: f64) {
        self.session.advance(delta_seconds);
    }

    /// Advances rotation by the wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let now = js_sys::Date::now();
        if let Some(last) = self.last_tick_ms.replace(now) {
            self.session.advance((now - last) / 1000.0);
        }
    }

    /// The current group's rotation around Y in radians.
    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f64 {
        self.session
            .current()
            .map(|group| group.transform.rotation_y)
            .unwrap_or_default()
    }

    /// Records the environment map bound to the shared material.
    ///
    /// Returns false if one was already bound.
    pub fn bind_environment(&self, source: &str) -> bool {
        self.session.bind_environment(EnvironmentMap::new(source))
    }

    fn current_handle(&self) -> Result<GroupHandle, JsValue> {
        self.session
            .current()
            .map(GroupHandle::from_group)
            .ok_or_else(|| JsValue::from_str("no group loaded"))
    }
}
