//! # Session Errors

use config::constants::INVALID_EXTENSION_MESSAGE;
use svg_mesh::MeshError;
use thiserror::Error;

/// Errors reported by a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage is missing or disabled.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Writing a key failed (for example, quota exceeded).
    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Errors that abort a load request.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The uploaded file does not carry an `.svg` extension.
    #[error("{}", INVALID_EXTENSION_MESSAGE)]
    InvalidExtension { file_name: String },

    /// The markup could not be turned into meshes.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Persisting the markup failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The name is not one of the bundled logos.
    #[error("Unknown bundled logo: {0}")]
    UnknownLogo(String),
}
