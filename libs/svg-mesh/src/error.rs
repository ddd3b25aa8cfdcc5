//! # Mesh Errors
//!
//! Error types for SVG parsing, shape decomposition and extrusion.

use thiserror::Error;

/// Errors that can occur while turning SVG markup into a mesh group.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The markup could not be parsed as SVG.
    #[error("SVG parse error: {0}")]
    Parse(String),

    /// Cap triangulation failed for a shape.
    #[error("Triangulation failed: {message}")]
    Triangulation { message: String },

    /// Degenerate geometry that cannot be extruded.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// An extrusion profile value is out of range.
    #[error("Invalid extrusion profile: {message}")]
    InvalidProfile { message: String },
}

impl MeshError {
    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::Triangulation {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid profile error.
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile {
            message: message.into(),
        }
    }
}

impl From<usvg::Error> for MeshError {
    fn from(err: usvg::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("contour has 2 points");
        assert!(err.to_string().contains("Degenerate"));
        assert!(err.to_string().contains("2 points"));

        let err = MeshError::Parse("unexpected end of stream".to_string());
        assert!(err.to_string().starts_with("SVG parse error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
