//! # Configuration Constants
//!
//! Centralized constants for the SVG logo pipeline. Extrusion profile,
//! tessellation tolerances, and scene defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Extrusion**: The fixed bevelled extrusion profile
//! - **Tessellation**: Curve flattening and vertex merging
//! - **Scene**: Scaling, rotation, material and persistence defaults

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when deciding whether two bevel edge directions are
/// collinear.
pub const COLLINEAR_EPSILON: f64 = f64::EPSILON;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Extrusion depth along +Z, in SVG path units.
pub const EXTRUDE_DEPTH: f64 = 15.0;

/// Number of layers the straight wall is split into along the depth axis.
pub const EXTRUDE_STEPS: u32 = 1;

/// How far the bevel extends along Z beyond each cap.
pub const BEVEL_THICKNESS: f64 = 3.0;

/// How far the bevel pushes the outline outwards.
pub const BEVEL_SIZE: f64 = 3.0;

/// Distance the bevel starts from the original outline.
pub const BEVEL_OFFSET: f64 = 0.0;

/// Number of rings used to approximate each quarter-round bevel.
///
/// # Example
///
/// ```rust
/// use config::constants::{BEVEL_SEGMENTS, EXTRUDE_STEPS};
///
/// // Rings per shape: bottom bevel + wall + top bevel
/// let layers = EXTRUDE_STEPS + 2 * BEVEL_SEGMENTS + 1;
/// assert_eq!(layers, 12);
/// ```
pub const BEVEL_SEGMENTS: u32 = 5;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Number of straight segments used to flatten one quadratic or cubic curve.
pub const CURVE_SEGMENTS: u32 = 12;

/// Grid size used to quantize positions when merging coincident vertices.
///
/// Two vertices whose coordinates round to the same multiple of this value
/// collapse into one.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_TOLERANCE;
///
/// let quantize = |v: f64| (v / VERTEX_MERGE_TOLERANCE).round() as i64;
/// assert_eq!(quantize(1.00001), quantize(1.0));
/// ```
pub const VERTEX_MERGE_TOLERANCE: f64 = 1e-4;

/// Contours whose absolute area falls below this value are dropped as
/// degenerate.
pub const MIN_CONTOUR_AREA: f64 = 1e-9;

// =============================================================================
// SCENE CONSTANTS
// =============================================================================

/// Uniform scale applied to every extruded mesh (path space to scene space).
pub const MESH_SCALE: f64 = 0.2;

/// Y scale of the group root. SVG Y grows downward, scene Y grows upward.
pub const GROUP_MIRROR_Y: f64 = -1.0;

/// Rotation speed of the displayed group around Y, in radians per second.
pub const ROTATION_SPEED: f64 = 1.3;

/// Metalness of the shared surface material.
pub const MATERIAL_METALNESS: f32 = 1.0;

/// Roughness of the shared surface material.
pub const MATERIAL_ROUGHNESS: f32 = 0.1;

/// Environment map intensity of the shared surface material.
pub const MATERIAL_ENV_INTENSITY: f32 = 1.0;

/// Key of the persistence slot holding the last loaded SVG markup.
pub const STORAGE_KEY: &str = "user_svg";

/// The only file extension accepted for uploads (compared case-insensitively).
pub const SVG_EXTENSION: &str = "svg";

/// Alert text shown when an upload is rejected by the extension check.
pub const INVALID_EXTENSION_MESSAGE: &str = "Please load only svg files!";

// =============================================================================
// TESSELLATION CONFIG
// =============================================================================

/// Validated tessellation settings shared by the normalizer.
///
/// # Examples
/// ```
/// use config::constants::TessellationConfig;
/// let config = TessellationConfig::default();
/// assert_eq!(config.curve_segments, 12);
/// assert!(config.merge_tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationConfig {
    /// Straight segments emitted per flattened curve.
    pub curve_segments: u32,
    /// Quantization grid for vertex merging.
    pub merge_tolerance: f64,
}

impl TessellationConfig {
    /// Builds a configuration, rejecting a zero segment count or a
    /// non-positive tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::TessellationConfig;
    /// let cfg = TessellationConfig::new(24, 1.0e-5).expect("valid config");
    /// assert_eq!(cfg.curve_segments, 24);
    /// ```
    pub fn new(curve_segments: u32, merge_tolerance: f64) -> Result<Self, ConfigError> {
        if curve_segments == 0 {
            return Err(ConfigError::InvalidCurveSegments(curve_segments));
        }
        if !(merge_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(merge_tolerance));
        }
        Ok(Self {
            curve_segments,
            merge_tolerance,
        })
    }
}

impl Default for TessellationConfig {
    fn default() -> Self {
        Self {
            curve_segments: CURVE_SEGMENTS,
            merge_tolerance: VERTEX_MERGE_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the merge tolerance is zero, negative, or NaN.
    InvalidTolerance(f64),
    /// Raised when a curve would be flattened into zero segments.
    InvalidCurveSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "merge_tolerance must be positive: {value}")
            }
            ConfigError::InvalidCurveSegments(value) => {
                write!(f, "curve_segments must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
