//! # Configuration Constants
//!
//! Centralized constants for the shield mesh pipeline. Profile tolerances,
//! sampling resolutions and default extrusion sizes are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default sampling parameters for profiles
//! - **Geometry**: Default depths, domains and segment counts
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance under which the two points of a cross-section collapse into one.
///
/// Profiles use this to decide whether a sample is a pinch point. Profile
/// functions are usually authored curves with limited precision.
///
/// # Example
///
/// ```rust
/// use config::constants::PROFILE_EPSILON;
///
/// let baseline: f64 = 0.0;
/// let value = 4e-6;
/// assert!((value - baseline).abs() < PROFILE_EPSILON);
/// ```
pub const PROFILE_EPSILON: f64 = 1e-5;

/// Triangle area under which mesh validation reports a degenerate face.
///
/// # Example
///
/// ```rust
/// use config::constants::DEGENERATE_AREA_EPSILON;
///
/// // A sliver one millionth wide on a unit edge is still a real face
/// assert!(0.5 * 1e-6 > DEGENERATE_AREA_EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of horizontal cells sampled from a profile.
///
/// A profile with resolution `R` is evaluated at `R + 1` parameter values.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let samples = DEFAULT_RESOLUTION + 1;
/// assert!(samples > 2);
/// ```
pub const DEFAULT_RESOLUTION: u32 = 32;

/// Smallest resolution a profile may declare.
pub const MIN_RESOLUTION: u32 = 1;

/// Smallest number of strips a two-point cross-section may be split into.
pub const MIN_SUBDIVISIONS: u32 = 1;

/// Default number of rim vertices for round shield parts.
pub const DEFAULT_ROUND_SEGMENTS: u32 = 16;

/// Smallest number of rim vertices that still forms a closed disc.
pub const MIN_ROUND_SEGMENTS: u32 = 3;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Default depth of extruded shells and side walls.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DEPTH;
///
/// let user_depth: Option<f64> = None;
/// assert_eq!(user_depth.unwrap_or(DEFAULT_DEPTH), 0.1);
/// ```
pub const DEFAULT_DEPTH: f64 = 0.1;

/// Default start of the domain sampled by bound-function profiles.
pub const DEFAULT_DOMAIN_START: f64 = -0.5;

/// Default end of the domain sampled by bound-function profiles.
pub const DEFAULT_DOMAIN_END: f64 = 0.5;

/// Horizontal shift applied by curved overlays so that the normalized patch
/// `[0, 1]` is centered on the surface apex.
pub const CURVED_OVERLAY_CENTER: f64 = 0.5;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single combined mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of configuration settings that can be shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Pinch tolerance propagated into profiles.
    pub tolerance: f64,
    /// Resolution used when a caller does not pick one.
    pub default_resolution: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and resolution.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.default_resolution, 24);
    /// ```
    pub fn new(tolerance: f64, default_resolution: u32) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(default_resolution));
        }
        Ok(Self {
            tolerance,
            default_resolution,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: PROFILE_EPSILON,
            default_resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the resolution would produce no cells.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidResolution(value) => {
                write!(f, "default_resolution must be >= {MIN_RESOLUTION}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two profile values coincide within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::{coincident, PROFILE_EPSILON};
///
/// assert!(coincident(0.5, 0.500001, PROFILE_EPSILON));
/// assert!(!coincident(0.5, 0.6, PROFILE_EPSILON));
/// ```
#[inline]
pub fn coincident(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
