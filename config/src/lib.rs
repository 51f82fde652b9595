//! # Config Crate
//!
//! Centralized configuration constants for the shield mesh pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! generators, overlays and tests agree on the same tolerances and defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PROFILE_EPSILON, DEFAULT_RESOLUTION};
//!
//! // Two profile points closer than PROFILE_EPSILON collapse into one
//! let lower: f64 = 0.0;
//! let upper: f64 = 0.000001;
//! assert!((upper - lower).abs() < PROFILE_EPSILON);
//!
//! // Resolution defaults for profiles
//! let requested: Option<u32> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_RESOLUTION), DEFAULT_RESOLUTION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Platform Values**: Pure numbers, usable from any target
//! - **Validated Overrides**: [`constants::GlobalConfig`] rejects nonsense values

pub mod constants;
