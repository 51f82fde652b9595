//! # Profiles
//!
//! A profile maps a normalized parameter `t ∈ [0, 1]` to a [`CrossSection`]
//! of zero, one or two 2D points. Generators sample a profile at
//! `resolution + 1` evenly spaced parameters (or `resolution` for closed
//! rings) and stitch consecutive cross-sections together.
//!
//! ## Implementations
//!
//! - [`FunctionProfile`]: band between a baseline and a scalar function
//! - [`FullBandProfile`]: fixed `(t, 0)`–`(t, 1)` band, never pinches
//! - [`BoundsProfile`]: band between two bound functions over a domain
//! - [`PolarProfile`]: ring or disc between an inner and an outer radius
//!   function, optionally split into concentric rings
//! - [`CurveProfile`]: band under a space curve, with per-sample depth
//!
//! Collapsing two coincident points into one is the profile's job; the
//! stitcher only looks at how many points a cross-section has.

mod band;
mod bounds;
mod curve;
mod function;
mod polar;

#[cfg(test)]
mod tests;

pub use band::FullBandProfile;
pub use bounds::BoundsProfile;
pub use curve::CurveProfile;
pub use function::FunctionProfile;
pub use polar::PolarProfile;

use crate::error::MeshError;
use config::constants::{MIN_RESOLUTION, MIN_SUBDIVISIONS};
use glam::DVec2;

/// Smallest number of samples that closes into a ring without a triangle
/// reusing an index.
pub const MIN_CLOSED_RESOLUTION: u32 = 3;

/// Zero, one or two points sampled from a profile.
///
/// `Two(lower, upper)` keeps its points in stitching order. `One` is a pinch
/// point, `Empty` means nothing exists at this sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrossSection<T> {
    Empty,
    One(T),
    Two(T, T),
}

impl<T: Copy> CrossSection<T> {
    /// Builds a cross-section from two candidate points, keeping only
    /// `lower` when `coincide` is set.
    #[inline]
    pub fn span(lower: T, upper: T, coincide: bool) -> Self {
        if coincide {
            Self::One(lower)
        } else {
            Self::Two(lower, upper)
        }
    }

    /// Number of points in the cross-section.
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns true for the `Empty` cross-section.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The lower point, present whenever the cross-section is not empty.
    #[inline]
    pub fn lower(&self) -> Option<T> {
        match *self {
            Self::Empty => None,
            Self::One(p) | Self::Two(p, _) => Some(p),
        }
    }

    /// The upper point, only present for `Two`.
    #[inline]
    pub fn upper(&self) -> Option<T> {
        match *self {
            Self::Two(_, p) => Some(p),
            _ => None,
        }
    }

    /// The topmost point: the upper point, or the pinch point for `One`.
    #[inline]
    pub fn top(&self) -> Option<T> {
        self.upper().or_else(|| self.lower())
    }

    /// Maps every point through `f`, keeping the cardinality.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CrossSection<U> {
        match self {
            Self::Empty => CrossSection::Empty,
            Self::One(a) => CrossSection::One(f(a)),
            Self::Two(a, b) => {
                let a = f(a);
                let b = f(b);
                CrossSection::Two(a, b)
            }
        }
    }
}

/// A sampled source of cross-sections.
pub trait Profile {
    /// Number of horizontal cells; `resolution + 1` samples are taken.
    fn resolution(&self) -> u32;

    /// Cross-section at the normalized parameter `t`.
    fn evaluate(&self, t: f64) -> CrossSection<DVec2>;

    /// Whether the filled area touches the baseline at `t = 0`.
    fn zero_origin(&self) -> bool {
        true
    }

    /// Whether the filled area touches the baseline at `t = 1`.
    fn zero_target(&self) -> bool {
        true
    }

    /// Whether the last sample connects back to the first.
    fn is_closed(&self) -> bool {
        false
    }

    /// Offset along `z` of the cross-section at `t`.
    fn depth(&self, _t: f64) -> f64 {
        0.0
    }

    /// Number of strips each two-point cross-section is split into. Interior
    /// points are spaced evenly between lower and upper.
    fn subdivisions(&self) -> u32 {
        1
    }

    /// A point every cross-section may touch, such as the center of a disc.
    /// Generators emit one shared vertex for it instead of one per sample.
    fn pole(&self) -> Option<DVec2> {
        None
    }
}

/// A profile that can also describe its outer edge as one point per sample.
///
/// Side walls follow this edge instead of the full cross-section.
pub trait Outline: Profile {
    /// Point on the edge at the normalized parameter `t`.
    fn edge_point(&self, t: f64) -> DVec2;

    /// The y value the filled area grows from. The area lies between this
    /// line and the edge: `y = 0` for profiles starting on the baseline,
    /// `y = 1` otherwise.
    fn baseline(&self) -> f64 {
        if self.zero_origin() {
            0.0
        } else {
            1.0
        }
    }
}

impl<P: Profile + ?Sized> Profile for &P {
    fn resolution(&self) -> u32 {
        (**self).resolution()
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        (**self).evaluate(t)
    }

    fn zero_origin(&self) -> bool {
        (**self).zero_origin()
    }

    fn zero_target(&self) -> bool {
        (**self).zero_target()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }

    fn depth(&self, t: f64) -> f64 {
        (**self).depth(t)
    }

    fn subdivisions(&self) -> u32 {
        (**self).subdivisions()
    }

    fn pole(&self) -> Option<DVec2> {
        (**self).pole()
    }
}

impl<P: Outline + ?Sized> Outline for &P {
    fn edge_point(&self, t: f64) -> DVec2 {
        (**self).edge_point(t)
    }

    fn baseline(&self) -> f64 {
        (**self).baseline()
    }
}

/// A cross-section together with its depth offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub section: CrossSection<DVec2>,
    pub depth: f64,
}

/// Normalized parameter of sample `index`.
#[inline]
pub fn parameter(index: u32, resolution: u32) -> f64 {
    index as f64 / resolution as f64
}

/// Rejects resolutions that cannot produce a single cell (or ring).
pub fn check_resolution(resolution: u32, closed: bool) -> Result<(), MeshError> {
    let min = if closed {
        MIN_CLOSED_RESOLUTION
    } else {
        MIN_RESOLUTION
    };
    if resolution < min {
        return Err(MeshError::invalid_parameter(format!(
            "resolution must be >= {min}: {resolution}"
        )));
    }
    Ok(())
}

/// Rejects profiles whose resolution cannot produce a single cell (or ring)
/// or whose cross-sections are split into no strips at all.
pub fn check_profile<P: Profile + ?Sized>(profile: &P) -> Result<(), MeshError> {
    check_resolution(profile.resolution(), profile.is_closed())?;
    let subdivisions = profile.subdivisions();
    if subdivisions < MIN_SUBDIVISIONS {
        return Err(MeshError::invalid_parameter(format!(
            "subdivisions must be >= {MIN_SUBDIVISIONS}: {subdivisions}"
        )));
    }
    Ok(())
}

/// Samples every cross-section a generator will stitch.
///
/// Open strips yield `resolution + 1` samples including both ends. Closed
/// rings yield `resolution` samples; `t = 1` would repeat `t = 0`.
pub fn sample<P: Profile + ?Sized>(profile: &P) -> Vec<Sample> {
    let resolution = profile.resolution();
    let count = if profile.is_closed() {
        resolution
    } else {
        resolution + 1
    };
    (0..count)
        .map(|i| {
            let t = parameter(i, resolution);
            Sample {
                section: profile.evaluate(t),
                depth: profile.depth(t),
            }
        })
        .collect()
}
