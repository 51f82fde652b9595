//! # Function-Bounded Profile
//!
//! Fills the band between a fixed baseline and a scalar function `f(t)`.

use super::{CrossSection, Outline, Profile};
use config::constants::{coincident, PROFILE_EPSILON};
use glam::DVec2;

/// Profile filled from a baseline to `f(t)`.
///
/// Not inverted, the baseline is `y = 0` and the band runs from the baseline
/// up (or down) to the curve. Inverted, the baseline is `y = 1` and the band
/// runs from the curve to the top. Where the curve meets the baseline the
/// cross-section pinches to a single point.
///
/// # Example
///
/// ```rust
/// use shield_mesh::profile::{CrossSection, FunctionProfile, Profile};
/// use glam::DVec2;
///
/// let profile = FunctionProfile::new(|t| t - 0.5, 2, false);
/// assert_eq!(profile.evaluate(0.5), CrossSection::One(DVec2::new(0.5, 0.0)));
/// assert_eq!(profile.evaluate(1.0).count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FunctionProfile<F> {
    function: F,
    resolution: u32,
    inverted: bool,
    tolerance: f64,
}

impl<F: Fn(f64) -> f64> FunctionProfile<F> {
    /// Creates a profile sampling `function` over `resolution` cells.
    pub fn new(function: F, resolution: u32, inverted: bool) -> Self {
        Self {
            function,
            resolution,
            inverted,
            tolerance: PROFILE_EPSILON,
        }
    }

    /// Overrides the pinch tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns true when the band runs from the curve to `y = 1`.
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The y value the band is filled from.
    pub fn baseline(&self) -> f64 {
        if self.inverted {
            1.0
        } else {
            0.0
        }
    }
}

impl<F: Fn(f64) -> f64> Profile for FunctionProfile<F> {
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        let value = (self.function)(t);
        let baseline = self.baseline();
        if coincident(value, baseline, self.tolerance) {
            return CrossSection::One(DVec2::new(t, baseline));
        }
        let (lower, upper) = if value < baseline {
            (value, baseline)
        } else {
            (baseline, value)
        };
        CrossSection::Two(DVec2::new(t, lower), DVec2::new(t, upper))
    }

    fn zero_origin(&self) -> bool {
        !self.inverted
    }

    fn zero_target(&self) -> bool {
        !self.inverted
    }
}

impl<F: Fn(f64) -> f64> Outline for FunctionProfile<F> {
    fn edge_point(&self, t: f64) -> DVec2 {
        DVec2::new(t, (self.function)(t))
    }
}
