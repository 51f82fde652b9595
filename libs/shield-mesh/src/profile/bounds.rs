//! # Bound-Function Profile
//!
//! A band between a lower and an upper bound function, sampled over an
//! arbitrary domain instead of `[0, 1]`.

use super::{CrossSection, Profile};
use config::constants::{coincident, DEFAULT_DOMAIN_END, DEFAULT_DOMAIN_START, PROFILE_EPSILON};
use glam::DVec2;

/// Profile between two bound functions of `x`.
///
/// The normalized parameter is mapped onto `[start, end]` and the points use
/// that `x`. Bounds are swapped where the lower one exceeds the upper one, so
/// crossing curves still produce a consistently ordered band.
#[derive(Debug, Clone)]
pub struct BoundsProfile<L, U> {
    lower: L,
    upper: U,
    resolution: u32,
    start: f64,
    end: f64,
    tolerance: f64,
}

impl<L, U> BoundsProfile<L, U>
where
    L: Fn(f64) -> f64,
    U: Fn(f64) -> f64,
{
    /// Creates a profile over the default `[-0.5, 0.5]` domain.
    pub fn new(lower: L, upper: U, resolution: u32) -> Self {
        Self {
            lower,
            upper,
            resolution,
            start: DEFAULT_DOMAIN_START,
            end: DEFAULT_DOMAIN_END,
            tolerance: PROFILE_EPSILON,
        }
    }

    /// Samples over `[start, end]` instead of the default domain.
    pub fn with_domain(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Overrides the pinch tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Domain `x` for the normalized parameter `t`.
    #[inline]
    pub fn domain_x(&self, t: f64) -> f64 {
        self.start + t * (self.end - self.start)
    }
}

impl<L, U> Profile for BoundsProfile<L, U>
where
    L: Fn(f64) -> f64,
    U: Fn(f64) -> f64,
{
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        let x = self.domain_x(t);
        let mut low = (self.lower)(x);
        let mut high = (self.upper)(x);
        if low > high {
            std::mem::swap(&mut low, &mut high);
        }
        CrossSection::span(
            DVec2::new(x, low),
            DVec2::new(x, high),
            coincident(low, high, self.tolerance),
        )
    }
}
