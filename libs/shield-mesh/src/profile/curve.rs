//! # Space-Curve Profile
//!
//! A band under a curve `c(t) = (x, y, z)` where `y` bounds the band and `z`
//! lifts the whole cross-section out of the plane. Used for shield rims that
//! bulge towards the viewer.

use super::{parameter, CrossSection, Outline, Profile};
use config::constants::{coincident, PROFILE_EPSILON};
use glam::{DVec2, DVec3};

/// Profile between the extreme `y` of a curve and the curve itself.
///
/// The curve is sampled once at construction to find its `y` range and its
/// smallest `z`. Not inverted, the band runs from the lowest `y` up to the
/// curve; inverted, from the curve up to the highest `y`. The depth of each
/// cross-section is the curve's `z` minus the smallest `z`, so the flattest
/// part of the band sits at `z = 0`. The curve's `x` is ignored; samples are
/// placed at `x = t`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shield_mesh::profile::{CurveProfile, Profile};
///
/// let profile = CurveProfile::new(|t| DVec3::new(t, t, 0.5 + t), 4, false);
/// assert_eq!(profile.evaluate(0.0).count(), 1);
/// assert_eq!(profile.depth(1.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct CurveProfile<F> {
    curve: F,
    resolution: u32,
    inverted: bool,
    tolerance: f64,
    min_y: f64,
    max_y: f64,
    min_z: f64,
}

impl<F: Fn(f64) -> DVec3> CurveProfile<F> {
    /// Creates a profile sampling `curve` over `resolution` cells.
    pub fn new(curve: F, resolution: u32, inverted: bool) -> Self {
        let steps = resolution.max(1);
        let (mut min_y, mut max_y, mut min_z) = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY);
        for i in 0..=steps {
            let point = curve(parameter(i, steps));
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
            min_z = min_z.min(point.z);
        }
        Self {
            curve,
            resolution,
            inverted,
            tolerance: PROFILE_EPSILON,
            min_y,
            max_y,
            min_z,
        }
    }

    /// Overrides the pinch tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl<F: Fn(f64) -> DVec3> Profile for CurveProfile<F> {
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        let y = (self.curve)(t).y;
        let base = Outline::baseline(self);
        if coincident(y, base, self.tolerance) {
            return CrossSection::One(DVec2::new(t, base));
        }
        let (lower, upper) = if self.inverted { (y, base) } else { (base, y) };
        CrossSection::Two(DVec2::new(t, lower), DVec2::new(t, upper))
    }

    fn zero_origin(&self) -> bool {
        !self.inverted
    }

    fn zero_target(&self) -> bool {
        !self.inverted
    }

    fn depth(&self, t: f64) -> f64 {
        (self.curve)(t).z - self.min_z
    }
}

impl<F: Fn(f64) -> DVec3> Outline for CurveProfile<F> {
    fn edge_point(&self, t: f64) -> DVec2 {
        DVec2::new(t, (self.curve)(t).y)
    }

    fn baseline(&self) -> f64 {
        if self.inverted {
            self.max_y
        } else {
            self.min_y
        }
    }
}
