//! # Polar Profile
//!
//! A closed ring between an inner and an outer radius function of the angle,
//! used for round shield faces. An inner radius of zero makes a disc whose
//! center is emitted once and shared by every angular segment.

use super::{CrossSection, Profile};
use config::constants::{coincident, MIN_SUBDIVISIONS, PROFILE_EPSILON};
use glam::DVec2;
use std::f64::consts::TAU;

/// Ring profile between `inner(θ)` and `outer(θ)`.
///
/// The normalized parameter maps to `θ = 2π·t`. The profile is closed:
/// generators sample `resolution` angles and stitch the last one back to
/// the first. With `subdivisions > 1` every angular segment is split into
/// concentric strips so overlays can bend the face between the radii.
///
/// # Example
///
/// ```rust
/// use shield_mesh::ops::stitch::{stitch, StitchOptions};
/// use shield_mesh::profile::PolarProfile;
///
/// let disc = PolarProfile::new(|_| 0.0, |_| 1.0, 8).with_subdivisions(3);
/// let face = stitch(&disc, StitchOptions::default()).unwrap();
/// // Shared center plus three rings of eight
/// assert_eq!(face.vertex_count(), 1 + 3 * 8);
/// assert!(face.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PolarProfile<I, O> {
    inner: I,
    outer: O,
    resolution: u32,
    subdivisions: u32,
    tolerance: f64,
}

impl<I, O> PolarProfile<I, O>
where
    I: Fn(f64) -> f64,
    O: Fn(f64) -> f64,
{
    /// Creates a ring with `resolution` angular segments.
    pub fn new(inner: I, outer: O, resolution: u32) -> Self {
        Self {
            inner,
            outer,
            resolution,
            subdivisions: MIN_SUBDIVISIONS,
            tolerance: PROFILE_EPSILON,
        }
    }

    /// Splits every angular segment into `subdivisions` concentric strips.
    pub fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }

    /// Overrides the pinch tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl<I, O> Profile for PolarProfile<I, O>
where
    I: Fn(f64) -> f64,
    O: Fn(f64) -> f64,
{
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        let angle = TAU * t;
        let mut inner = (self.inner)(angle);
        let mut outer = (self.outer)(angle);
        if inner > outer {
            std::mem::swap(&mut inner, &mut outer);
        }
        let direction = DVec2::new(angle.cos(), angle.sin());
        CrossSection::span(
            direction * inner,
            direction * outer,
            coincident(inner, outer, self.tolerance),
        )
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    fn pole(&self) -> Option<DVec2> {
        Some(DVec2::ZERO)
    }
}
