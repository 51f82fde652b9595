//! # Full-Band Profile
//!
//! The straight `(t, 0)`–`(t, 1)` band used for plain side walls.

use super::{CrossSection, Outline, Profile};
use glam::DVec2;

/// Profile that always returns the full unit band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullBandProfile {
    resolution: u32,
}

impl FullBandProfile {
    /// Creates a band sampled over `resolution` cells.
    pub fn new(resolution: u32) -> Self {
        Self { resolution }
    }
}

impl Profile for FullBandProfile {
    fn resolution(&self) -> u32 {
        self.resolution
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        CrossSection::Two(DVec2::new(t, 0.0), DVec2::new(t, 1.0))
    }
}

impl Outline for FullBandProfile {
    fn edge_point(&self, t: f64) -> DVec2 {
        DVec2::new(t, 1.0)
    }
}
