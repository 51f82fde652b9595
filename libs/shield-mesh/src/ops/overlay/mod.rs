//! # Overlay Transforms
//!
//! Maps points from the flat parameter space produced by stitching and
//! extrusion onto the target surface of the shield. Overlays run once per
//! sub-mesh, after all triangles exist; they only move vertices.
//!
//! ## Shapes
//!
//! | Shape    | Mapping                                                    |
//! |----------|------------------------------------------------------------|
//! | Flat     | shift `x`, scale `xy`                                      |
//! | Cylinder | wrap `x` around a vertical cylinder of `radius`            |
//! | Sphere   | wrap `x` and `y` around a sphere of `radius`               |
//! | Pyramid  | flat, then raise `z` by `gradient · max(|x|, |y|)`         |
//! | Angled   | flat, then raise `z` by `gradient · |x|`                   |
//!
//! Curved overlays read their horizontal scale as an angle in degrees: a
//! point at `x` ends up `x · scale` degrees around the surface, measured
//! from the strip center.


use crate::error::MeshError;
use crate::sub_mesh::SubMesh;
use config::constants::CURVED_OVERLAY_CENTER;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Per-vertex mapping onto a target surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    /// Planar placement.
    Flat { scale: DVec2, offset: f64 },
    /// Wraps around a cylinder whose axis runs along `y`.
    Cylinder {
        radius: f64,
        /// `x`: degrees per unit, `y`: linear
        scale: DVec2,
        offset: f64,
    },
    /// Wraps around a sphere.
    Sphere {
        radius: f64,
        /// Degrees per unit along both axes
        scale: f64,
        offset: f64,
    },
    /// Four-sided bevel rising away from the origin.
    Pyramid {
        gradient: f64,
        scale: DVec2,
        offset: f64,
    },
    /// Two-sided bevel rising away from `x = 0`.
    Angled {
        gradient: f64,
        scale: DVec2,
        offset: f64,
    },
}

impl Default for Overlay {
    fn default() -> Self {
        Self::identity()
    }
}

impl Overlay {
    /// Flat overlay that leaves every point where it is.
    pub const fn identity() -> Self {
        Self::Flat {
            scale: DVec2::ONE,
            offset: 0.0,
        }
    }

    /// Checks the shape parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] when a curved overlay has a
    /// radius that is not positive, or any parameter is not finite.
    pub fn validate(&self) -> Result<(), MeshError> {
        let finite = match *self {
            Self::Flat { scale, offset } => scale.is_finite() && offset.is_finite(),
            Self::Cylinder {
                radius,
                scale,
                offset,
            } => {
                check_radius(radius)?;
                scale.is_finite() && offset.is_finite()
            }
            Self::Sphere {
                radius,
                scale,
                offset,
            } => {
                check_radius(radius)?;
                scale.is_finite() && offset.is_finite()
            }
            Self::Pyramid {
                gradient,
                scale,
                offset,
            }
            | Self::Angled {
                gradient,
                scale,
                offset,
            } => gradient.is_finite() && scale.is_finite() && offset.is_finite(),
        };
        if !finite {
            return Err(MeshError::invalid_parameter(format!(
                "overlay parameters must be finite: {self:?}"
            )));
        }
        Ok(())
    }

    /// Maps a single point. Does not validate; see [`Overlay::apply`].
    pub fn map_point(&self, p: DVec3) -> DVec3 {
        match *self {
            Self::Flat { scale, offset } => flat(p, scale, offset),
            Self::Cylinder {
                radius,
                scale,
                offset,
            } => {
                let mut p = p;
                p.x -= offset + CURVED_OVERLAY_CENTER;
                let reach = radius - p.z;
                p.x *= reach * scale.x.to_radians();
                p.y *= scale.y;
                let depth = reach * reach - p.x * p.x;
                // Beyond the horizon the depth is left alone
                if depth > 0.0 {
                    p.z = radius - depth.sqrt();
                }
                p
            }
            Self::Sphere {
                radius,
                scale,
                offset,
            } => {
                let mut p = p;
                p.x -= offset + CURVED_OVERLAY_CENTER;
                let reach = radius - p.z;
                let width = reach * scale.to_radians();
                p.x *= width;
                p.y *= width;
                let depth = reach * reach - p.x * p.x - p.y * p.y;
                if depth > 0.0 {
                    p.z = radius - depth.sqrt();
                }
                p
            }
            Self::Pyramid {
                gradient,
                scale,
                offset,
            } => {
                let mut p = flat(p, scale, offset);
                p.z += gradient * p.x.abs().max(p.y.abs());
                p
            }
            Self::Angled {
                gradient,
                scale,
                offset,
            } => {
                let mut p = flat(p, scale, offset);
                p.z += gradient * p.x.abs();
                p
            }
        }
    }

    /// Maps every point of a buffer in place.
    ///
    /// # Errors
    ///
    /// Returns the [`Overlay::validate`] error and leaves the buffer
    /// untouched when the parameters are unusable.
    pub fn apply(&self, points: &mut [DVec3]) -> Result<(), MeshError> {
        self.validate()?;
        for p in points.iter_mut() {
            *p = self.map_point(*p);
        }
        Ok(())
    }

    /// Maps the vertices of a sub-mesh in place; triangles are unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`Overlay::apply`].
    pub fn apply_to(&self, mesh: &mut SubMesh) -> Result<(), MeshError> {
        self.apply(mesh.vertices_mut())
    }
}

fn flat(mut p: DVec3, scale: DVec2, offset: f64) -> DVec3 {
    p.x -= offset;
    p.x *= scale.x;
    p.y *= scale.y;
    p
}

fn check_radius(radius: f64) -> Result<(), MeshError> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(MeshError::invalid_parameter(format!(
            "overlay radius must be positive: {radius}"
        )));
    }
    Ok(())
}
