//! # Round Shield Part
//!
//! A disc standing in the xy-plane: a front face, an optional back face and
//! the band around the rim. Used for bosses and round shields.

use crate::error::MeshError;
use crate::sub_mesh::SubMesh;
use config::constants::{DEFAULT_ROUND_SEGMENTS, MIN_ROUND_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;

/// Parameters for [`round_shield_part`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundShieldParams {
    /// Disc center; front and back sit `thickness` in front of and behind it
    pub center: DVec3,
    pub radius: f64,
    /// Half the distance between front and back
    pub thickness: f64,
    /// Rim vertices per face
    pub segments: u32,
    /// Replace the flat front by a cone running to the back rim
    pub prism: bool,
    /// Emit the back face
    pub back: bool,
}

impl Default for RoundShieldParams {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            radius: 1.0,
            thickness: 0.05,
            segments: DEFAULT_ROUND_SEGMENTS,
            prism: false,
            back: true,
        }
    }
}

impl RoundShieldParams {
    fn validate(&self) -> Result<(), MeshError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(MeshError::invalid_parameter(format!(
                "round part radius must be positive: {}",
                self.radius
            )));
        }
        if !(self.thickness > 0.0 && self.thickness.is_finite()) {
            return Err(MeshError::invalid_parameter(format!(
                "round part thickness must be positive: {}",
                self.thickness
            )));
        }
        if self.segments < MIN_ROUND_SEGMENTS {
            return Err(MeshError::invalid_parameter(format!(
                "round part needs at least {MIN_ROUND_SEGMENTS} segments: {}",
                self.segments
            )));
        }
        Ok(())
    }
}

/// Creates a round shield part.
///
/// Vertex layout: front center, `segments` front rim points, back center,
/// `segments` back rim points. Groups, in order: front, back (when
/// `back` is set) and outside (unless `prism` is set). Faces point away from
/// the disc; the front faces `-z`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for a non-positive radius or
/// thickness, or fewer than three segments.
///
/// # Example
///
/// ```rust
/// use shield_mesh::primitives::{round_shield_part, RoundShieldParams};
///
/// let boss = round_shield_part(RoundShieldParams {
///     segments: 8,
///     ..Default::default()
/// })
/// .unwrap();
/// assert_eq!(boss.vertex_count(), 18);
/// assert_eq!(boss.group_count(), 3);
/// ```
pub fn round_shield_part(params: RoundShieldParams) -> Result<SubMesh, MeshError> {
    params.validate()?;
    let RoundShieldParams {
        center,
        radius,
        thickness,
        segments,
        prism,
        back,
    } = params;

    let front_z = center.z - thickness;
    let back_z = center.z + thickness;
    let rim = |i: u32, z: f64| {
        let angle = TAU * f64::from(i) / f64::from(segments);
        DVec3::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
            z,
        )
    };

    let mut vertices = Vec::with_capacity(2 * (segments as usize + 1));
    vertices.push(center.truncate().extend(front_z));
    vertices.extend((0..segments).map(|i| rim(i, front_z)));
    vertices.push(center.truncate().extend(back_z));
    vertices.extend((0..segments).map(|i| rim(i, back_z)));

    let n = segments;
    let front_center = 0;
    let back_center = n + 1;
    let mut front = Vec::with_capacity(n as usize);
    let mut back_face = Vec::new();
    let mut outside = Vec::new();

    for i in 0..n {
        let next = (i + 1) % n;
        let (front1, front2) = (next + 1, i + 1);
        let (back1, back2) = (i + n + 2, next + n + 2);

        if prism {
            front.push([front_center, back2, back1]);
        } else {
            front.push([front_center, front1, front2]);
            outside.push([front2, front1, back2]);
            outside.push([front2, back2, back1]);
        }
        if back {
            back_face.push([back_center, back1, back2]);
        }
    }

    let mut groups = vec![front];
    if back {
        groups.push(back_face);
    }
    if !prism {
        groups.push(outside);
    }

    log::debug!("round part: {} segments, {} groups", n, groups.len());

    Ok(SubMesh::from_parts(vertices, groups))
}
