//! # Cross-Section Stitching
//!
//! Connects consecutive cross-sections with triangles. The pattern depends
//! only on how many points each side contributes:
//!
//! | previous | current | triangles                                       |
//! |----------|---------|-------------------------------------------------|
//! | 0        | any     | none                                            |
//! | any      | 0       | none                                            |
//! | 1        | 1       | none                                            |
//! | 1        | 2       | `(old, newUpper, newLower)`                     |
//! | 2        | 1       | `(oldLower, oldUpper, new)`                     |
//! | 2        | 2       | `(oldLower, oldUpper, newUpper)`, `(oldLower, newUpper, newLower)` |
//!
//! A profile with subdivisions splits each two-point cross-section into a
//! column of evenly spaced points; the table then applies to every pair of
//! neighbouring points in the column.
//!
//! With `flip = false` and points ordered lower before upper along a strip
//! running towards `+x`, every triangle winds clockwise in the xy-plane, so
//! its right-hand normal points towards `-z` where the viewer sits.


use crate::error::MeshError;
use crate::profile::{check_profile, sample, CrossSection, Profile, Sample};
use crate::sub_mesh::{triangle, SubMesh};
use config::constants::PROFILE_EPSILON;
use glam::DVec2;

/// Options for [`stitch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StitchOptions {
    /// Reverse the winding of every triangle
    pub flip: bool,
}

/// Vertex indices of one cross-section, lower point first.
///
/// Empty for an empty cross-section, one index for a pinch and
/// `subdivisions + 1` indices for a span.
pub type Column = Vec<u32>;

/// Appends a triangle unless two of its corners are the same vertex, which
/// happens next to a shared pole.
#[inline]
pub(crate) fn push_face(out: &mut Vec<[u32; 3]>, tri: [u32; 3]) {
    if tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2] {
        out.push(tri);
    }
}

/// Emits the triangles connecting two columns.
pub fn stitch_pair(previous: &[u32], current: &[u32], flip: bool, out: &mut Vec<[u32; 3]>) {
    match (previous.len(), current.len()) {
        (0, _) | (_, 0) | (1, 1) => {}
        (1, _) => {
            for new in current.windows(2) {
                push_face(out, triangle(previous[0], new[1], new[0], flip));
            }
        }
        (_, 1) => {
            for old in previous.windows(2) {
                push_face(out, triangle(old[0], old[1], current[0], flip));
            }
        }
        _ => {
            for (old, new) in previous.windows(2).zip(current.windows(2)) {
                push_face(out, triangle(old[0], old[1], new[1], flip));
                push_face(out, triangle(old[0], new[1], new[0], flip));
            }
        }
    }
}

/// Writes the points of successive cross-sections into a sub-mesh at a
/// fixed base depth.
///
/// Two-point cross-sections are split into `subdivisions` strips. Points on
/// the profile's pole get a single vertex shared by every column.
pub(crate) struct ColumnWriter {
    z: f64,
    subdivisions: u32,
    pole: Option<DVec2>,
    pole_index: Option<u32>,
}

impl ColumnWriter {
    pub(crate) fn new<P: Profile + ?Sized>(profile: &P, z: f64) -> Self {
        Self {
            z,
            subdivisions: profile.subdivisions(),
            pole: profile.pole(),
            pole_index: None,
        }
    }

    /// Appends the points of `sample` and returns their indices.
    pub(crate) fn push(&mut self, mesh: &mut SubMesh, sample: &Sample) -> Column {
        let z = self.z + sample.depth;
        match sample.section {
            CrossSection::Empty => Vec::new(),
            CrossSection::One(point) => vec![self.point(mesh, point, z)],
            CrossSection::Two(lower, upper) => {
                let n = self.subdivisions;
                (0..=n)
                    .map(|j| {
                        // Exact endpoints, interpolated interior
                        let point = match j {
                            0 => lower,
                            _ if j == n => upper,
                            _ => lower.lerp(upper, f64::from(j) / f64::from(n)),
                        };
                        self.point(mesh, point, z)
                    })
                    .collect()
            }
        }
    }

    fn point(&mut self, mesh: &mut SubMesh, point: DVec2, z: f64) -> u32 {
        match self.pole {
            Some(pole) if point.distance(pole) < PROFILE_EPSILON => {
                *self
                    .pole_index
                    .get_or_insert_with(|| mesh.add_point(pole, z))
            }
            _ => mesh.add_point(point, z),
        }
    }
}

/// Stitches a profile into a flat strip at `z = 0` (plus the profile's
/// per-sample depth).
///
/// Every sampled point becomes exactly one vertex, in sample order, except
/// points on the profile's pole, which share one vertex. Closed profiles
/// are stitched as rings. The result has a single triangle group.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] when the profile resolution is
/// below 1 (or below 3 for rings) or its subdivisions are zero.
///
/// # Example
///
/// ```rust
/// use shield_mesh::ops::stitch::{stitch, StitchOptions};
/// use shield_mesh::profile::FullBandProfile;
///
/// let strip = stitch(&FullBandProfile::new(4), StitchOptions::default()).unwrap();
/// assert_eq!(strip.vertex_count(), 10);
/// assert_eq!(strip.triangle_count(), 8);
/// ```
pub fn stitch<P: Profile + ?Sized>(profile: &P, options: StitchOptions) -> Result<SubMesh, MeshError> {
    check_profile(profile)?;
    let closed = profile.is_closed();

    let mut mesh = SubMesh::new();
    let mut writer = ColumnWriter::new(profile, 0.0);

    let mut first: Option<Column> = None;
    let mut previous: Option<Column> = None;
    for sample in sample(profile) {
        let current = writer.push(&mut mesh, &sample);
        if let Some(previous) = &previous {
            stitch_pair(previous, &current, options.flip, mesh.group_mut(0));
        }
        if first.is_none() {
            first = Some(current.clone());
        }
        previous = Some(current);
    }

    if closed {
        if let (Some(last), Some(first)) = (&previous, &first) {
            stitch_pair(last, first, options.flip, mesh.group_mut(0));
        }
    }

    log::debug!(
        "stitched {} vertices into {} triangles (closed: {closed})",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
