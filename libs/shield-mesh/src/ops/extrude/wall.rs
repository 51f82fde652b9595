//! # Wall Extrusion
//!
//! A flat-shaded wall running along the outline edge of a profile, from the
//! left baseline corner over the outline to the right baseline corner.

use super::{check_depth, edge_quad, Facing};
use crate::error::MeshError;
use crate::parts::Parts;
use crate::profile::{check_resolution, parameter, Outline};
use crate::sub_mesh::SubMesh;
use config::constants::{DEFAULT_DEPTH, PROFILE_EPSILON};
use glam::DVec2;

/// Parameters for wall extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallOptions {
    /// Wall depth along `z`
    pub depth: f64,
    /// Zones to emit
    pub parts: Parts,
    /// Face towards the filled area instead of away from it
    pub inside: bool,
}

impl Default for WallOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            parts: Parts::ALL,
            inside: false,
        }
    }
}

/// Extrudes the outline edge of a profile into a wall.
///
/// Segments, with `b` the outline's baseline:
/// - left cap: `(0, b) → p₀`
/// - middle: `pᵢ₋₁ → pᵢ` for every cell, split where the edge crosses `b`
/// - right cap: `pᵣ → (1, b)`
///
/// Each segment gets its own four vertices so the wall renders with hard
/// edges. Caps whose endpoints coincide collapse to nothing. Faces look
/// away from the filled area between the edge and the baseline: up where
/// the edge lies above it, down where it dips below. `inside` reverses every
/// face. Vertices follow the profile's per-sample depth.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for a non-positive depth or a
/// resolution below 1.
///
/// # Example
///
/// ```rust
/// use shield_mesh::ops::extrude::{extrude_wall, WallOptions};
/// use shield_mesh::profile::FullBandProfile;
///
/// let wall = extrude_wall(&FullBandProfile::new(4), WallOptions::default()).unwrap();
/// // Left cap, four top segments, right cap
/// assert_eq!(wall.triangle_count(), 12);
/// ```
pub fn extrude_wall<O: Outline + ?Sized>(
    outline: &O,
    options: WallOptions,
) -> Result<SubMesh, MeshError> {
    check_depth(options.depth)?;
    let resolution = outline.resolution();
    check_resolution(resolution, false)?;

    let points: Vec<EdgePoint> = (0..=resolution)
        .map(|i| {
            let t = parameter(i, resolution);
            EdgePoint {
                at: outline.edge_point(t),
                z: outline.depth(t),
            }
        })
        .collect();
    let (first, last) = (points[0], points[points.len() - 1]);
    let base = outline.baseline();

    let mut wall = Wall {
        mesh: SubMesh::new(),
        depth: options.depth,
        flip: options.inside,
        base,
    };

    if options.parts.contains(Parts::LEFT) {
        let corner = EdgePoint {
            at: DVec2::new(0.0, base),
            z: first.z,
        };
        let facing = if first.at.y > base {
            Facing::Left
        } else {
            Facing::Right
        };
        wall.segment(corner, first, facing);
    }

    if options.parts.contains(Parts::MIDDLE) {
        for pair in points.windows(2) {
            wall.edge(pair[0], pair[1]);
        }
    }

    if options.parts.contains(Parts::RIGHT) {
        let corner = EdgePoint {
            at: DVec2::new(1.0, base),
            z: last.z,
        };
        let facing = if last.at.y > base {
            Facing::Left
        } else {
            Facing::Right
        };
        wall.segment(last, corner, facing);
    }

    log::debug!(
        "extruded wall: {} vertices, {} triangles",
        wall.mesh.vertex_count(),
        wall.mesh.triangle_count()
    );

    Ok(wall.mesh)
}

/// Outline point with its depth offset.
#[derive(Debug, Clone, Copy)]
struct EdgePoint {
    at: DVec2,
    z: f64,
}

impl EdgePoint {
    fn lerp(self, other: Self, s: f64) -> Self {
        Self {
            at: self.at.lerp(other.at, s),
            z: self.z + (other.z - self.z) * s,
        }
    }
}

struct Wall {
    mesh: SubMesh,
    depth: f64,
    flip: bool,
    base: f64,
}

impl Wall {
    /// Outline segment, split at the baseline so each half faces away from
    /// its own side of the filled area.
    fn edge(&mut self, a: EdgePoint, b: EdgePoint) {
        let (da, db) = (a.at.y - self.base, b.at.y - self.base);
        if da * db < 0.0 {
            let crossing = a.lerp(b, da / (da - db));
            self.edge(a, crossing);
            self.edge(crossing, b);
            return;
        }
        let facing = if da + db >= 0.0 {
            Facing::Left
        } else {
            Facing::Right
        };
        self.segment(a, b, facing);
    }

    fn segment(&mut self, a: EdgePoint, b: EdgePoint, facing: Facing) {
        if a.at.distance(b.at) < PROFILE_EPSILON {
            return;
        }
        let a = (
            self.mesh.add_point(a.at, a.z),
            self.mesh.add_point(a.at, a.z + self.depth),
        );
        let b = (
            self.mesh.add_point(b.at, b.z),
            self.mesh.add_point(b.at, b.z + self.depth),
        );
        edge_quad(self.mesh.group_mut(0), a, b, facing, self.flip);
    }
}
