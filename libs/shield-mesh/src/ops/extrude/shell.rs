//! # Shell Extrusion
//!
//! Doubles every cross-section point into a front point at `z = 0` and a
//! back point at `z = depth`, then runs the stitching table on both layers
//! and closes the exposed boundary edges with side quads.

use super::{check_depth, edge_quad, Facing};
use crate::error::MeshError;
use crate::ops::stitch::{stitch_pair, Column, ColumnWriter};
use crate::parts::Parts;
use crate::profile::{check_profile, sample, Profile};
use crate::sub_mesh::SubMesh;
use config::constants::DEFAULT_DEPTH;

/// Index group holding the faces at `z = 0`.
pub const FRONT_GROUP: usize = 0;
/// Index group holding the faces at `z = depth`.
pub const BACK_GROUP: usize = 1;
/// Index group holding side quads and caps.
pub const SIDE_GROUP: usize = 2;

/// Parameters for shell extrusion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellOptions {
    /// Distance between front and back faces
    pub depth: f64,
    /// Zones to emit
    pub parts: Parts,
    /// Turn the shell inside out
    pub flip: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            parts: Parts::ALL,
            flip: false,
        }
    }
}

/// Indices of one cross-section on both layers.
#[derive(Debug, Clone)]
struct Layers {
    front: Column,
    back: Column,
}

impl Layers {
    fn lower(&self) -> Option<(u32, u32)> {
        Some((*self.front.first()?, *self.back.first()?))
    }

    fn top(&self) -> Option<(u32, u32)> {
        Some((*self.front.last()?, *self.back.last()?))
    }

    /// Neighbouring `(front, back)` pairs along the column, lower first.
    fn edges(&self) -> impl Iterator<Item = ((u32, u32), (u32, u32))> + '_ {
        self.front
            .windows(2)
            .zip(self.back.windows(2))
            .map(|(f, b)| ((f[0], b[0]), (f[1], b[1])))
    }
}

/// Extrudes a profile into a shell of the given depth.
///
/// Each cross-section contributes its front points followed by its back
/// points. The result has three groups: [`FRONT_GROUP`], [`BACK_GROUP`] and
/// [`SIDE_GROUP`]. With `flip = false` an open strip produces an outward
/// facing shell; rings traversed counter-clockwise come out inside-out and
/// need `flip = true`.
///
/// Caps are only emitted where the first or last cross-section spans two
/// points; a profile that starts or ends in a pinch is already closed there.
///
/// # Errors
///
/// Returns [`MeshError::InvalidParameter`] for a non-positive depth or a
/// resolution that yields no cells.
///
/// # Example
///
/// ```rust
/// use shield_mesh::ops::extrude::{extrude_shell, ShellOptions};
/// use shield_mesh::profile::FullBandProfile;
///
/// let shell = extrude_shell(&FullBandProfile::new(1), ShellOptions::default()).unwrap();
/// // A box: 8 corners, 12 triangles
/// assert_eq!(shell.vertex_count(), 8);
/// assert_eq!(shell.triangle_count(), 12);
/// ```
pub fn extrude_shell<P: Profile + ?Sized>(
    profile: &P,
    options: ShellOptions,
) -> Result<SubMesh, MeshError> {
    check_depth(options.depth)?;
    check_profile(profile)?;
    let closed = profile.is_closed();

    let ShellOptions { depth, parts, flip } = options;
    let mut mesh = SubMesh::with_groups(3);
    let mut front = ColumnWriter::new(profile, 0.0);
    let mut back = ColumnWriter::new(profile, depth);

    let mut first: Option<Layers> = None;
    let mut previous: Option<Layers> = None;
    for sample in sample(profile) {
        let current = Layers {
            front: front.push(&mut mesh, &sample),
            back: back.push(&mut mesh, &sample),
        };
        match &previous {
            Some(previous) => {
                if parts.contains(Parts::MIDDLE) {
                    stitch_layers(&mut mesh, previous, &current, flip);
                }
            }
            None => {
                if !closed && parts.contains(Parts::LEFT) {
                    cap(&mut mesh, &current, Facing::Left, flip);
                }
            }
        }
        if first.is_none() {
            first = Some(current.clone());
        }
        previous = Some(current);
    }

    if let (Some(last), Some(first)) = (&previous, &first) {
        if closed {
            if parts.contains(Parts::MIDDLE) {
                stitch_layers(&mut mesh, last, first, flip);
            }
        } else if parts.contains(Parts::RIGHT) {
            cap(&mut mesh, last, Facing::Right, flip);
        }
    }

    log::debug!(
        "extruded shell: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

/// Front fan/quad, mirrored back fan/quad and the side quads along the
/// lower and upper boundary edges.
fn stitch_layers(mesh: &mut SubMesh, old: &Layers, new: &Layers, flip: bool) {
    stitch_pair(&old.front, &new.front, flip, mesh.group_mut(FRONT_GROUP));
    stitch_pair(&old.back, &new.back, !flip, mesh.group_mut(BACK_GROUP));

    // Same condition under which the table emits a face
    let counts = (old.front.len(), new.front.len());
    if matches!(counts, (0, _) | (_, 0) | (1, 1)) {
        return;
    }

    let sides = mesh.group_mut(SIDE_GROUP);
    if let (Some(a), Some(b)) = (old.lower(), new.lower()) {
        edge_quad(sides, a, b, Facing::Right, flip);
    }
    if let (Some(a), Some(b)) = (old.top(), new.top()) {
        edge_quad(sides, a, b, Facing::Left, flip);
    }
}

/// Closes the edges between the points of an end section.
fn cap(mesh: &mut SubMesh, layers: &Layers, facing: Facing, flip: bool) {
    let sides = mesh.group_mut(SIDE_GROUP);
    for (lower, upper) in layers.edges() {
        edge_quad(sides, lower, upper, facing, flip);
    }
}
