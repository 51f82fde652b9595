//! # Extrusion Operations
//!
//! Turns a profile into geometry with depth:
//! - **extrude_shell**: closed shell with front, back and side faces
//! - **extrude_wall**: a wall following the outline edge of a profile
//!
//! Front faces sit at `z = 0`, back faces at `z = depth`. Both generators
//! honor a [`Parts`] mask selecting the left cap, the interior segments and
//! the right cap.

mod shell;
mod wall;


pub use shell::{extrude_shell, ShellOptions, BACK_GROUP, FRONT_GROUP, SIDE_GROUP};
pub use wall::{extrude_wall, WallOptions};

use crate::error::MeshError;
use crate::ops::stitch::push_face;
use crate::sub_mesh::triangle;

/// Side of a directed edge that a generated face looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Facing {
    /// Normal points to the left of the edge direction (seen from `-z`).
    Left,
    /// Normal points to the right of the edge direction.
    Right,
}

/// Emits the quad joining edge `a → b` at `z = 0` with the same edge at
/// `z = depth`. `a` and `b` are `(front, back)` index pairs. Halves that
/// reuse an index collapse to nothing.
pub(crate) fn edge_quad(
    out: &mut Vec<[u32; 3]>,
    a: (u32, u32),
    b: (u32, u32),
    facing: Facing,
    flip: bool,
) {
    let flip = flip ^ (facing == Facing::Right);
    push_face(out, triangle(a.0, a.1, b.0, flip));
    push_face(out, triangle(a.1, b.1, b.0, flip));
}

/// Rejects depths that cannot form a shell.
pub(crate) fn check_depth(depth: f64) -> Result<(), MeshError> {
    if !(depth > 0.0 && depth.is_finite()) {
        return Err(MeshError::invalid_parameter(format!(
            "depth must be positive: {depth}"
        )));
    }
    Ok(())
}
