//! # Mesh Assembly
//!
//! Concatenates independently generated sub-meshes into one [`Mesh`].
//! Vertex buffers are appended in call order and every index is shifted by
//! the number of vertices that precede its sub-mesh.


use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::sub_mesh::SubMesh;
use config::constants::MAX_VERTICES;

/// Combines sub-meshes into a single mesh.
///
/// With `single_group` every triangle lands in one group. Otherwise each
/// group of each sub-mesh becomes its own group, in order, so front, back
/// and side faces stay separable.
///
/// # Errors
///
/// Returns [`MeshError::TooManyVertices`] when the total vertex count does
/// not fit `u32` indices.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shield_mesh::{combine, SubMesh};
///
/// let mut a = SubMesh::new();
/// a.add_vertex(DVec3::ZERO);
/// a.add_vertex(DVec3::X);
/// a.add_vertex(DVec3::Y);
/// a.add_triangle(0, 0, 1, 2, false);
///
/// let mesh = combine(vec![a.clone(), a], true).unwrap();
/// assert_eq!(mesh.group(0), &[[0, 1, 2], [3, 4, 5]]);
/// ```
pub fn combine(sub_meshes: Vec<SubMesh>, single_group: bool) -> Result<Mesh, MeshError> {
    let total: usize = sub_meshes.iter().map(SubMesh::vertex_count).sum();
    if total > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: total,
            max: MAX_VERTICES,
        });
    }

    let mut vertices = Vec::with_capacity(total);
    let mut groups: Vec<Vec<[u32; 3]>> = if single_group {
        vec![Vec::new()]
    } else {
        Vec::new()
    };

    for sub_mesh in sub_meshes {
        // Fits: total <= MAX_VERTICES
        let offset = vertices.len() as u32;
        let (sub_vertices, sub_groups) = sub_mesh.into_parts();
        vertices.extend(sub_vertices);

        for group in sub_groups {
            let shifted = group.into_iter().map(|tri| tri.map(|i| i + offset));
            if single_group {
                groups[0].extend(shifted);
            } else {
                groups.push(shifted.collect());
            }
        }
    }

    log::debug!(
        "combined mesh: {} vertices in {} groups",
        vertices.len(),
        groups.len()
    );

    Ok(Mesh::from_parts(vertices, groups))
}
