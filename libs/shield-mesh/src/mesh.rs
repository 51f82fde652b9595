//! # Mesh Data Structure
//!
//! The combined mesh handed to the rendering sink: one vertex buffer and one
//! or more triangle index groups (one per material or facing group).

use crate::error::MeshError;
use crate::sub_mesh::check_triangles;
use glam::DVec3;
use serde::Serialize;

/// A triangle mesh with shared vertices and grouped indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the sink boundary for GPU upload.
///
/// # Example
///
/// ```rust
/// use shield_mesh::{combine, SubMesh};
/// use glam::DVec3;
///
/// let mut sub = SubMesh::new();
/// sub.add_vertex(DVec3::ZERO);
/// sub.add_vertex(DVec3::Y);
/// sub.add_vertex(DVec3::X);
/// sub.add_triangle(0, 0, 1, 2, false);
///
/// let mesh = combine(vec![sub.clone(), sub], true).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.indices_u32(0), vec![0, 1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle index groups (3 indices per triangle)
    groups: Vec<Vec<[u32; 3]>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh with no groups.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            groups: Vec::new(),
        }
    }

    pub(crate) fn from_parts(vertices: Vec<DVec3>, groups: Vec<Vec<[u32; 3]>>) -> Self {
        Self { vertices, groups }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles over all groups.
    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns the number of index groups.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns all index groups.
    #[inline]
    pub fn groups(&self) -> &[Vec<[u32; 3]>] {
        &self.groups
    }

    /// Returns the triangles of one group.
    #[inline]
    pub fn group(&self, index: usize) -> &[[u32; 3]] {
        &self.groups[index]
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No triangle has (near) zero area
    pub fn validate(&self) -> Result<(), MeshError> {
        check_triangles(&self.vertices, &self.groups)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports the indices of one group as a flat u32 array.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self, group: usize) -> Vec<u32> {
        self.groups[group].iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::from_parts(
            vec![
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
            ],
            vec![vec![[0, 1, 3], [0, 3, 2]]],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.group_count(), 1);
        assert!(!mesh.is_empty());
        assert!(Mesh::new().is_empty());
    }

    #[test]
    fn test_vertices_f32() {
        let flat = quad().vertices_f32();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[3..6], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_indices_u32_is_multiple_of_three() {
        let indices = quad().indices_u32(0);
        assert_eq!(indices, vec![0, 1, 3, 0, 3, 2]);
        assert_eq!(indices.len() % 3, 0);
    }

    #[test]
    fn test_validate() {
        assert!(quad().validate().is_ok());
        let broken = Mesh::from_parts(vec![DVec3::ZERO], vec![vec![[0, 1, 2]]]);
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_serializes_for_sink() {
        let json = serde_json::to_string(&quad()).unwrap();
        assert!(json.contains("\"groups\":[[[0,1,3],[0,3,2]]]"));
    }
}
