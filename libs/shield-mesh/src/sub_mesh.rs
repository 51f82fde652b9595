//! # Sub-Mesh
//!
//! A self-contained patch of vertices and triangle index groups, produced by
//! one generator call and later concatenated by [`crate::ops::assemble::combine`].

use crate::error::MeshError;
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DVec2, DVec3};

/// Builds a triangle from three indices, swapping the last two when `flip`
/// is set so the face points the other way.
#[inline]
pub fn triangle(a: u32, b: u32, c: u32, flip: bool) -> [u32; 3] {
    if flip {
        [a, c, b]
    } else {
        [a, b, c]
    }
}

/// Vertices plus one or more triangle index groups.
///
/// Indices are local to this sub-mesh: they start at zero and are only
/// shifted when the sub-mesh is combined with others.
///
/// # Example
///
/// ```rust
/// use shield_mesh::SubMesh;
/// use glam::DVec3;
///
/// let mut sub = SubMesh::new();
/// let a = sub.add_vertex(DVec3::ZERO);
/// let b = sub.add_vertex(DVec3::Y);
/// let c = sub.add_vertex(DVec3::X);
/// sub.add_triangle(0, a, b, c, false);
/// assert_eq!(sub.triangle_count(), 1);
/// assert!(sub.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubMesh {
    vertices: Vec<DVec3>,
    groups: Vec<Vec<[u32; 3]>>,
}

impl Default for SubMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl SubMesh {
    /// Creates an empty sub-mesh with a single triangle group.
    pub fn new() -> Self {
        Self::with_groups(1)
    }

    /// Creates an empty sub-mesh with `group_count` triangle groups.
    pub fn with_groups(group_count: usize) -> Self {
        Self {
            vertices: Vec::new(),
            groups: vec![Vec::new(); group_count.max(1)],
        }
    }

    /// Creates a sub-mesh from raw buffers.
    pub fn from_parts(vertices: Vec<DVec3>, groups: Vec<Vec<[u32; 3]>>) -> Self {
        Self { vertices, groups }
    }

    /// Consumes the sub-mesh and returns its buffers.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<Vec<[u32; 3]>>) {
        (self.vertices, self.groups)
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

    /// Returns the number of triangle groups.
    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the sub-mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Index the next added vertex will receive.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.next_index();
        self.vertices.push(position);
        index
    }

    /// Adds a 2D point lifted to depth `z` and returns its index.
    pub fn add_point(&mut self, point: DVec2, z: f64) -> u32 {
        self.add_vertex(point.extend(z))
    }

    /// Adds a triangle to `group`, honoring the `flip` winding flag.
    pub fn add_triangle(&mut self, group: usize, a: u32, b: u32, c: u32, flip: bool) {
        self.group_mut(group).push(triangle(a, b, c, flip));
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertices for in-place modification.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [DVec3] {
        &mut self.vertices
    }

    /// Returns all triangle groups.
    #[inline]
    pub fn groups(&self) -> &[Vec<[u32; 3]>] {
        &self.groups
    }

    /// Returns the triangles of one group.
    #[inline]
    pub fn group(&self, index: usize) -> &[[u32; 3]] {
        &self.groups[index]
    }

    /// Returns the triangles of one group for appending.
    #[inline]
    pub fn group_mut(&mut self, index: usize) -> &mut Vec<[u32; 3]> {
        &mut self.groups[index]
    }

    /// Iterates over the triangles of every group.
    pub fn triangles(&self) -> impl Iterator<Item = &[u32; 3]> {
        self.groups.iter().flatten()
    }

    /// Applies `f` to every vertex.
    pub fn modify(&mut self, f: impl Fn(DVec3) -> DVec3) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Translates every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Checks the interchange contract: every index points at an existing
    /// vertex, no triangle repeats an index and no triangle has zero area.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_triangles(&self.vertices, &self.groups)
    }
}

/// Validates index groups against a vertex buffer.
pub(crate) fn check_triangles(
    vertices: &[DVec3],
    groups: &[Vec<[u32; 3]>],
) -> Result<(), MeshError> {
    let vertex_count = vertices.len();
    for (g, group) in groups.iter().enumerate() {
        for (t, tri) in group.iter().enumerate() {
            if let Some(index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "group {g} triangle {t}: index {index} out of range ({vertex_count} vertices)"
                )));
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "group {g} triangle {t}: repeated index {tri:?}"
                )));
            }
            let [a, b, c] = tri.map(|i| vertices[i as usize]);
            let area = 0.5 * (b - a).cross(c - a).length();
            if area < DEGENERATE_AREA_EPSILON {
                return Err(MeshError::validation(format!(
                    "group {g} triangle {t}: degenerate face {tri:?} (area {area:e})"
                )));
            }
        }
    }
    Ok(())
}
