//! Shared helpers for unit tests.

use crate::profile::{CrossSection, Profile};
use glam::{DVec2, DVec3};

/// Signed area of a triangle projected onto the xy-plane.
///
/// Negative for clockwise winding, i.e. a right-hand normal towards `-z`.
pub fn signed_area_xy(vertices: &[DVec3], tri: &[u32; 3]) -> f64 {
    let a = vertices[tri[0] as usize].truncate();
    let b = vertices[tri[1] as usize].truncate();
    let c = vertices[tri[2] as usize].truncate();
    (b - a).perp_dot(c - a) * 0.5
}

/// Right-hand normal (not normalized) of a triangle.
pub fn normal(vertices: &[DVec3], tri: &[u32; 3]) -> DVec3 {
    let a = vertices[tri[0] as usize];
    let b = vertices[tri[1] as usize];
    let c = vertices[tri[2] as usize];
    (b - a).cross(c - a)
}

/// A profile that replays a fixed list of cross-sections.
pub struct Scripted(pub Vec<CrossSection<DVec2>>);

impl Scripted {
    /// Builds a strip where sample `i` sits at `x = i` with the given point
    /// count: 0 = empty, 1 = pinch at `y = 0`, 2 = span `0..1`.
    pub fn counts(counts: &[usize]) -> Self {
        Self(
            counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    let x = i as f64;
                    match count {
                        0 => CrossSection::Empty,
                        1 => CrossSection::One(DVec2::new(x, 0.0)),
                        _ => CrossSection::Two(DVec2::new(x, 0.0), DVec2::new(x, 1.0)),
                    }
                })
                .collect(),
        )
    }
}

impl Profile for Scripted {
    fn resolution(&self) -> u32 {
        self.0.len().saturating_sub(1) as u32
    }

    fn evaluate(&self, t: f64) -> CrossSection<DVec2> {
        let index = (t * self.resolution() as f64).round() as usize;
        self.0[index]
    }
}

/// True when every directed edge is matched by its reverse, i.e. the
/// triangles close up and agree on orientation.
pub fn edges_balanced<'a>(triangles: impl IntoIterator<Item = &'a [u32; 3]>) -> bool {
    let mut balance: std::collections::HashMap<(u32, u32), i32> = Default::default();
    for tri in triangles {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if a < b {
                *balance.entry((a, b)).or_default() += 1;
            } else {
                *balance.entry((b, a)).or_default() -= 1;
            }
        }
    }
    balance.values().all(|&count| count == 0)
}

/// Centroid of a triangle.
pub fn centroid(vertices: &[DVec3], tri: &[u32; 3]) -> DVec3 {
    tri.iter().map(|&i| vertices[i as usize]).sum::<DVec3>() / 3.0
}
