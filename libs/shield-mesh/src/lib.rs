//! # Shield Mesh
//!
//! Procedural triangle meshes for shield-shaped props, built from 1-D
//! profiles.
//!
//! ## Architecture
//!
//! ```text
//! Profile ─> stitch / extrude ─> Overlay ─> combine ─> Mesh
//! ```
//!
//! - **Profiles** map `t ∈ [0, 1]` to cross-sections of zero, one or two
//!   points.
//! - **Stitching** connects consecutive cross-sections with triangles chosen
//!   only by how many points each side has.
//! - **Extrusion** doubles the points into a front and back layer (shells)
//!   or runs a flat-shaded wall along the outline.
//! - **Overlays** bend the flat parameter space onto planes, cylinders,
//!   spheres and bevels.
//! - **Assembly** concatenates sub-meshes with exact index offsets.
//!
//! [`builder::ShieldBuilder`] ties the stages together and generates
//! independent patches in parallel.
//!
//! ## Usage
//!
//! ```rust
//! use shield_mesh::ops::{stitch, StitchOptions};
//! use shield_mesh::profile::FullBandProfile;
//!
//! let strip = stitch(&FullBandProfile::new(4), StitchOptions::default()).unwrap();
//! assert_eq!(strip.vertex_count(), 10);
//! assert_eq!(strip.triangle_count(), 8);
//! ```

pub mod builder;
pub mod diagnostic;
pub mod error;
pub mod mesh;
pub mod ops;
pub mod parts;
pub mod primitives;
pub mod profile;
pub mod sub_mesh;

#[cfg(test)]
mod test_utils;

pub use builder::{BuildOutput, Patch, PatchKind, ShieldBuilder};
pub use diagnostic::{Diagnostic, Severity};
pub use error::MeshError;
pub use mesh::Mesh;
pub use ops::{combine, Overlay};
pub use parts::Parts;
pub use profile::{CrossSection, Outline, Profile};
pub use sub_mesh::SubMesh;
