//! # Mesh Operations
//!
//! The generation pipeline, leaf first:
//! - **stitch**: connect consecutive cross-sections into a flat strip
//! - **extrude**: shells and side walls with depth
//! - **overlay**: bend the flat result onto a target surface
//! - **assemble**: concatenate sub-meshes into one mesh

pub mod assemble;
pub mod extrude;
pub mod overlay;
pub mod stitch;

pub use assemble::combine;
pub use extrude::{extrude_shell, extrude_wall, ShellOptions, WallOptions};
pub use overlay::Overlay;
pub use stitch::{stitch, StitchOptions};
