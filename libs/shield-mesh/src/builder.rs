//! # Shield Builder
//!
//! Collects patch descriptions and turns them into one mesh:
//!
//! ```text
//! patches ──par──> generate ──> overlay ──> translate ──┐
//!                                                       ├─> combine ──> Mesh
//!                       (in patch order) ───────────────┘
//! ```
//!
//! Patches are independent, so generation runs on the rayon pool; results
//! are collected in patch order before combining because vertex offsets
//! depend on it. A patch with bad parameters degrades on its own (empty, or
//! left flat when only its overlay is bad) and leaves a [`Diagnostic`].

use crate::diagnostic::Diagnostic;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::assemble::combine;
use crate::ops::extrude::{extrude_shell, extrude_wall, ShellOptions, WallOptions};
use crate::ops::overlay::Overlay;
use crate::ops::stitch::{stitch, StitchOptions};
use crate::primitives::{round_shield_part, RoundShieldParams};
use crate::profile::{Outline, Profile};
use crate::sub_mesh::SubMesh;
use glam::DVec3;
use rayon::prelude::*;

/// Boxed profile that can be shared across the worker pool.
pub type BoxedProfile = Box<dyn Profile + Send + Sync>;

/// Boxed outline that can be shared across the worker pool.
pub type BoxedOutline = Box<dyn Outline + Send + Sync>;

/// Generator of a patch.
pub enum PatchKind {
    /// Flat stitched strip
    Strip(BoxedProfile, StitchOptions),
    /// Extruded closed shell
    Shell(BoxedProfile, ShellOptions),
    /// Wall along an outline edge
    Wall(BoxedOutline, WallOptions),
    /// Round disc part
    RoundPart(RoundShieldParams),
}

impl std::fmt::Debug for PatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strip(profile, options) => f
                .debug_struct("Strip")
                .field("resolution", &profile.resolution())
                .field("options", options)
                .finish(),
            Self::Shell(profile, options) => f
                .debug_struct("Shell")
                .field("resolution", &profile.resolution())
                .field("options", options)
                .finish(),
            Self::Wall(outline, options) => f
                .debug_struct("Wall")
                .field("resolution", &outline.resolution())
                .field("options", options)
                .finish(),
            Self::RoundPart(params) => f.debug_tuple("RoundPart").field(params).finish(),
        }
    }
}

impl PatchKind {
    fn generate(&self) -> Result<SubMesh, MeshError> {
        match self {
            Self::Strip(profile, options) => stitch(profile.as_ref(), *options),
            Self::Shell(profile, options) => extrude_shell(profile.as_ref(), *options),
            Self::Wall(outline, options) => extrude_wall(outline.as_ref(), *options),
            Self::RoundPart(params) => round_shield_part(*params),
        }
    }
}

/// One piece of a shield: a generator, the overlay applied to its output
/// and a final translation.
#[derive(Debug)]
pub struct Patch {
    pub kind: PatchKind,
    pub overlay: Overlay,
    pub translation: DVec3,
}

impl Patch {
    /// Patch of the given kind with no overlay and no translation.
    pub fn new(kind: PatchKind) -> Self {
        Self {
            kind,
            overlay: Overlay::identity(),
            translation: DVec3::ZERO,
        }
    }

    /// Flat strip stitched from `profile`.
    pub fn strip(profile: impl Profile + Send + Sync + 'static, options: StitchOptions) -> Self {
        Self::new(PatchKind::Strip(Box::new(profile), options))
    }

    /// Shell extruded from `profile`.
    pub fn shell(profile: impl Profile + Send + Sync + 'static, options: ShellOptions) -> Self {
        Self::new(PatchKind::Shell(Box::new(profile), options))
    }

    /// Wall along the edge of `outline`.
    pub fn wall(outline: impl Outline + Send + Sync + 'static, options: WallOptions) -> Self {
        Self::new(PatchKind::Wall(Box::new(outline), options))
    }

    /// Round shield part.
    pub fn round_part(params: RoundShieldParams) -> Self {
        Self::new(PatchKind::RoundPart(params))
    }

    /// Bends the generated vertices with `overlay`.
    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = overlay;
        self
    }

    /// Moves the patch by `translation` after the overlay.
    pub fn translated(mut self, translation: DVec3) -> Self {
        self.translation = translation;
        self
    }

    /// Generates, overlays and translates this patch. Never fails; problems
    /// end up in `diagnostics`: a patch that cannot be generated is left
    /// empty with an error, a bad overlay leaves it flat with a warning.
    fn realize(&self, index: usize, diagnostics: &mut Vec<Diagnostic>) -> SubMesh {
        let mut mesh = match self.kind.generate() {
            Ok(mesh) => mesh,
            Err(err) => {
                diagnostics.push(Diagnostic::error(index, err.to_string()));
                return SubMesh::new();
            }
        };
        if let Err(err) = self.overlay.apply_to(&mut mesh) {
            diagnostics.push(Diagnostic::warning(index, err.to_string()));
        }
        if self.translation != DVec3::ZERO {
            mesh.translate(self.translation);
        }
        mesh
    }
}

/// Result of [`ShieldBuilder::build`].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    pub mesh: Mesh,
    /// Problems of individual patches, ordered by patch
    pub diagnostics: Vec<Diagnostic>,
}

/// Ordered collection of patches.
///
/// # Example
///
/// ```rust
/// use shield_mesh::builder::{Patch, ShieldBuilder};
/// use shield_mesh::ops::extrude::ShellOptions;
/// use shield_mesh::primitives::RoundShieldParams;
/// use shield_mesh::profile::FullBandProfile;
///
/// let mut builder = ShieldBuilder::new();
/// builder
///     .add(Patch::shell(FullBandProfile::new(8), ShellOptions::default()))
///     .add(Patch::round_part(RoundShieldParams::default()));
///
/// let output = builder.build(false).unwrap();
/// assert!(output.diagnostics.is_empty());
/// assert_eq!(output.mesh.group_count(), 6);
/// ```
#[derive(Debug, Default)]
pub struct ShieldBuilder {
    patches: Vec<Patch>,
}

impl ShieldBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a patch; patches are combined in insertion order.
    pub fn add(&mut self, patch: Patch) -> &mut Self {
        self.patches.push(patch);
        self
    }

    /// Number of patches added so far.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Returns true when no patch was added.
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Generates every patch and combines the results.
    ///
    /// # Errors
    ///
    /// Only fails when the combined mesh is too large for `u32` indices;
    /// per-patch problems are reported in [`BuildOutput::diagnostics`].
    pub fn build(&self, single_group: bool) -> Result<BuildOutput, MeshError> {
        let realized: Vec<(SubMesh, Vec<Diagnostic>)> = self
            .patches
            .par_iter()
            .enumerate()
            .map(|(index, patch)| {
                let mut diagnostics = Vec::new();
                let mesh = patch.realize(index, &mut diagnostics);
                (mesh, diagnostics)
            })
            .collect();

        let (sub_meshes, diagnostics): (Vec<SubMesh>, Vec<Vec<Diagnostic>>) =
            realized.into_iter().unzip();
        let diagnostics: Vec<Diagnostic> = diagnostics.into_iter().flatten().collect();

        log::info!(
            "building shield from {} patches ({} diagnostics)",
            sub_meshes.len(),
            diagnostics.len()
        );

        let mesh = combine(sub_meshes, single_group)?;
        Ok(BuildOutput { mesh, diagnostics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::profile::{FullBandProfile, FunctionProfile, PolarProfile};
    use glam::DVec2;

    fn band(resolution: u32) -> Patch {
        Patch::strip(FullBandProfile::new(resolution), StitchOptions::default())
    }

    #[test]
    fn test_build_preserves_patch_order() {
        let mut builder = ShieldBuilder::new();
        builder.add(band(1)).add(band(2)).add(band(3));
        let output = builder.build(false).unwrap();

        assert_eq!(output.mesh.group_count(), 3);
        assert_eq!(output.mesh.vertex_count(), 4 + 6 + 8);
        assert_eq!(output.mesh.group(0).len(), 2);
        assert_eq!(output.mesh.group(1).len(), 4);
        assert_eq!(output.mesh.group(2).len(), 6);
        assert!(output.mesh.validate().is_ok());
    }

    #[test]
    fn test_bad_patch_degrades_alone() {
        let mut builder = ShieldBuilder::new();
        builder
            .add(band(1))
            .add(Patch::round_part(RoundShieldParams {
                radius: 0.0,
                ..Default::default()
            }))
            .add(band(2));
        let output = builder.build(false).unwrap();

        assert_eq!(output.mesh.vertex_count(), 10);
        assert_eq!(output.mesh.group_count(), 3);
        assert!(output.mesh.group(1).is_empty());
        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].patch, 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn test_bad_overlay_leaves_patch_flat() {
        let overlay = Overlay::Cylinder {
            radius: -1.0,
            scale: DVec2::ONE,
            offset: 0.0,
        };
        let mut builder = ShieldBuilder::new();
        builder.add(band(4).with_overlay(overlay));
        let output = builder.build(true).unwrap();

        assert_eq!(output.diagnostics.len(), 1);
        assert_eq!(output.diagnostics[0].severity, Severity::Warning);
        assert_eq!(output.mesh.vertex_count(), 10);
        assert!(output.mesh.vertices().iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn test_overlay_then_translation() {
        let overlay = Overlay::Flat {
            scale: DVec2::new(2.0, 1.0),
            offset: 0.0,
        };
        let mut builder = ShieldBuilder::new();
        builder.add(
            band(1)
                .with_overlay(overlay)
                .translated(DVec3::new(1.0, 0.0, 0.5)),
        );
        let output = builder.build(true).unwrap();

        let xs: Vec<f64> = output.mesh.vertices().iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![1.0, 1.0, 3.0, 3.0]);
        assert!(output.mesh.vertices().iter().all(|v| v.z == 0.5));
    }

    #[test]
    fn test_mixed_generators() {
        let mut builder = ShieldBuilder::new();
        builder
            .add(Patch::shell(
                PolarProfile::new(|_| 0.5, |_| 1.0, 12),
                ShellOptions {
                    flip: true,
                    ..Default::default()
                },
            ))
            .add(Patch::wall(
                FunctionProfile::new(|t| 0.5 + 0.25 * t, 6, false),
                WallOptions::default(),
            ));
        assert_eq!(builder.len(), 2);

        let output = builder.build(true).unwrap();
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.mesh.group_count(), 1);
        assert!(output.mesh.validate().is_ok());
    }

    #[test]
    fn test_empty_builder() {
        let builder = ShieldBuilder::new();
        assert!(builder.is_empty());
        let output = builder.build(true).unwrap();
        assert!(output.mesh.is_empty());
    }
}
