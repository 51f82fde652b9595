//! # Parts Mask
//!
//! Selects which zones of a stitched strip are emitted: the left cap at the
//! first sample, the interior segments and the right cap at the last sample.

use bitflags::bitflags;

bitflags! {
    /// Zones of a strip to emit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Parts: u8 {
        /// Cap after the last sample
        const RIGHT = 0x1;
        /// Segments between samples
        const MIDDLE = 0x2;
        /// Cap before the first sample
        const LEFT = 0x4;
        /// Both caps, no interior
        const LEFT_RIGHT = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Everything
        const ALL = Self::LEFT.bits() | Self::MIDDLE.bits() | Self::RIGHT.bits();
    }
}

impl Default for Parts {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(Parts::default(), Parts::ALL);
        assert!(Parts::ALL.contains(Parts::LEFT | Parts::MIDDLE | Parts::RIGHT));
    }

    #[test]
    fn test_left_right_excludes_middle() {
        assert!(!Parts::LEFT_RIGHT.contains(Parts::MIDDLE));
        assert!(Parts::LEFT_RIGHT.contains(Parts::LEFT));
        assert!(Parts::LEFT_RIGHT.contains(Parts::RIGHT));
    }
}
