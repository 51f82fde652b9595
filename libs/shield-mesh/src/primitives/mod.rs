//! # Primitives
//!
//! Closed-form shield parts that do not come from a profile.

pub mod round_shield;

pub use round_shield::{round_shield_part, RoundShieldParams};

#[cfg(test)]
mod tests;
