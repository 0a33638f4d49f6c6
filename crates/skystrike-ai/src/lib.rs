//! Enemy AI for SkyStrike.
//!
//! Implements the per-enemy behavior state machine and the per-type
//! attribute table enemies are built from.

pub mod fsm;
pub mod profiles;

pub use skystrike_core as core;

#[cfg(test)]
mod tests;
