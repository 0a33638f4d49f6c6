//! SkyStrike application driver.
//!
//! Wires the simulation engine into a real-time loop thread, loads the
//! runtime configuration, and ships a scripted pilot for headless demos.

pub mod config;
pub mod demo;
pub mod game_loop;
pub mod state;

pub use skystrike_core as core;
