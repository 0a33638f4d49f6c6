//! Simulation engine for SkyStrike.
//!
//! Owns the hecs ECS world, runs the per-frame systems on a variable
//! time step, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod guidance;
pub mod mission;
pub mod player;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skystrike_core as core;
