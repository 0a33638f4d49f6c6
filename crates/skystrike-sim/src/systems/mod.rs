//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only work). They do not own state: entity state lives in
//! components, session state in the engine.

pub mod cleanup;
pub mod clouds;
pub mod collision;
pub mod enemy_ai;
pub mod escort;
pub mod explosions;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
