//! Scenery clouds drift along +x and wrap around the world edge.

use hecs::World;

use skystrike_core::components::{Cloud, Position};
use skystrike_core::constants::WORLD_HALF_EXTENT;

use crate::systems::movement;

pub fn run(world: &mut World, dt: f64) {
    movement::run::<Cloud>(world, dt);

    for (_entity, (_cloud, pos)) in world.query_mut::<(&Cloud, &mut Position)>() {
        if pos.0.x > WORLD_HALF_EXTENT {
            pos.0.x -= 2.0 * WORLD_HALF_EXTENT;
        }
    }
}
