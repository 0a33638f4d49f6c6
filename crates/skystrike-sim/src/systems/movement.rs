//! Kinematic integration: position += velocity * dt.

use hecs::{Component, World};

use skystrike_core::components::{Position, Velocity};

/// Integrate every entity carrying marker component `C`.
pub fn run<C: Component>(world: &mut World, dt: f64) {
    for (_entity, (pos, vel, _marker)) in world.query_mut::<(&mut Position, &Velocity, &C)>() {
        pos.0 += vel.0 * dt;
    }
}
