//! Escort movement: the friendly aircraft flies straight at its destination.

use skystrike_core::components::FriendlyAircraft;
use skystrike_core::constants::ESCORT_ARRIVAL_RADIUS;

/// Advance the escort one frame. Marks it arrived inside the arrival radius.
pub fn run(escort: &mut FriendlyAircraft, dt: f64) {
    if escort.arrived || !escort.health.alive() {
        return;
    }

    let to_go = escort.destination - escort.position;
    let step = escort.speed * dt;
    if to_go.length() <= step {
        escort.position = escort.destination;
    } else {
        escort.position += to_go.normalize_or_zero() * step;
    }

    if escort.position.distance(escort.destination) <= ESCORT_ARRIVAL_RADIUS {
        escort.arrived = true;
        log::info!("escort reached its destination");
    }
}
