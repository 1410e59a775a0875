//! Villager Movement
//!
//! Villagers with a [`Leash`] take one random step per tick, staying within
//! their leash radius of home.

use bevy_ecs::prelude::*;
use rand::Rng;

use friendship_core::TilePosition;

use crate::components::{Leash, SimRng, Tile, Villager};

/// System: moves every leashed villager one step in a random direction
pub fn wander_villagers(
    mut rng: ResMut<SimRng>,
    mut query: Query<(&mut Tile, &Leash), With<Villager>>,
) {
    for (mut tile, leash) in query.iter_mut() {
        let dx = rng.0.gen_range(-1..=1);
        let dy = rng.0.gen_range(-1..=1);
        let next = TilePosition::new(tile.0.x + dx, tile.0.y + dy);
        if next.chebyshev_distance(&leash.home) <= leash.radius {
            tile.0 = next;
        }
    }
}

/// Builds the per-tick schedule.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(wander_villagers);
    schedule
}
