//! World Setup
//!
//! Spawns a scenario into a fresh ECS world.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

use friendship_core::{RelationshipRecord, TilePosition};

use crate::components::{
    CharacterDefinitions, Datable, GameClock, InLocation, Leash, Locations, Player, Relationships,
    SimRng, Tile, Villager,
};
use crate::scenario::{PlayerSpec, Scenario};

/// Counts of what [`spawn_scenario`] created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnSummary {
    pub villagers: usize,
    pub tracked: usize,
    pub relationships: usize,
    pub locations: usize,
}

/// Builds a world holding the scenario's player, villagers and resources.
pub fn spawn_scenario(scenario: &Scenario) -> (World, SpawnSummary) {
    let mut world = World::new();
    let mut summary = SpawnSummary::default();

    let mut locations = BTreeSet::new();
    locations.insert(scenario.player.location.clone());
    for warp in &scenario.warps {
        locations.insert(warp.location.clone());
    }

    let mut definitions = CharacterDefinitions::new();
    let mut relationships = Relationships::new();

    world.spawn(player_bundle(&scenario.player));

    for spec in &scenario.villagers {
        let home = TilePosition::new(spec.x, spec.y);
        locations.insert(spec.location.clone());

        let mut villager = world.spawn((
            Villager::new(spec.name.clone()),
            Datable(spec.datable),
            Tile(home),
            InLocation(spec.location.clone()),
        ));
        if spec.wander > 0 {
            villager.insert(Leash {
                home,
                radius: spec.wander,
            });
        }
        summary.villagers += 1;

        if spec.tracked {
            definitions.register(spec.name.clone());
            summary.tracked += 1;
        }
        if let Some(points) = spec.points {
            relationships.insert(spec.name.clone(), RelationshipRecord::new(points, spec.status));
            summary.relationships += 1;
        }
    }

    summary.locations = locations.len();
    world.insert_resource(Locations(locations));
    world.insert_resource(definitions);
    world.insert_resource(relationships);
    world.insert_resource(GameClock::default());
    world.insert_resource(SimRng(SmallRng::seed_from_u64(scenario.seed)));

    (world, summary)
}

fn player_bundle(spec: &PlayerSpec) -> (Player, Tile, InLocation) {
    (
        Player,
        Tile(TilePosition::new(spec.x, spec.y)),
        InLocation(spec.location.clone()),
    )
}

/// Puts the player back at the scenario's morning spot.
pub fn wake_player(world: &mut World, spec: &PlayerSpec) {
    move_player(world, &spec.location, TilePosition::new(spec.x, spec.y));
}

/// Moves the player to `position` in `location`.
pub fn move_player(world: &mut World, location: &str, position: TilePosition) {
    let mut query = world.query_filtered::<(&mut Tile, &mut InLocation), With<Player>>();
    for (mut tile, mut in_location) in query.iter_mut(world) {
        tile.0 = position;
        in_location.0 = location.to_string();
    }
}
