//! ECS Host Adapter
//!
//! Exposes an ECS world to the friendship engine through the
//! [`WorldSnapshotProvider`] and [`RelationshipLedger`] traits.

use bevy_ecs::prelude::*;
use bevy_ecs::world::EntityRef;

use friendship_core::{
    RelationshipLedger, RelationshipRecord, TilePosition, TrackedCharacter, WorldSnapshotProvider,
};

use crate::components::{
    CharacterDefinitions, Datable, InLocation, Locations, Player, Relationships, Tile, Villager,
};

/// Borrows a world for the duration of one event dispatch.
pub struct EcsHost<'w> {
    world: &'w mut World,
}

impl<'w> EcsHost<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    fn player(&self) -> Option<EntityRef<'_>> {
        self.world
            .iter_entities()
            .find(|entity| entity.contains::<Player>())
    }
}

impl WorldSnapshotProvider for EcsHost<'_> {
    fn is_world_ready(&self) -> bool {
        self.world.contains_resource::<Relationships>() && self.player().is_some()
    }

    fn current_location(&self) -> Option<String> {
        self.player()
            .and_then(|player| player.get::<InLocation>().map(|location| location.0.clone()))
    }

    fn player_position(&self) -> TilePosition {
        self.player()
            .and_then(|player| player.get::<Tile>().map(|tile| tile.0))
            .unwrap_or_default()
    }

    fn roster(&self, location: &str) -> Option<Vec<TrackedCharacter>> {
        let locations = self.world.get_resource::<Locations>()?;
        if !locations.contains(location) {
            return None;
        }

        let roster = self
            .world
            .iter_entities()
            .filter(|entity| {
                entity
                    .get::<InLocation>()
                    .is_some_and(|in_location| in_location.0 == location)
            })
            .filter_map(|entity| {
                let villager = entity.get::<Villager>()?;
                let tile = entity.get::<Tile>()?;
                let datable = entity.get::<Datable>().is_some_and(|d| d.0);
                Some(TrackedCharacter::new(villager.name.clone(), tile.0, datable))
            })
            .collect();
        Some(roster)
    }

    fn is_trackable(&self, name: &str) -> bool {
        self.world
            .get_resource::<CharacterDefinitions>()
            .is_some_and(|definitions| definitions.contains(name))
    }
}

impl RelationshipLedger for EcsHost<'_> {
    fn relationship_names(&self) -> Vec<String> {
        self.world
            .get_resource::<Relationships>()
            .map(|relationships| relationships.names().cloned().collect())
            .unwrap_or_default()
    }

    fn relationship(&self, name: &str) -> Option<RelationshipRecord> {
        self.world
            .get_resource::<Relationships>()?
            .get(name)
            .copied()
    }

    fn add_points(&mut self, name: &str, amount: u32) -> Result<u32, String> {
        let mut relationships = self
            .world
            .get_resource_mut::<Relationships>()
            .ok_or_else(|| "relationship table not loaded".to_string())?;
        let record = relationships
            .get_mut(name)
            .ok_or_else(|| format!("no relationship record for {}", name))?;
        record.points = record
            .points
            .checked_add(amount)
            .ok_or_else(|| format!("{} points would overflow", name))?;
        Ok(record.points)
    }
}
