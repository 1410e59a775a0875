//! ECS Components and Resources
//!
//! The reference host's world: a player, villagers standing on tiles in
//! named locations, and the player's relationship records.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use friendship_core::{RelationshipRecord, TilePosition};
use friendship_events::{GameDate, GameTime};

/// Marker: the player character
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Component: a villager's display name, in host casing
#[derive(Component, Debug, Clone)]
pub struct Villager {
    pub name: String,
}

impl Villager {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Component: whether a villager can be dated
#[derive(Component, Debug, Clone, Copy)]
pub struct Datable(pub bool);

/// Component: tile the entity stands on
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile(pub TilePosition);

/// Component: name of the location the entity is in
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct InLocation(pub String);

/// Component: villagers with a leash wander around their home tile
#[derive(Component, Debug, Clone, Copy)]
pub struct Leash {
    pub home: TilePosition,
    pub radius: u32,
}

/// Resource: seeded random number generator
#[derive(Resource)]
pub struct SimRng(pub SmallRng);

/// Resource: current date and time of day
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GameClock {
    pub date: GameDate,
    pub time: GameTime,
}

/// Resource: the character-definition table (names that can hold a relationship)
#[derive(Resource, Debug, Clone, Default)]
pub struct CharacterDefinitions {
    names: HashSet<String>,
}

impl CharacterDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

/// Resource: every location that exists in the village
#[derive(Resource, Debug, Clone, Default)]
pub struct Locations(pub BTreeSet<String>);

impl Locations {
    pub fn contains(&self, location: &str) -> bool {
        self.0.contains(location)
    }
}

/// Resource: the player's relationship records, keyed by host name
#[derive(Resource, Debug, Clone, Default)]
pub struct Relationships {
    records: BTreeMap<String, RelationshipRecord>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, record: RelationshipRecord) {
        self.records.insert(name.into(), record);
    }

    pub fn get(&self, name: &str) -> Option<&RelationshipRecord> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut RelationshipRecord> {
        self.records.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RelationshipRecord)> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendship_core::FriendshipStatus;

    #[test]
    fn test_relationships_are_ordered() {
        let mut relationships = Relationships::new();
        relationships.insert("Sam", RelationshipRecord::new(0, FriendshipStatus::Single));
        relationships.insert("Abigail", RelationshipRecord::new(5, FriendshipStatus::Dating));

        let names: Vec<_> = relationships.names().cloned().collect();
        assert_eq!(names, vec!["Abigail", "Sam"]);
        assert_eq!(relationships.get("Abigail").unwrap().points, 5);
    }

    #[test]
    fn test_character_definitions() {
        let mut definitions = CharacterDefinitions::new();
        definitions.register("Lewis");
        assert!(definitions.contains("Lewis"));
        assert!(!definitions.contains("lewis"));
    }
}
