//! In-memory host for testing.
//!
//! Enable the `test-fixtures` feature to use [`FixtureWorld`] from other crates.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // friendship-core = { path = "../friendship-core", features = ["test-fixtures"] }
//!
//! use friendship_core::fixtures::FixtureWorld;
//! use friendship_core::{FriendshipStatus, TilePosition};
//!
//! let world = FixtureWorld::new("Town", TilePosition::new(10, 10))
//!     .with_character("Town", "Abigail", TilePosition::new(11, 11), true)
//!     .with_relationship("Abigail", 100, FriendshipStatus::Single);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::world::{
    FriendshipStatus, RelationshipLedger, RelationshipRecord, TilePosition, TrackedCharacter,
    WorldSnapshotProvider,
};

/// A scripted host world with mutable state between ticks.
#[derive(Debug, Clone, Default)]
pub struct FixtureWorld {
    ready: bool,
    location: Option<String>,
    player: TilePosition,
    rosters: HashMap<String, Vec<TrackedCharacter>>,
    definitions: HashSet<String>,
    relationships: BTreeMap<String, RelationshipRecord>,
    rejected: HashSet<String>,
    dangling: BTreeSet<String>,
}

impl FixtureWorld {
    /// Creates a ready world with the player standing in `location`.
    pub fn new(location: impl Into<String>, player: TilePosition) -> Self {
        let location = location.into();
        let mut rosters = HashMap::new();
        rosters.insert(location.clone(), Vec::new());
        Self {
            ready: true,
            location: Some(location),
            player,
            rosters,
            ..Self::default()
        }
    }

    /// Places a character that is listed in the character-definition table.
    pub fn with_character(
        mut self,
        location: &str,
        name: &str,
        position: TilePosition,
        datable: bool,
    ) -> Self {
        self.definitions.insert(name.to_string());
        self.place(location, TrackedCharacter::new(name, position, datable));
        self
    }

    /// Places a character the host does not track (a pet, a monster...).
    pub fn with_untracked_character(mut self, location: &str, name: &str, position: TilePosition) -> Self {
        self.place(location, TrackedCharacter::new(name, position, false));
        self
    }

    pub fn with_relationship(mut self, name: &str, points: u32, status: FriendshipStatus) -> Self {
        self.relationships
            .insert(name.to_string(), RelationshipRecord::new(points, status));
        self
    }

    /// Makes the host refuse point updates for `name`.
    pub fn rejecting_updates_for(mut self, name: &str) -> Self {
        self.rejected.insert(name.to_string());
        self
    }

    fn place(&mut self, location: &str, character: TrackedCharacter) {
        self.rosters
            .entry(location.to_string())
            .or_default()
            .push(character);
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.location = location.map(str::to_string);
    }

    pub fn set_player_position(&mut self, position: TilePosition) {
        self.player = position;
    }

    /// Moves every character called `name`, in any location.
    pub fn move_character(&mut self, name: &str, position: TilePosition) {
        for character in self.rosters.values_mut().flatten() {
            if character.name == name {
                character.position = position;
            }
        }
    }

    /// Drops a location's roster so the host can no longer resolve it.
    pub fn remove_location(&mut self, location: &str) {
        self.rosters.remove(location);
    }

    /// Sets a relationship status, as the host would after a proposal or wedding.
    pub fn set_status(&mut self, name: &str, status: FriendshipStatus) {
        if let Some(record) = self.relationships.get_mut(name) {
            record.status = status;
        }
    }

    pub fn set_points(&mut self, name: &str, points: u32) {
        if let Some(record) = self.relationships.get_mut(name) {
            record.points = points;
        }
    }

    /// Adds a name to the player's relationship list without a record behind it.
    pub fn with_dangling_relationship(mut self, name: &str) -> Self {
        self.dangling.insert(name.to_string());
        self
    }

    pub fn points(&self, name: &str) -> Option<u32> {
        self.relationships.get(name).map(|r| r.points)
    }
}

impl WorldSnapshotProvider for FixtureWorld {
    fn is_world_ready(&self) -> bool {
        self.ready
    }

    fn current_location(&self) -> Option<String> {
        self.location.clone()
    }

    fn player_position(&self) -> TilePosition {
        self.player
    }

    fn roster(&self, location: &str) -> Option<Vec<TrackedCharacter>> {
        self.rosters.get(location).cloned()
    }

    fn is_trackable(&self, name: &str) -> bool {
        self.definitions.contains(name)
    }
}

impl RelationshipLedger for FixtureWorld {
    fn relationship_names(&self) -> Vec<String> {
        self.relationships
            .keys()
            .chain(self.dangling.iter())
            .cloned()
            .collect()
    }

    fn relationship(&self, name: &str) -> Option<RelationshipRecord> {
        self.relationships.get(name).copied()
    }

    fn add_points(&mut self, name: &str, amount: u32) -> Result<u32, String> {
        if self.rejected.contains(name) {
            return Err(format!("{} is locked", name));
        }
        let record = self
            .relationships
            .get_mut(name)
            .ok_or_else(|| format!("no relationship with {}", name))?;
        record.points += amount;
        Ok(record.points)
    }
}
