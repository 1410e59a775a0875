//! Host-facing world model.
//!
//! The engine never owns world data. It reads positions, rosters and
//! relationship records through [`WorldSnapshotProvider`] and
//! [`RelationshipLedger`], and its only write is [`RelationshipLedger::add_points`].

use serde::{Deserialize, Serialize};

pub use friendship_events::FriendshipStatus;

/// Heart-tier thresholds, in relationship points.
pub mod hearts {
    /// Points shown as one heart in the host UI.
    pub const POINTS_PER_HEART: u32 = 250;
    /// Highest total that still earns a grant while single (about 9 hearts).
    pub const SINGLE_CAP: u32 = 2249;
    /// Highest total that still earns a grant while dating, or for any
    /// non-datable character (about 11 hearts).
    pub const DATING_CAP: u32 = 2749;
    /// Highest total that still earns a grant while married (about 15 hearts).
    pub const MARRIED_CAP: u32 = 3749;
}

/// Case-folds a character name. Windows and ledger lookups compare names
/// only through this.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// A tile coordinate in the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePosition {
    pub x: i32,
    pub y: i32,
}

impl TilePosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: the larger of the two axis offsets.
    pub fn chebyshev_distance(&self, other: &TilePosition) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        u32::try_from(dx.max(dy)).unwrap_or(u32::MAX)
    }
}

/// A character standing in a location, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedCharacter {
    pub name: String,
    pub position: TilePosition,
    pub datable: bool,
}

impl TrackedCharacter {
    pub fn new(name: impl Into<String>, position: TilePosition, datable: bool) -> Self {
        Self {
            name: name.into(),
            position,
            datable,
        }
    }

    /// Case-insensitive identity used as the window key.
    pub fn key(&self) -> String {
        fold_name(&self.name)
    }
}

/// The player's standing with one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub points: u32,
    pub status: FriendshipStatus,
}

impl RelationshipRecord {
    pub fn new(points: u32, status: FriendshipStatus) -> Self {
        Self { points, status }
    }

    /// Whole hearts shown by the host UI.
    pub fn hearts(&self) -> u32 {
        self.points / hearts::POINTS_PER_HEART
    }

    /// Total below which passive accrual still grants points.
    ///
    /// Non-datable characters have no married tier and stop at the dating cap
    /// regardless of status.
    pub fn accrual_cap(&self, datable: bool) -> u32 {
        if !datable {
            return hearts::DATING_CAP;
        }
        match self.status {
            FriendshipStatus::Single => hearts::SINGLE_CAP,
            FriendshipStatus::Dating => hearts::DATING_CAP,
            FriendshipStatus::Married => hearts::MARRIED_CAP,
        }
    }

    pub fn below_cap(&self, datable: bool) -> bool {
        self.points < self.accrual_cap(datable)
    }
}

/// Read-only view of the host world the sampler needs each tick.
pub trait WorldSnapshotProvider {
    /// Whether a save is loaded and the world can be queried.
    fn is_world_ready(&self) -> bool {
        true
    }

    /// Name of the location the player is in, if known.
    fn current_location(&self) -> Option<String>;

    fn player_position(&self) -> TilePosition;

    /// Characters currently in `location`, or `None` if the host cannot
    /// resolve it (for example mid-warp).
    fn roster(&self, location: &str) -> Option<Vec<TrackedCharacter>>;

    /// Whether `name` appears in the host's character-definition table.
    fn is_trackable(&self, name: &str) -> bool;
}

/// The player's relationship records, owned by the host.
pub trait RelationshipLedger {
    /// Names of every character the player has a relationship with, in host casing.
    fn relationship_names(&self) -> Vec<String>;

    fn relationship(&self, name: &str) -> Option<RelationshipRecord>;

    /// Adds `amount` points and returns the new total.
    fn add_points(&mut self, name: &str, amount: u32) -> Result<u32, String>;
}
