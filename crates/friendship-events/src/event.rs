//! Event Types
//!
//! Host lifecycle events consumed by the friendship engine, and the records
//! it produces when a grant lands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clock::{GameDate, GameTime};

/// Lifecycle events raised by the host, strictly serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// A new in-game day began.
    DayStarted { date: GameDate },
    /// The player warped to another location.
    LocationChanged { location: String },
    /// The clock advanced by one 10-minute tick.
    TimeAdvanced { time: GameTime },
}

impl HostEvent {
    pub fn day_started(date: GameDate) -> Self {
        HostEvent::DayStarted { date }
    }

    pub fn location_changed(location: impl Into<String>) -> Self {
        HostEvent::LocationChanged {
            location: location.into(),
        }
    }

    pub fn time_advanced(time: GameTime) -> Self {
        HostEvent::TimeAdvanced { time }
    }
}

/// Relationship tier between the player and a character.
///
/// Transitions only ever move forward and are driven by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipStatus {
    #[default]
    Single,
    Dating,
    Married,
}

impl fmt::Display for FriendshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendshipStatus::Single => write!(f, "single"),
            FriendshipStatus::Dating => write!(f, "dating"),
            FriendshipStatus::Married => write!(f, "married"),
        }
    }
}

/// One applied friendship grant, as written to the grant log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    pub date: GameDate,
    pub time: GameTime,
    /// Character name in host casing
    pub name: String,
    pub points_before: u32,
    pub points_after: u32,
    pub status: FriendshipStatus,
}

impl GrantRecord {
    /// Serializes to a single JSONL line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses from a single JSONL line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}
