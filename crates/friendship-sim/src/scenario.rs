//! Scenario Files
//!
//! Describes the village the reference host simulates: who lives where,
//! where the player starts each day, where the player warps during the day,
//! and which settings the player edits from the in-game menu.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use friendship_core::{fold_name, FriendshipStatus, SettingValue};
use friendship_events::GameTime;

/// Errors raised while loading a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("villager '{0}' is defined twice")]
    DuplicateVillager(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_days")]
    pub days: u32,
    pub player: PlayerSpec,
    #[serde(default)]
    pub villagers: Vec<VillagerSpec>,
    #[serde(default)]
    pub warps: Vec<WarpSpec>,
    #[serde(default)]
    pub setting_changes: Vec<SettingChange>,
}

/// Where the player wakes up every morning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub location: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillagerSpec {
    pub name: String,
    pub location: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub datable: bool,
    /// Listed in the character-definition table
    #[serde(default = "default_true")]
    pub tracked: bool,
    /// Starting relationship points; `None` if the player has not met them
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub status: FriendshipStatus,
    /// How far from home the villager strays each tick; 0 stands still
    #[serde(default)]
    pub wander: u32,
}

/// A warp the player takes every day at `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarpSpec {
    pub time: GameTime,
    pub location: String,
    pub x: i32,
    pub y: i32,
}

/// A settings-menu edit made at the end of `day` (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingChange {
    pub day: u32,
    pub key: String,
    pub value: SettingValue,
}

fn default_seed() -> u64 {
    42
}

fn default_days() -> u32 {
    3
}

fn default_true() -> bool {
    true
}

impl Scenario {
    pub fn from_file(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses and checks a scenario from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.check()?;
        Ok(scenario)
    }

    fn check(&self) -> Result<(), ScenarioError> {
        let mut seen = std::collections::HashSet::new();
        for villager in &self.villagers {
            if !seen.insert(fold_name(&villager.name)) {
                return Err(ScenarioError::DuplicateVillager(villager.name.clone()));
            }
        }
        Ok(())
    }

    /// Warps sorted by time of day.
    pub fn warps_by_time(&self) -> Vec<&WarpSpec> {
        let mut warps: Vec<_> = self.warps.iter().collect();
        warps.sort_by_key(|warp| warp.time);
        warps
    }
}

/// The built-in village used when no scenario file is given.
pub fn default_scenario() -> Scenario {
    let villager = |name: &str, location: &str, x, y, datable, points, status, wander| VillagerSpec {
        name: name.to_string(),
        location: location.to_string(),
        x,
        y,
        datable,
        tracked: true,
        points: Some(points),
        status,
        wander,
    };

    Scenario {
        seed: default_seed(),
        days: default_days(),
        player: PlayerSpec {
            location: "Town".to_string(),
            x: 40,
            y: 60,
        },
        villagers: vec![
            villager("Abigail", "Town", 41, 61, true, 100, FriendshipStatus::Single, 2),
            villager("Lewis", "Town", 38, 60, false, 2745, FriendshipStatus::Single, 1),
            villager("Pierre", "Town", 60, 60, false, 400, FriendshipStatus::Single, 3),
            villager("Emily", "Saloon", 12, 18, true, 2740, FriendshipStatus::Dating, 1),
            villager("Gus", "Saloon", 10, 17, false, 800, FriendshipStatus::Single, 0),
            villager("Harvey", "FarmHouse", 5, 5, true, 3740, FriendshipStatus::Married, 0),
            VillagerSpec {
                name: "Junimo".to_string(),
                location: "Town".to_string(),
                x: 40,
                y: 61,
                datable: false,
                tracked: false,
                points: None,
                status: FriendshipStatus::Single,
                wander: 0,
            },
        ],
        warps: vec![
            WarpSpec {
                time: GameTime::new(1800).unwrap_or_default(),
                location: "Saloon".to_string(),
                x: 11,
                y: 18,
            },
            WarpSpec {
                time: GameTime::new(2200).unwrap_or_default(),
                location: "FarmHouse".to_string(),
                x: 4,
                y: 5,
            },
        ],
        setting_changes: vec![SettingChange {
            day: 1,
            key: "AmountOfFriendshipGainedPerTimeInterval".to_string(),
            value: SettingValue::Int(2),
        }],
    }
}
