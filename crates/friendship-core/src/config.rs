//! Configuration loading and validation.
//!
//! Settings are persisted as a flat key/value file. `.json` files use the
//! host's `config.json` layout; anything else is read as TOML. Out-of-range
//! values never fail a load: [`ModConfig::validate`] clamps them and reports
//! one [`FriendshipError::ConfigValidation`] per clamped field.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, FriendshipError};

/// Default side length from the player to the edge of the detection square.
pub const DEFAULT_RADIUS: i64 = 2;
/// Default number of 10-minute ticks per interval.
pub const DEFAULT_INTERVAL_LENGTH: i64 = 1;
/// Default points granted per qualifying interval.
pub const DEFAULT_POINTS_PER_INTERVAL: i64 = 1;
/// Interval lengths above this would span more than a whole in-game evening.
pub const MAX_INTERVAL_LENGTH: i64 = 26;

/// Persisted settings, exactly as the player edits them.
///
/// Integers are wide and signed so that negative or oversized values written
/// by hand are clamped by [`ModConfig::validate`] instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModConfig {
    pub friendship_radius: i64,
    pub notify_about_friendship_in_console: bool,
    pub time_interval_length_in_ten_minute_increments: i64,
    pub amount_of_friendship_gained_per_time_interval: i64,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            friendship_radius: DEFAULT_RADIUS,
            notify_about_friendship_in_console: false,
            time_interval_length_in_ten_minute_increments: DEFAULT_INTERVAL_LENGTH,
            amount_of_friendship_gained_per_time_interval: DEFAULT_POINTS_PER_INTERVAL,
        }
    }
}

impl ModConfig {
    /// Loads configuration from a file, choosing the format by extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        if is_json(path) {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Loads configuration from a file, writing the defaults first if it
    /// does not exist yet.
    pub fn read_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Self::default();
            if is_json(path) {
                config.write_file(path)?;
            } else {
                std::fs::write(path, default_config_toml())?;
            }
            tracing::info!("Created default config at {}", path.display());
            return Ok(config);
        }
        Self::from_file(path)
    }

    /// Writes configuration to a file, choosing the format by extension.
    pub fn write_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            self.to_toml()?
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Clamps every field into its valid range.
    ///
    /// Returns the engine-facing config and one diagnostic per clamped field.
    pub fn validate(&self) -> (FriendshipConfig, Vec<FriendshipError>) {
        let mut issues = Vec::new();

        let raw_radius = self.friendship_radius;
        let radius = if raw_radius < 0 {
            DEFAULT_RADIUS
        } else {
            raw_radius.min(MAX_U32)
        };
        if radius != raw_radius {
            issues.push(clamped("FriendshipRadius", raw_radius, radius));
        }

        let raw_interval = self.time_interval_length_in_ten_minute_increments;
        let interval_length = raw_interval.clamp(1, MAX_INTERVAL_LENGTH);
        if interval_length != raw_interval {
            issues.push(clamped(
                "TimeIntervalLengthInTenMinuteIncrements",
                raw_interval,
                interval_length,
            ));
        }

        let raw_points = self.amount_of_friendship_gained_per_time_interval;
        let points_per_interval = raw_points.clamp(1, MAX_U32);
        if points_per_interval != raw_points {
            issues.push(clamped(
                "AmountOfFriendshipGainedPerTimeInterval",
                raw_points,
                points_per_interval,
            ));
        }

        let config = FriendshipConfig {
            radius: to_u32(radius),
            interval_length: to_u32(interval_length),
            points_per_interval: to_u32(points_per_interval),
            notify: self.notify_about_friendship_in_console,
        };
        (config, issues)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

const MAX_U32: i64 = u32::MAX as i64;

/// Callers clamp into `0..=MAX_U32` first.
fn to_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn clamped(key: &'static str, value: i64, clamped_to: i64) -> FriendshipError {
    FriendshipError::ConfigValidation {
        key,
        value,
        clamped_to,
    }
}

/// Validated settings the engine runs with. Only built by [`ModConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendshipConfig {
    /// Half side of the square detection region, in tiles
    pub radius: u32,
    /// Ticks per accrual interval, in `1..=26`
    pub interval_length: u32,
    /// Points granted per qualifying interval, at least 1
    pub points_per_interval: u32,
    /// Log a line for every grant
    pub notify: bool,
}

impl Default for FriendshipConfig {
    fn default() -> Self {
        ModConfig::default().validate().0
    }
}

/// Generates a commented default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Passive Friendship Configuration

# Tiles between you and a villager (in each direction) that still count as nearby
FriendshipRadius = 2

# Log every friendship grant to the console
NotifyAboutFriendshipInConsole = false

# Number of 10-minute steps per friendship interval (1-26)
TimeIntervalLengthInTenMinuteIncrements = 1

# Friendship points granted per interval spent together
AmountOfFriendshipGainedPerTimeInterval = 1
"#
    .to_string()
}
