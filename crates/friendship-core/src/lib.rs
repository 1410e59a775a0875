//! Passive friendship: relationship progress for characters who stay near
//! the player.
//!
//! The engine runs inside a host game's event loop. Every 10-minute time
//! tick it samples which tracked characters stand inside a square around the
//! player, and at the end of every interval it grants points to anyone seen
//! in both of the last two intervals, up to a cap set by relationship status.
//!
//! # Architecture
//!
//! ```text
//! host events ──▶ PassiveFriendship ──▶ sampler ──▶ AccrualEngine ──▶ RelationshipLedger
//!                  (handler)            (window)     (two windows)     (host records)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Persisted settings, file I/O and clamping
//! - [`sampler`]: Square-radius proximity sampling
//! - [`accrual`]: Interval countdown, two-window history and status caps
//! - [`handler`]: Host lifecycle event dispatch
//! - [`settings`]: Field registry for in-game settings menus
//! - [`logger`]: JSONL grant log

pub mod accrual;
pub mod config;
pub mod error;
pub mod handler;
pub mod logger;
pub mod sampler;
pub mod settings;
pub mod window;
pub mod world;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use accrual::{AccrualEngine, Grant, TickOutcome};
pub use config::{default_config_toml, FriendshipConfig, ModConfig};
pub use error::{
    AccrualFailure, ConfigError, ErrorKind, FriendshipError, SettingsError, WorldUnavailable,
};
pub use handler::{Host, PassiveFriendship};
pub use logger::GrantLog;
pub use sampler::{in_range, sample, sample_world};
pub use settings::{SettingField, SettingKind, SettingValue, SETTING_FIELDS};
pub use window::ProximityWindow;
pub use world::{
    fold_name, hearts, FriendshipStatus, RelationshipLedger, RelationshipRecord, TilePosition,
    TrackedCharacter, WorldSnapshotProvider,
};
