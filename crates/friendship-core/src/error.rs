//! Error types for the friendship engine.
//!
//! Nothing raised during a tick is fatal: tick-time errors are collected into
//! the tick outcome and logged, and the engine keeps running.

use thiserror::Error;

/// The recoverable failure kinds the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendshipError {
    /// A setting was out of range at load and was clamped.
    #[error("config value {key} = {value} is out of range, clamped to {clamped_to}")]
    ConfigValidation {
        key: &'static str,
        value: i64,
        clamped_to: i64,
    },

    /// The host could not supply the world state needed to sample.
    #[error("world state unavailable: {0}")]
    WorldStateUnavailable(WorldUnavailable),

    /// One character's relationship could not be updated.
    #[error("failed to update friendship with {name}: {reason}")]
    PerCharacterAccrual {
        name: String,
        reason: AccrualFailure,
    },
}

impl FriendshipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FriendshipError::ConfigValidation { .. } => ErrorKind::ConfigValidation,
            FriendshipError::WorldStateUnavailable(_) => ErrorKind::WorldStateUnavailable,
            FriendshipError::PerCharacterAccrual { .. } => ErrorKind::PerCharacterAccrual,
        }
    }
}

/// Discriminant of [`FriendshipError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    ConfigValidation,
    WorldStateUnavailable,
    PerCharacterAccrual,
}

/// Why the world could not be sampled this tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldUnavailable {
    #[error("no current location is known")]
    NoCurrentLocation,
    #[error("roster for location '{0}' is missing")]
    RosterMissing(String),
}

/// Why a single character's grant failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccrualFailure {
    #[error("relationship record is missing")]
    MissingRecord,
    #[error("host rejected the update: {0}")]
    UpdateRejected(String),
}

/// Errors raised while reading or writing configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised when a settings menu edits a config field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("setting '{key}' expects a {expected} value")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = FriendshipError::WorldStateUnavailable(WorldUnavailable::NoCurrentLocation);
        assert_eq!(err.kind(), ErrorKind::WorldStateUnavailable);

        let err = FriendshipError::PerCharacterAccrual {
            name: "Sam".to_string(),
            reason: AccrualFailure::MissingRecord,
        };
        assert_eq!(err.kind(), ErrorKind::PerCharacterAccrual);
    }

    #[test]
    fn test_error_messages_name_the_subject() {
        let err = FriendshipError::PerCharacterAccrual {
            name: "Sam".to_string(),
            reason: AccrualFailure::UpdateRejected("locked".to_string()),
        };
        let message = err.to_string();
        assert!(message.contains("Sam"));
        assert!(message.contains("locked"));

        let err = FriendshipError::ConfigValidation {
            key: "FriendshipRadius",
            value: -3,
            clamped_to: 2,
        };
        assert_eq!(
            err.to_string(),
            "config value FriendshipRadius = -3 is out of range, clamped to 2"
        );
    }
}
