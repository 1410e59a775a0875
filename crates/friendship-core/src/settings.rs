//! Settings-menu field registry.
//!
//! Describes the four config fields so a host's in-game menu can render and
//! edit them without knowing the config struct. Edits go through
//! [`ModConfig::set`] and are still validated when the config is applied.

use serde::{Deserialize, Serialize};

use crate::config::{ModConfig, MAX_INTERVAL_LENGTH};
use crate::error::SettingsError;

/// Value shown or entered in a menu widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
}

/// Widget kind plus bounds the menu should enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Bool,
    Int { min: i64, max: Option<i64> },
}

/// One editable config field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingField {
    pub key: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub kind: SettingKind,
}

/// Every field, in menu order.
pub const SETTING_FIELDS: [SettingField; 4] = [
    SettingField {
        key: "FriendshipRadius",
        label: "Friendship radius",
        tooltip: "How many tiles away a villager can be and still count as nearby.",
        kind: SettingKind::Int { min: 0, max: None },
    },
    SettingField {
        key: "NotifyAboutFriendshipInConsole",
        label: "Log friendship gains",
        tooltip: "Write a console line every time friendship is gained.",
        kind: SettingKind::Bool,
    },
    SettingField {
        key: "TimeIntervalLengthInTenMinuteIncrements",
        label: "Interval length",
        tooltip: "Number of 10-minute steps between friendship checks.",
        kind: SettingKind::Int {
            min: 1,
            max: Some(MAX_INTERVAL_LENGTH),
        },
    },
    SettingField {
        key: "AmountOfFriendshipGainedPerTimeInterval",
        label: "Friendship per interval",
        tooltip: "Friendship points gained each interval spent near a villager.",
        kind: SettingKind::Int { min: 1, max: None },
    },
];

/// Looks up a field by key.
pub fn field(key: &str) -> Option<&'static SettingField> {
    SETTING_FIELDS.iter().find(|field| field.key == key)
}

impl SettingField {
    /// Clamps an integer to the widget bounds; booleans pass through.
    pub fn clamp(&self, value: SettingValue) -> SettingValue {
        match (self.kind, value) {
            (SettingKind::Int { min, max }, SettingValue::Int(v)) => {
                let v = v.max(min);
                SettingValue::Int(max.map_or(v, |max| v.min(max)))
            }
            (_, value) => value,
        }
    }
}

impl ModConfig {
    /// Current value of a field, by key.
    pub fn get(&self, key: &str) -> Result<SettingValue, SettingsError> {
        match key {
            "FriendshipRadius" => Ok(SettingValue::Int(self.friendship_radius)),
            "NotifyAboutFriendshipInConsole" => {
                Ok(SettingValue::Bool(self.notify_about_friendship_in_console))
            }
            "TimeIntervalLengthInTenMinuteIncrements" => Ok(SettingValue::Int(
                self.time_interval_length_in_ten_minute_increments,
            )),
            "AmountOfFriendshipGainedPerTimeInterval" => Ok(SettingValue::Int(
                self.amount_of_friendship_gained_per_time_interval,
            )),
            _ => Err(SettingsError::UnknownKey(key.to_string())),
        }
    }

    /// Writes a field, by key. Values are clamped to the field's menu bounds.
    pub fn set(&mut self, key: &str, value: SettingValue) -> Result<(), SettingsError> {
        let field = field(key).ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;
        match (field.clamp(value), field.kind) {
            (SettingValue::Bool(v), SettingKind::Bool) => {
                self.notify_about_friendship_in_console = v;
            }
            (SettingValue::Int(v), SettingKind::Int { .. }) => match field.key {
                "FriendshipRadius" => self.friendship_radius = v,
                "TimeIntervalLengthInTenMinuteIncrements" => {
                    self.time_interval_length_in_ten_minute_increments = v
                }
                _ => self.amount_of_friendship_gained_per_time_interval = v,
            },
            (_, SettingKind::Bool) => {
                return Err(SettingsError::TypeMismatch {
                    key: field.key,
                    expected: "boolean",
                })
            }
            (_, SettingKind::Int { .. }) => {
                return Err(SettingsError::TypeMismatch {
                    key: field.key,
                    expected: "integer",
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_is_readable() {
        let config = ModConfig::default();
        for field in SETTING_FIELDS.iter() {
            assert!(config.get(field.key).is_ok(), "{}", field.key);
        }
    }

    #[test]
    fn test_get_defaults() {
        let config = ModConfig::default();
        assert_eq!(config.get("FriendshipRadius"), Ok(SettingValue::Int(2)));
        assert_eq!(
            config.get("NotifyAboutFriendshipInConsole"),
            Ok(SettingValue::Bool(false))
        );
    }

    #[test]
    fn test_set_updates_field() {
        let mut config = ModConfig::default();
        config
            .set("AmountOfFriendshipGainedPerTimeInterval", SettingValue::Int(8))
            .unwrap();
        config
            .set("NotifyAboutFriendshipInConsole", SettingValue::Bool(true))
            .unwrap();

        assert_eq!(config.amount_of_friendship_gained_per_time_interval, 8);
        assert!(config.notify_about_friendship_in_console);
    }

    #[test]
    fn test_set_clamps_to_menu_bounds() {
        let mut config = ModConfig::default();
        config
            .set("TimeIntervalLengthInTenMinuteIncrements", SettingValue::Int(99))
            .unwrap();
        config.set("FriendshipRadius", SettingValue::Int(-4)).unwrap();

        assert_eq!(config.time_interval_length_in_ten_minute_increments, 26);
        assert_eq!(config.friendship_radius, 0);
    }

    #[test]
    fn test_set_rejects_wrong_type() {
        let mut config = ModConfig::default();
        let err = config
            .set("FriendshipRadius", SettingValue::Bool(true))
            .unwrap_err();
        assert_eq!(
            err,
            SettingsError::TypeMismatch {
                key: "FriendshipRadius",
                expected: "integer",
            }
        );
        assert_eq!(config, ModConfig::default());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = ModConfig::default();
        assert_eq!(
            config.get("Speed"),
            Err(SettingsError::UnknownKey("Speed".to_string()))
        );
        assert!(config.set("Speed", SettingValue::Int(1)).is_err());
    }

    #[test]
    fn test_setting_value_deserializes_untagged() {
        let value: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, SettingValue::Bool(true));
        let value: SettingValue = serde_json::from_str("12").unwrap();
        assert_eq!(value, SettingValue::Int(12));
    }
}
