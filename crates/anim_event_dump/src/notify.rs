// SPDX-License-Identifier: MIT OR Apache-2.0
//! Notify entries read from an animation's `Notifies` list.

use crate::asset::{number_field, object_field, string_field};
use serde_json::Value;

/// Notify type whose display name is resolved through the sound lookup
pub const WEAPON_SOUND_NOTIFY: &str = "WeaponSound";

/// Placeholder for any name that cannot be determined
pub const UNKNOWN_NAME: &str = "Unknown";

/// One entry of the notify list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotifyEntry {
    /// Event type tag (`NotifyName`)
    pub notify_name: Option<String>,
    /// Trigger time in seconds (`Time`)
    pub time: Option<f64>,
    /// Fallback trigger time in seconds (`LinkValue`)
    pub link_value: Option<f64>,
    /// Sound lookup key (`Notify.ObjectName`)
    pub object_name: Option<String>,
}

impl NotifyEntry {
    /// Event type, `"Unknown"` when absent
    pub fn event_type(&self) -> &str {
        self.notify_name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    /// Trigger time: `Time`, then `LinkValue`, then 0
    pub fn timestamp(&self) -> f64 {
        self.time.or(self.link_value).unwrap_or(0.0)
    }

    /// Sound lookup key, empty when absent
    pub fn sound_ref(&self) -> &str {
        self.object_name.as_deref().unwrap_or_default()
    }

    /// Whether the display name comes from the sound lookup
    pub fn is_weapon_sound(&self) -> bool {
        self.event_type() == WEAPON_SOUND_NOTIFY
    }
}

impl From<&Value> for NotifyEntry {
    fn from(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            tracing::warn!("Notify entry is not an object: {value}");
            return Self::default();
        };

        Self {
            notify_name: string_field(fields, "NotifyName").map(str::to_owned),
            time: number_field(fields, "Time"),
            link_value: number_field(fields, "LinkValue"),
            object_name: object_field(fields, "Notify")
                .and_then(|notify| string_field(notify, "ObjectName"))
                .map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_entry() {
        let entry = NotifyEntry::from(&json!({
            "NotifyName": "WeaponSound",
            "Time": 0.25,
            "LinkValue": 0.75,
            "Notify": { "ObjectName": "AnimNotify_WeaponSound'Foo:Bar'" }
        }));

        assert_eq!(entry.event_type(), "WeaponSound");
        assert_eq!(entry.timestamp(), 0.25);
        assert_eq!(entry.sound_ref(), "AnimNotify_WeaponSound'Foo:Bar'");
        assert!(entry.is_weapon_sound());
    }

    #[test]
    fn test_defaults() {
        let entry = NotifyEntry::from(&json!({}));
        assert_eq!(entry.event_type(), "Unknown");
        assert_eq!(entry.timestamp(), 0.0);
        assert_eq!(entry.sound_ref(), "");
        assert!(!entry.is_weapon_sound());
    }

    #[test]
    fn test_link_value_fallback() {
        let entry = NotifyEntry::from(&json!({ "NotifyName": "Footstep", "LinkValue": 1.5 }));
        assert_eq!(entry.timestamp(), 1.5);

        let entry = NotifyEntry::from(&json!({ "Time": "soon", "LinkValue": 2 }));
        assert_eq!(entry.timestamp(), 2.0);
    }

    #[test]
    fn test_non_object_entry() {
        assert_eq!(NotifyEntry::from(&json!("Footstep")), NotifyEntry::default());
        assert_eq!(NotifyEntry::from(&Value::Null), NotifyEntry::default());
    }

    #[test]
    fn test_notify_wrong_shape() {
        let entry = NotifyEntry::from(&json!({ "NotifyName": "WeaponSound", "Notify": null }));
        assert_eq!(entry.sound_ref(), "");
    }
}
