// SPDX-License-Identifier: MIT OR Apache-2.0
//! Weapon sound lookup and display-name resolution.
//!
//! `WeaponSound` notifies only carry a reference string such as
//! `AnimNotify_WeaponSound'Outer:Name'`. The lookup maps that string back
//! to the sibling `AnimNotify_WeaponSound` object in the same dump, whose
//! `Event_FP`/`Event_TP` properties name the sound event actually played.

use crate::asset::{object_field, string_field, AssetDocument, AssetObject, WEAPON_SOUND_TYPE};
use crate::notify::UNKNOWN_NAME;
use indexmap::IndexMap;

/// Sound event properties, in priority order
const EVENT_KEYS: [&str; 2] = ["Event_FP", "Event_TP"];

/// Object name used by the exporter for an unset reference
const NONE_OBJECT_NAME: &str = "None";

/// Build the reference key for a weapon sound object
pub fn sound_key(outer: &str, name: &str) -> String {
    format!("{WEAPON_SOUND_TYPE}'{outer}:{name}'")
}

/// Weapon sound objects keyed by their reference string
#[derive(Debug, Clone, Default)]
pub struct SoundLookup<'a> {
    entries: IndexMap<String, &'a AssetObject>,
}

impl<'a> SoundLookup<'a> {
    /// Index every weapon sound object in the document.
    ///
    /// When two objects share a key the later one wins.
    pub fn build(document: &'a AssetDocument) -> Self {
        let mut lookup = Self::default();
        for object in document.objects_of_type(WEAPON_SOUND_TYPE) {
            lookup.insert(object);
        }
        tracing::debug!("Indexed {} weapon sound objects", lookup.len());
        lookup
    }

    /// Insert an object under its reference key, replacing any previous one
    pub fn insert(&mut self, object: &'a AssetObject) {
        let key = sound_key(
            object.outer.as_deref().unwrap_or_default(),
            object.name.as_deref().unwrap_or_default(),
        );
        if self.entries.insert(key, object).is_some() {
            tracing::debug!("Duplicate weapon sound key for {:?}, keeping the later object", object.name);
        }
    }

    /// Get the object for a reference key
    pub fn get(&self, key: &str) -> Option<&'a AssetObject> {
        self.entries.get(key).copied()
    }

    /// Resolve a reference key to a display name
    pub fn resolve(&self, key: &str) -> String {
        resolve_sound_name(self.get(key))
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the lookup is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pick a display name for a weapon sound object.
///
/// Checks `Event_FP` then `Event_TP`; the first one that is a mapping with
/// a usable `ObjectName` wins. Falls back to the object's own `Name`, and
/// to `"Unknown"` when the object is absent.
pub fn resolve_sound_name(entry: Option<&AssetObject>) -> String {
    let Some(entry) = entry else {
        return UNKNOWN_NAME.to_string();
    };

    EVENT_KEYS
        .iter()
        .filter_map(|key| object_field(&entry.properties, key))
        .filter_map(|event| string_field(event, "ObjectName"))
        .find(|name| !name.is_empty() && *name != NONE_OBJECT_NAME)
        .or(entry.name.as_deref())
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}
