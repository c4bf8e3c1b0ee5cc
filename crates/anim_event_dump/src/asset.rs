// SPDX-License-Identifier: MIT OR Apache-2.0
//! Exported asset objects and the document that holds them.
//!
//! An asset dump is a flat JSON array of objects. Only four top-level
//! fields are read from each object (`Type`, `Name`, `Outer`,
//! `Properties`); all of them are optional, and a field with the wrong
//! JSON shape is treated as absent.

use crate::anim::AnimAsset;
use crate::error::{ExtractError, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

/// Type tag of a plain animation sequence
pub const ANIM_SEQUENCE_TYPE: &str = "AnimSequence";

/// Type tag of an animation montage
pub const ANIM_MONTAGE_TYPE: &str = "AnimMontage";

/// Type tag of a weapon sound notify definition
pub const WEAPON_SOUND_TYPE: &str = "AnimNotify_WeaponSound";

/// A single exported object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct AssetObject {
    /// Schema/role tag (`Type`)
    pub type_tag: Option<String>,
    /// Object name (`Name`)
    pub name: Option<String>,
    /// Containing object (`Outer`)
    pub outer: Option<String>,
    /// Type-specific payload (`Properties`), empty when absent
    pub properties: Map<String, Value>,
}

impl AssetObject {
    /// Check the object's type tag
    pub fn is_type(&self, tag: &str) -> bool {
        self.type_tag.as_deref() == Some(tag)
    }

    /// Get a property value
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}

impl From<Map<String, Value>> for AssetObject {
    fn from(mut fields: Map<String, Value>) -> Self {
        let properties = match fields.remove("Properties") {
            Some(Value::Object(properties)) => properties,
            _ => Map::new(),
        };

        Self {
            type_tag: take_string(&mut fields, "Type"),
            name: take_string(&mut fields, "Name"),
            outer: take_string(&mut fields, "Outer"),
            properties,
        }
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

/// Read a string field, ignoring values of any other shape
pub(crate) fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Read a numeric field, ignoring values of any other shape
pub(crate) fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64)
}

/// Read a nested mapping, ignoring values of any other shape
pub(crate) fn object_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}

/// A parsed asset dump, in document order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AssetDocument {
    objects: Vec<AssetObject>,
}

impl AssetDocument {
    /// Parse a document from raw bytes (must be UTF-8 JSON)
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse a document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_slice(&bytes)?;
        tracing::debug!("Loaded {} objects from {:?}", document.len(), path);
        Ok(document)
    }

    /// Get all objects
    pub fn objects(&self) -> &[AssetObject] {
        &self.objects
    }

    /// Get objects with the given type tag, in document order
    pub fn objects_of_type<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a AssetObject> + 'a {
        self.objects.iter().filter(move |object| object.is_type(tag))
    }

    /// Find the first animation sequence or montage
    pub fn find_animation(&self) -> Option<AnimAsset<'_>> {
        self.objects.iter().find_map(AnimAsset::from_object)
    }

    /// Get object count
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the document has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl FromStr for AssetDocument {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<Vec<AssetObject>> for AssetDocument {
    fn from(objects: Vec<AssetObject>) -> Self {
        Self { objects }
    }
}
