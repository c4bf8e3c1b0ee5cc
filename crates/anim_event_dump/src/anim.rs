// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation objects and frame timing.

use crate::asset::{number_field, AssetObject, ANIM_MONTAGE_TYPE, ANIM_SEQUENCE_TYPE};
use crate::notify::NotifyEntry;
use serde_json::Value;

/// Kind of animation object that carries notifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimKind {
    /// Plain animation sequence
    Sequence,
    /// Animation montage
    Montage,
}

impl AnimKind {
    /// Map a type tag to an animation kind
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            ANIM_SEQUENCE_TYPE => Some(Self::Sequence),
            ANIM_MONTAGE_TYPE => Some(Self::Montage),
            _ => None,
        }
    }

    /// Get the type tag
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Sequence => ANIM_SEQUENCE_TYPE,
            Self::Montage => ANIM_MONTAGE_TYPE,
        }
    }
}

/// Frame count and duration of an animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Total frame count (`NumFrames`)
    pub num_frames: f64,
    /// Duration in seconds (`SequenceLength`)
    pub sequence_length: f64,
}

impl FrameTiming {
    /// Create timing from frame count and duration
    pub fn new(num_frames: f64, sequence_length: f64) -> Self {
        Self { num_frames, sequence_length }
    }

    /// Average frame rate; zero when the duration is zero
    pub fn fps(&self) -> f64 {
        if self.sequence_length != 0.0 {
            self.num_frames / self.sequence_length
        } else {
            0.0
        }
    }

    /// Convert time to frame number, truncating toward zero
    pub fn time_to_frame(&self, time: f64) -> i64 {
        // Saturating cast; NaN maps to 0
        (time * self.fps()) as i64
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// The animation object a report is built from
#[derive(Debug, Clone, Copy)]
pub struct AnimAsset<'a> {
    kind: AnimKind,
    object: &'a AssetObject,
}

impl<'a> AnimAsset<'a> {
    /// View an object as an animation, if its type tag is one
    pub fn from_object(object: &'a AssetObject) -> Option<Self> {
        let kind = AnimKind::from_type_tag(object.type_tag.as_deref()?)?;
        Some(Self { kind, object })
    }

    /// Get the animation kind
    pub fn kind(&self) -> AnimKind {
        self.kind
    }

    /// Get the underlying object
    pub fn object(&self) -> &'a AssetObject {
        self.object
    }

    /// Read frame timing; `NumFrames` defaults to 0, `SequenceLength` to 1
    pub fn timing(&self) -> FrameTiming {
        let defaults = FrameTiming::default();
        let props = &self.object.properties;
        FrameTiming::new(
            number_field(props, "NumFrames").unwrap_or(defaults.num_frames),
            number_field(props, "SequenceLength").unwrap_or(defaults.sequence_length),
        )
    }

    /// Read the notify list in document order
    pub fn notifies(&self) -> Vec<NotifyEntry> {
        let Some(entries) = self.object.property("Notifies") else {
            return Vec::new();
        };
        let Value::Array(entries) = entries else {
            tracing::warn!("Notifies is not an array, treating as empty");
            return Vec::new();
        };
        entries.iter().map(NotifyEntry::from).collect()
    }
}
