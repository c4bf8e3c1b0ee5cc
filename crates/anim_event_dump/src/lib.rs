// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation notify event extraction.
//!
//! This crate turns an exported animation asset dump (a JSON array of
//! objects) into a tab-separated event report:
//! - Locate the first `AnimSequence` or `AnimMontage` object
//! - Derive an average frame rate from `NumFrames` and `SequenceLength`
//! - Resolve `WeaponSound` notifies through sibling sound objects
//! - Write `<stem>_events.txt` next to the input
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let output = anim_event_dump::process_file(Path::new("Fire.json"))?;
//! println!("Saved → {}", output.display());
//! # Ok::<(), anim_event_dump::ExtractError>(())
//! ```

pub mod anim;
pub mod asset;
pub mod error;
pub mod extract;
pub mod notify;
pub mod report;
pub mod sound;

pub use anim::{AnimAsset, AnimKind, FrameTiming};
pub use asset::{AssetDocument, AssetObject, ANIM_MONTAGE_TYPE, ANIM_SEQUENCE_TYPE, WEAPON_SOUND_TYPE};
pub use error::{ExtractError, Missing, Result};
pub use extract::{extract_events, is_json_path, process_file, resolve_notify, validate_input};
pub use notify::{NotifyEntry, UNKNOWN_NAME, WEAPON_SOUND_NOTIFY};
pub use report::{output_path_for, EventRecord, EventReport, REPORT_HEADER, REPORT_SUFFIX};
pub use sound::{resolve_sound_name, sound_key, SoundLookup};
