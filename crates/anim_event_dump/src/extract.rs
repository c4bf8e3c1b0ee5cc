// SPDX-License-Identifier: MIT OR Apache-2.0
//! Notify extraction: from a parsed document to a report, and from an
//! input path to a written report file.

use crate::anim::FrameTiming;
use crate::asset::AssetDocument;
use crate::error::{ExtractError, Missing, Result};
use crate::notify::NotifyEntry;
use crate::report::{output_path_for, EventRecord, EventReport};
use crate::sound::SoundLookup;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Whether the path has a `.json` extension (any case)
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Reject paths that do not exist or are not `.json` files
pub fn validate_input(path: &Path) -> Result<()> {
    if path.exists() && is_json_path(path) {
        Ok(())
    } else {
        Err(ExtractError::InvalidInput { path: path.to_path_buf() })
    }
}

/// Resolve a single notify entry into a report record
pub fn resolve_notify(entry: &NotifyEntry, timing: &FrameTiming, sounds: &SoundLookup<'_>) -> EventRecord {
    let time = entry.timestamp();
    let event_type = entry.event_type().to_string();
    let details = if entry.is_weapon_sound() {
        sounds.resolve(entry.sound_ref())
    } else {
        event_type.clone()
    };

    EventRecord {
        time,
        frame: timing.time_to_frame(time),
        event_type,
        details,
    }
}

/// Build the event report for a document
pub fn extract_events(document: &AssetDocument) -> Result<EventReport> {
    let anim = document
        .find_animation()
        .ok_or(ExtractError::NotFound(Missing::AnimObject))?;
    let timing = anim.timing();
    let sounds = SoundLookup::build(document);

    tracing::debug!(
        "Using {} {:?}: {} frames over {}s ({} fps)",
        anim.kind().type_tag(),
        anim.object().name,
        timing.num_frames,
        timing.sequence_length,
        timing.fps()
    );

    let records: Vec<EventRecord> = anim
        .notifies()
        .iter()
        .map(|entry| resolve_notify(entry, &timing, &sounds))
        .collect();

    if records.is_empty() {
        return Err(ExtractError::NotFound(Missing::Notifies));
    }

    Ok(EventReport::new(records))
}

/// Extract the notify events of a JSON dump and write them next to it.
///
/// Returns the path of the written report. Nothing is written on error.
pub fn process_file(path: &Path) -> Result<PathBuf> {
    validate_input(path)?;

    let document = AssetDocument::load(path)?;
    let report = extract_events(&document)?;

    let output = output_path_for(path);
    report.write_to(&output)?;

    tracing::info!("Wrote {} events to {:?}", report.len(), output);
    Ok(output)
}
