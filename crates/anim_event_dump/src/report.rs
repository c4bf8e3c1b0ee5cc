// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tab-separated event report.

use crate::error::{ExtractError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Header line of every report
pub const REPORT_HEADER: &str = "Time(sec)\tFrame\tEvent\tDetails";

/// Appended to the input file stem to name the report
pub const REPORT_SUFFIX: &str = "_events.txt";

/// One resolved notify event
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Trigger time in seconds
    pub time: f64,
    /// Frame index at the trigger time
    pub frame: i64,
    /// Event type tag
    pub event_type: String,
    /// Resolved display name
    pub details: String,
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}\t{}\t{}\t{}", self.time, self.frame, self.event_type, self.details)
    }
}

/// Ordered list of event records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventReport {
    records: Vec<EventRecord>,
}

impl EventReport {
    /// Create a report from records in output order
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self { records }
    }

    /// Get all records
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Get record count
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the report has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the header and records, newline-separated, without a trailing newline
    pub fn render(&self) -> String {
        let mut out = String::from(REPORT_HEADER);
        out.push('\n');
        let body: Vec<String> = self.records.iter().map(ToString::to_string).collect();
        out.push_str(&body.join("\n"));
        out
    }

    /// Write the rendered report, replacing any existing file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render()).map_err(|source| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Report path for an input file: same directory, stem plus `_events.txt`
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut file_name = input.file_stem().unwrap_or_default().to_os_string();
    file_name.push(REPORT_SUFFIX);
    input.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(time: f64, frame: i64, event_type: &str, details: &str) -> EventRecord {
        EventRecord {
            time,
            frame,
            event_type: event_type.to_string(),
            details: details.to_string(),
        }
    }

    #[test]
    fn test_record_format() {
        assert_eq!(
            record(0.5, 25, "WeaponSound", "Shotgun_Fire").to_string(),
            "0.500000\t25\tWeaponSound\tShotgun_Fire"
        );
        assert_eq!(record(1.0 / 3.0, 10, "Footstep", "Footstep").to_string(), "0.333333\t10\tFootstep\tFootstep");
    }

    #[test]
    fn test_render() {
        let report = EventReport::new(vec![
            record(0.0, 0, "Footstep", "Footstep"),
            record(1.25, 37, "WeaponSound", "Unknown"),
        ]);
        assert_eq!(
            report.render(),
            "Time(sec)\tFrame\tEvent\tDetails\n0.000000\t0\tFootstep\tFootstep\n1.250000\t37\tWeaponSound\tUnknown"
        );
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path_for(Path::new("dumps/Fire.json")), PathBuf::from("dumps/Fire_events.txt"));
        assert_eq!(output_path_for(Path::new("Fire.JSON")), PathBuf::from("Fire_events.txt"));
        assert_eq!(output_path_for(Path::new("a.b.json")), PathBuf::from("a.b_events.txt"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Fire_events.txt");
        std::fs::write(&path, "stale contents that are longer than the report").unwrap();

        let report = EventReport::new(vec![record(0.5, 25, "WeaponSound", "Shotgun_Fire")]);
        report.write_to(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), report.render());
    }

    #[test]
    fn test_write_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("Fire_events.txt");
        let result = EventReport::default().write_to(&path);
        assert!(matches!(result, Err(ExtractError::Write { .. })));
    }
}
