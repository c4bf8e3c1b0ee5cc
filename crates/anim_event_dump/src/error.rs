// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for event extraction.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Something the extractor expected to find in the document but did not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    /// No `AnimSequence` or `AnimMontage` object in the document
    AnimObject,
    /// The animation object produced no notify records
    Notifies,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnimObject => f.write_str("AnimSequence/AnimMontage not found"),
            Self::Notifies => f.write_str("No notifies found"),
        }
    }
}

/// Extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Path does not exist or is not a `.json` file
    #[error("Invalid or non-json file.")]
    InvalidInput {
        /// Rejected path
        path: PathBuf,
    },

    /// Document is not valid JSON or not an array of objects
    #[error("Failed to parse JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Required content is absent
    #[error("{0}")]
    NotFound(Missing),

    /// Input file could not be read
    #[error("Cannot open file {}: {source}", .path.display())]
    Read {
        /// Input path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            ExtractError::NotFound(Missing::AnimObject).to_string(),
            "AnimSequence/AnimMontage not found"
        );
        assert_eq!(
            ExtractError::NotFound(Missing::Notifies).to_string(),
            "No notifies found"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = ExtractError::InvalidInput { path: PathBuf::from("foo.txt") };
        assert_eq!(err.to_string(), "Invalid or non-json file.");
    }
}
