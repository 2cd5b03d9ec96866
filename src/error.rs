//! Error types with fix suggestions
//!
//! Error code ranges:
//! - TOUCH-000-009: Custom time literal errors
//! - TOUCH-010-019: Filename pattern errors
//! - TOUCH-020-029: Per-file filesystem errors

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TouchError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum TouchError {
    // ─────────────────────────────────────────────────────────────
    // Invalid arguments (fatal, reported before any file is touched)
    // ─────────────────────────────────────────────────────────────
    #[error("TOUCH-001: Invalid time '{literal}': {reason}")]
    InvalidTime { literal: String, reason: String },

    #[error("TOUCH-002: Time '{literal}' does not exist in the local time zone")]
    NonexistentLocalTime { literal: String },

    #[error("TOUCH-010: Invalid range in pattern '{pattern}': {reason}")]
    InvalidRange { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Path errors (local to one file, processing continues)
    // ─────────────────────────────────────────────────────────────
    #[error("TOUCH-020: Cannot create '{}': {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOUCH-021: Cannot set times of '{}': {source}", .path.display())]
    SetTimes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TouchError {
    /// Bad user input, as opposed to a failure on one particular file
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            TouchError::InvalidTime { .. }
                | TouchError::NonexistentLocalTime { .. }
                | TouchError::InvalidRange { .. }
        )
    }

    /// The file this error is about, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TouchError::Create { path, .. } | TouchError::SetTimes { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}

impl FixSuggestion for TouchError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            TouchError::InvalidTime { .. } => {
                Some("Use exactly 12 digits: YYYYMMDDHHMM (e.g. 202401011230)")
            }
            TouchError::NonexistentLocalTime { .. } => {
                Some("Pick a time outside the daylight-saving gap")
            }
            TouchError::InvalidRange { .. } => {
                Some("Range bounds must be non-negative integers that fit in 64 bits: {1...10}")
            }
            TouchError::Create { .. } => Some("Check that the parent directory exists and is writable"),
            TouchError::SetTimes { .. } => Some("Check file ownership and permissions"),
        }
    }
}
