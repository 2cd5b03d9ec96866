//! Touch engine
//!
//! Per file: existence check, then either skip (no-create), or create and
//! stamp with "now", then apply the effective instant to the selected
//! timestamp(s). Each call is independent; nothing is rolled back.

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TouchError};
use crate::fs::{DiskFs, FileSystem};
use crate::options::{TimeSelection, TouchOptions};
use chrono::{DateTime, Local};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, instrument};

/// Outcome of touching one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    Created,
    UpdatedAccess,
    UpdatedModification,
    UpdatedBoth,
    Skipped,
}

impl TouchResult {
    fn updated(selection: TimeSelection) -> Self {
        match selection {
            TimeSelection::AccessOnly => TouchResult::UpdatedAccess,
            TimeSelection::ModificationOnly => TouchResult::UpdatedModification,
            TimeSelection::Both => TouchResult::UpdatedBoth,
        }
    }
}

/// What happened to one path, with enough detail for verbose output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchReport {
    pub path: PathBuf,
    pub result: TouchResult,
    /// Instant(s) set after the existence check; `None` when skipped
    pub selection: Option<TimeSelection>,
    /// Explicit instant applied, if one was requested
    pub custom_time: Option<SystemTime>,
}

impl TouchReport {
    /// Verbose action lines, one per action taken
    pub fn lines(&self) -> Vec<String> {
        let path = self.path.display();
        let mut lines = Vec::with_capacity(2);
        match (self.result, self.selection) {
            (TouchResult::Skipped, _) | (_, None) => {
                lines.push(format!(
                    "File {} does not exist and no-create is set",
                    path
                ));
            }
            (TouchResult::Created, Some(selection)) => {
                lines.push(format!("Created new file: {}", path));
                if let Some(at) = self.custom_time {
                    lines.push(format!(
                        "Set the {} of: {} to {}",
                        selection.describe(),
                        path,
                        format_instant(at)
                    ));
                }
            }
            (_, Some(selection)) => {
                let mut line = format!("Updated the {} of: {}", selection.describe(), path);
                if let Some(at) = self.custom_time {
                    line.push_str(&format!(" to {}", format_instant(at)));
                }
                lines.push(line);
            }
        }
        lines
    }
}

impl fmt::Display for TouchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

fn format_instant(at: SystemTime) -> String {
    DateTime::<Local>::from(at).format("%Y-%m-%d %H:%M").to_string()
}

/// Creates files and sets their times through a [`FileSystem`] and a [`Clock`]
#[derive(Debug, Clone)]
pub struct TouchEngine<F = DiskFs, C = SystemClock> {
    fs: F,
    clock: C,
}

impl TouchEngine {
    /// Engine over the real filesystem and wall clock
    pub fn system() -> Self {
        Self::new(DiskFs, SystemClock)
    }
}

impl<F: FileSystem, C: Clock> TouchEngine<F, C> {
    pub fn new(fs: F, clock: C) -> Self {
        Self { fs, clock }
    }

    #[instrument(level = "debug", skip(self, path, options), fields(path = %path.display()))]
    pub fn touch(&self, path: &Path, options: &TouchOptions) -> Result<TouchReport> {
        let mut result = None;

        if !self.fs.exists(path) {
            if options.no_create {
                debug!("missing and no-create set, skipping");
                return Ok(TouchReport {
                    path: path.to_path_buf(),
                    result: TouchResult::Skipped,
                    selection: None,
                    custom_time: None,
                });
            }

            self.fs
                .create_empty(path)
                .map_err(|source| TouchError::Create {
                    path: path.to_path_buf(),
                    source,
                })?;
            let created_at = self.clock.now();
            self.set_times(path, Some(created_at), Some(created_at))?;
            debug!("created");
            result = Some(TouchResult::Created);
        }

        // Re-sampled: creation and update each read the clock
        let effective = options.custom_time.unwrap_or_else(|| self.clock.now());
        let selection = options.selection();
        if options.access_only && options.mod_only {
            debug!("both -a and -m given, access time wins");
        }

        let (accessed, modified) = selection.instants(effective);
        self.set_times(path, accessed, modified)?;
        debug!(selection = selection.describe(), "timestamps set");

        Ok(TouchReport {
            path: path.to_path_buf(),
            result: result.unwrap_or(TouchResult::updated(selection)),
            selection: Some(selection),
            custom_time: options.custom_time,
        })
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: Option<SystemTime>,
        modified: Option<SystemTime>,
    ) -> Result<()> {
        self.fs
            .set_times(path, accessed, modified)
            .map_err(|source| TouchError::SetTimes {
                path: path.to_path_buf(),
                source,
            })
    }
}
