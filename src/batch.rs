//! Multi-file invocation
//!
//! Every pattern is validated before the first file is touched. Files are
//! then processed strictly in order: patterns as given, range members
//! ascending. A failure on one file is reported and the batch moves on.

use crate::clock::Clock;
use crate::engine::{TouchEngine, TouchReport, TouchResult};
use crate::error::{Result, TouchError};
use crate::fs::FileSystem;
use crate::options::TouchOptions;
use crate::pattern::{expand, Expansion};
use std::path::Path;
use tracing::debug;

/// Exit status when every file succeeded (skips included)
pub const EXIT_OK: i32 = 0;
/// Exit status when at least one file failed
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for invalid arguments
pub const EXIT_USAGE: i32 = 2;

/// Progress notification for the caller
#[derive(Debug)]
pub enum BatchEvent<'a> {
    Touched(&'a TouchReport),
    Failed(&'a TouchError),
}

/// Per-result tallies for a whole invocation
///
/// Reports are handed to the caller as they happen and not retained, so a
/// large range runs in constant memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub updated_access: usize,
    pub updated_modification: usize,
    pub updated_both: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, result: TouchResult) {
        match result {
            TouchResult::Created => self.created += 1,
            TouchResult::UpdatedAccess => self.updated_access += 1,
            TouchResult::UpdatedModification => self.updated_modification += 1,
            TouchResult::UpdatedBoth => self.updated_both += 1,
            TouchResult::Skipped => self.skipped += 1,
        }
    }

    /// Files that did not fail (skips included)
    pub fn succeeded(&self) -> usize {
        self.created
            + self.updated_access
            + self.updated_modification
            + self.updated_both
            + self.skipped
    }

    /// Files attempted, successful or not
    pub fn processed(&self) -> usize {
        self.succeeded() + self.failed
    }

    pub fn count(&self, result: TouchResult) -> usize {
        match result {
            TouchResult::Created => self.created,
            TouchResult::UpdatedAccess => self.updated_access,
            TouchResult::UpdatedModification => self.updated_modification,
            TouchResult::UpdatedBoth => self.updated_both,
            TouchResult::Skipped => self.skipped,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            EXIT_OK
        } else {
            EXIT_FAILURE
        }
    }
}

/// Validate and expand every pattern up front.
pub fn prepare<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Expansion>> {
    patterns.iter().map(|p| expand(p.as_ref())).collect()
}

/// Touch every file named by `patterns`, calling `on_event` after each one.
///
/// Returns `Err` only for invalid arguments, before any file is touched.
pub fn run<S, F, C>(
    engine: &TouchEngine<F, C>,
    patterns: &[S],
    options: &TouchOptions,
    mut on_event: impl FnMut(BatchEvent<'_>),
) -> Result<BatchSummary>
where
    S: AsRef<str>,
    F: FileSystem,
    C: Clock,
{
    let expansions = prepare(patterns)?;
    let mut summary = BatchSummary::default();

    for (pattern, expansion) in patterns.iter().zip(expansions) {
        if expansion.is_range() {
            let pattern: &str = pattern.as_ref();
            debug!(pattern, count = expansion.remaining(), "expanding range");
        }
        for name in expansion {
            match engine.touch(Path::new(&name), options) {
                Ok(report) => {
                    summary.record(report.result);
                    on_event(BatchEvent::Touched(&report));
                }
                Err(err) => {
                    debug!(path = %name, error = %err, "touch failed");
                    summary.failed += 1;
                    on_event(BatchEvent::Failed(&err));
                }
            }
        }
    }

    Ok(summary)
}
