//! # Filesystem Capability
//!
//! The touch engine talks to the filesystem through the narrow [`FileSystem`]
//! trait:
//!
//! - [`DiskFs`] - real filesystem, times applied with `filetime`
//! - [`MemoryFs`] - in-memory fake with call recording and failure injection
//!
//! ```rust
//! use retouch::fs::{FileSystem, MemoryFs};
//! use std::path::Path;
//!
//! let fs = MemoryFs::new();
//! assert!(!fs.exists(Path::new("a.txt")));
//! fs.create_empty(Path::new("a.txt")).unwrap();
//! assert!(fs.exists(Path::new("a.txt")));
//! ```

use filetime::FileTime;
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access and modification time of one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub accessed: SystemTime,
    pub modified: SystemTime,
}

/// Filesystem operations the touch engine needs
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Create an empty file, or open an existing one without truncating it.
    fn create_empty(&self, path: &Path) -> io::Result<()>;

    /// Set the given instants; `None` leaves that instant unchanged.
    fn set_times(
        &self,
        path: &Path,
        accessed: Option<SystemTime>,
        modified: Option<SystemTime>,
    ) -> io::Result<()>;

    fn times(&self, path: &Path) -> io::Result<Timestamps>;
}

// ============================================================================
// DISK
// ============================================================================

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_empty(&self, path: &Path) -> io::Result<()> {
        // append + create never truncates, and tolerates a concurrent creator
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map(drop)
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: Option<SystemTime>,
        modified: Option<SystemTime>,
    ) -> io::Result<()> {
        match (accessed, modified) {
            (Some(a), Some(m)) => filetime::set_file_times(
                path,
                FileTime::from_system_time(a),
                FileTime::from_system_time(m),
            ),
            (Some(a), None) => filetime::set_file_atime(path, FileTime::from_system_time(a)),
            (None, Some(m)) => filetime::set_file_mtime(path, FileTime::from_system_time(m)),
            (None, None) => Ok(()),
        }
    }

    fn times(&self, path: &Path) -> io::Result<Timestamps> {
        let metadata = std::fs::metadata(path)?;
        Ok(Timestamps {
            accessed: metadata.accessed()?,
            modified: metadata.modified()?,
        })
    }
}

// ============================================================================
// IN-MEMORY FAKE
// ============================================================================

/// A recorded filesystem call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Exists(PathBuf),
    CreateEmpty(PathBuf),
    SetTimes {
        path: PathBuf,
        accessed: Option<SystemTime>,
        modified: Option<SystemTime>,
    },
}

/// In-memory filesystem for tests
///
/// Cloning shares the underlying state, so a test can hand one clone to the
/// engine and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: Arc<Mutex<HashMap<PathBuf, Timestamps>>>,
    failures: Arc<Mutex<HashMap<PathBuf, io::ErrorKind>>>,
    calls: Arc<Mutex<Vec<FsCall>>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing file with the given times
    pub fn with_file(self, path: impl Into<PathBuf>, times: Timestamps) -> Self {
        self.files.lock().unwrap().insert(path.into(), times);
        self
    }

    /// Make every mutation of `path` fail with `kind`
    pub fn with_failure(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.failures.lock().unwrap().insert(path.into(), kind);
        self
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths passed to `create_empty`, in order
    pub fn created(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                FsCall::CreateEmpty(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: FsCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, path: &Path) -> io::Result<()> {
        match self.failures.lock().unwrap().get(path) {
            Some(kind) => Err(io::Error::from(*kind)),
            None => Ok(()),
        }
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.record(FsCall::Exists(path.to_path_buf()));
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_empty(&self, path: &Path) -> io::Result<()> {
        self.record(FsCall::CreateEmpty(path.to_path_buf()));
        self.check_failure(path)?;
        // New entries start at the epoch; the engine stamps them via its clock
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_insert(Timestamps {
                accessed: UNIX_EPOCH,
                modified: UNIX_EPOCH,
            });
        Ok(())
    }

    fn set_times(
        &self,
        path: &Path,
        accessed: Option<SystemTime>,
        modified: Option<SystemTime>,
    ) -> io::Result<()> {
        self.record(FsCall::SetTimes {
            path: path.to_path_buf(),
            accessed,
            modified,
        });
        self.check_failure(path)?;
        let mut files = self.files.lock().unwrap();
        let entry = files
            .get_mut(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        if let Some(a) = accessed {
            entry.accessed = a;
        }
        if let Some(m) = modified {
            entry.modified = m;
        }
        Ok(())
    }

    fn times(&self, path: &Path) -> io::Result<Timestamps> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
