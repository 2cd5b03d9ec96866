//! retouch - touch(1) with brace-range expansion
//!
//! Creates files or updates their access/modification times:
//!
//! - [`pattern`] - `name_{1...3}` expands to a numbered sequence of names
//! - [`engine`] - per-file create / set-times decisions
//! - [`batch`] - multi-file invocation, collect-and-report failures
//!
//! Filesystem and clock access go through the [`fs::FileSystem`] and
//! [`clock::Clock`] traits so the engine runs against in-memory fakes in tests.

pub mod batch;
pub mod clock;
pub mod engine;
pub mod error;
pub mod fs;
pub mod options;
pub mod pattern;

pub use batch::{BatchEvent, BatchSummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{TouchEngine, TouchReport, TouchResult};
pub use error::TouchError;
pub use fs::{DiskFs, FileSystem, MemoryFs};
pub use options::{parse_custom_time, TimeSelection, TouchOptions};
pub use pattern::expand;
