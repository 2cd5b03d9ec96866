//! Clock capability
//!
//! The touch engine never calls `SystemTime::now()` directly; it asks a
//! [`Clock`] so tests can pin "now" to a known instant.

use std::time::SystemTime;

/// Source of the current time
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at a single instant (for tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
