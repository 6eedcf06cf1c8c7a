//! Timestamps and time sources.
//!
//! Timestamps are Unix epoch seconds (UTC). The engine treats the host's
//! clock as authoritative and only ever reads it through the [`TimeSource`]
//! trait, so deterministic hosts (block-time environments, simulations,
//! tests) can supply their own notion of "now".

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp shifted forward by `secs`, saturating at the maximum.
    pub fn plus(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether this timestamp + duration has passed relative to `now`.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// A monotonic source of the current time.
///
/// Read-only from the engine's perspective; consulted at submission, voting,
/// threshold checks and execution.
pub trait TimeSource {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time source backed by the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Timestamp::new(secs)
    }
}

/// A settable clock for tests and deterministic simulation hosts.
///
/// Clones share the same underlying instant, so a test can keep one handle
/// while an engine owns another and advance time between calls.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(secs: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(secs)),
        }
    }

    /// Set the current time to an absolute value.
    pub fn set(&self, secs: u64) {
        self.now.set(secs);
    }

    /// Move the clock forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(self.now.get())
    }
}
