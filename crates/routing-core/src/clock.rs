//! Time source for the stores.
//!
//! Presence liveness is a pure function of "now", so the stores never call
//! `Utc::now()` directly. Production code hands them a [`SystemClock`]; tests
//! hand them a [`ManualClock`] and move time by hand.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
///
/// # Examples
///
/// ```
/// use callhub_routing_core::clock::{Clock, ManualClock};
/// use chrono::Duration;
///
/// let clock = ManualClock::new();
/// let start = clock.now();
/// clock.advance(Duration::seconds(31));
/// assert_eq!(clock.now() - start, Duration::seconds(31));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Start at the current wall-clock time
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(at),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        *self.current.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock();
        *current += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock()
    }
}
