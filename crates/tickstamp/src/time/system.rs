use std::time::{SystemTime, UNIX_EPOCH};

use crate::{TimeSource, timestamp::timestamp_from_ms};

/// The operating system's wall clock.
///
/// Readings follow `SystemTime::now()`, so they move backward whenever the
/// system clock is stepped back (NTP correction, manual change, VM resume).
/// See [`RegressionPolicy`] for how a generator reacts to that.
///
/// [`RegressionPolicy`]: crate::RegressionPolicy
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    /// Milliseconds since the Unix epoch. A clock set before 1970 reads as 0.
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Returns the current wall-clock time as a packed value with a zero count
/// component.
///
/// ```
/// use tickstamp::{component_count, now};
///
/// assert_eq!(component_count(now()), 0);
/// ```
#[must_use]
pub fn now() -> u64 {
    timestamp_from_ms(SystemClock.current_millis())
}

/// Returns whole seconds since the Unix epoch (POSIX time).
#[must_use]
pub fn seconds_since_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
