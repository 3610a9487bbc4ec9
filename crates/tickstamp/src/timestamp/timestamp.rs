use core::{fmt, str::FromStr};

use crate::{
    Error,
    timestamp::{component_count, component_time, millis_from_timestamp, timestamp_from_ms},
};

/// A packed 64-bit timestamp produced by a [`TimestampGenerator`].
///
/// The wrapper orders, hashes and compares exactly like the raw `u64`, so it
/// can stand in for the raw value in maps and indexes while exposing the
/// decomposed fields by name.
///
/// ```
/// use tickstamp::Timestamp;
///
/// let ts = Timestamp::from_raw((1_700_000_000_000 << 20) + 3);
/// assert_eq!(ts.millis(), 1_700_000_000_000);
/// assert_eq!(ts.count(), 3);
/// assert_eq!(ts.to_string(), ts.to_raw().to_string());
/// ```
///
/// [`TimestampGenerator`]: crate::TimestampGenerator
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    raw: u64,
}

impl Timestamp {
    /// The zero timestamp: the Unix epoch with a zero count.
    pub const ZERO: Self = Self { raw: 0 };

    /// Wraps a raw packed value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self { raw }
    }

    /// Builds a timestamp for `ms` milliseconds since the epoch with a zero
    /// count.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self::from_raw(timestamp_from_ms(ms))
    }

    /// Returns the raw packed value.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.raw
    }

    /// Returns the time component, still shifted into position.
    #[must_use]
    pub const fn time(self) -> u64 {
        component_time(self.raw)
    }

    /// Returns the per-millisecond counter.
    #[must_use]
    pub const fn count(self) -> u64 {
        component_count(self.raw)
    }

    /// Returns whole milliseconds since the Unix epoch.
    #[must_use]
    pub const fn millis(self) -> u64 {
        millis_from_timestamp(self.raw)
    }

    /// Converts the time component back into a [`SystemTime`].
    ///
    /// The counter carries no sub-millisecond meaning and is dropped.
    ///
    /// [`SystemTime`]: std::time::SystemTime
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_system_time(self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + core::time::Duration::from_millis(self.millis())
    }
}

impl From<u64> for Timestamp {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.to_raw()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timestamp")
            .field("raw", &self.raw)
            .field("millis", &self.millis())
            .field("count", &self.count())
            .finish()
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_raw(s.trim().parse::<u64>()?))
    }
}
