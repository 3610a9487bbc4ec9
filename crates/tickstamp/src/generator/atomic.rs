use core::fmt;

use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    generator::{Poll, RegressionPolicy},
    time::TimeSource,
    timestamp::{Timestamp, component_time, timestamp_from_ms},
};

/// A lock-free generator of unique, time-ordered packed timestamps.
///
/// The generator keeps one [`AtomicU64`] cursor holding the next candidate
/// value. Each call reads the clock, decides whether the cursor still lies in
/// the current millisecond, and reserves a value with a single
/// compare-and-swap. Losing the swap to another thread simply retries, so the
/// generator can be shared freely (`&self` everywhere, `Sync` whenever the
/// time source is).
///
/// ## Guarantees
/// - Values from one instance never repeat while the clock moves forward and
///   fewer than 2^20 values are drawn per millisecond.
/// - Calls ordered one after another return increasing values; within one
///   millisecond consecutive values differ by exactly 1.
///
/// ## Caveats
/// - State lives only in memory. Two instances, or one instance across a
///   process restart, can produce equal values.
/// - A backward step of the wall clock, or a counter carry into the next
///   millisecond, is handled according to the configured
///   [`RegressionPolicy`]. The default follows the clock.
///
/// ## Example
/// ```
/// use std::{sync::Arc, thread};
/// use tickstamp::TimestampGenerator;
///
/// let generator = Arc::new(TimestampGenerator::new());
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let generator = Arc::clone(&generator);
///         thread::spawn(move || generator.generate())
///     })
///     .collect();
///
/// let mut values: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
/// values.sort_unstable();
/// values.dedup();
/// assert_eq!(values.len(), 4);
/// ```
pub struct TimestampGenerator<T> {
    #[cfg(feature = "cache-padded")]
    next: crossbeam_utils::CachePadded<AtomicU64>,
    #[cfg(not(feature = "cache-padded"))]
    next: AtomicU64,
    clock: T,
    policy: RegressionPolicy,
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl TimestampGenerator<crate::SystemClock> {
    /// Creates a generator reading the system wall clock, with its cursor at
    /// zero and the default [`RegressionPolicy`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(crate::SystemClock)
    }

    /// Creates a generator reading the system wall clock, with its cursor at
    /// zero and the given [`RegressionPolicy`].
    ///
    /// ```
    /// use tickstamp::{RegressionPolicy, TimestampGenerator};
    ///
    /// let generator = TimestampGenerator::with_policy(RegressionPolicy::Clamp);
    /// assert_eq!(generator.policy(), RegressionPolicy::Clamp);
    /// ```
    #[must_use]
    pub fn with_policy(policy: RegressionPolicy) -> Self {
        Self::with_clock_and_policy(crate::SystemClock, policy)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[cfg(feature = "std")]
impl Default for TimestampGenerator<crate::SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimestampGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator reading time from `clock`, with its cursor at
    /// zero.
    ///
    /// # Example
    /// ```
    /// use tickstamp::{TimeSource, TimestampGenerator};
    ///
    /// struct FrozenClock;
    /// impl TimeSource for FrozenClock {
    ///     fn current_millis(&self) -> u64 {
    ///         1_700_000_000_000
    ///     }
    /// }
    ///
    /// let generator = TimestampGenerator::with_clock(FrozenClock);
    /// assert_eq!(generator.generate(), 1_700_000_000_000 << 20);
    /// assert_eq!(generator.generate(), (1_700_000_000_000 << 20) + 1);
    /// ```
    pub fn with_clock(clock: T) -> Self {
        Self::from_raw(0, clock)
    }

    /// Creates a generator reading time from `clock`, with its cursor at zero
    /// and the given [`RegressionPolicy`].
    pub fn with_clock_and_policy(clock: T, policy: RegressionPolicy) -> Self {
        Self::with_clock(clock).with_regression_policy(policy)
    }

    /// Creates a generator whose cursor starts at `next`.
    ///
    /// Useful for resuming after a value known to have been issued already,
    /// e.g. `last + 1`. In typical use cases, prefer [`Self::with_clock`].
    pub fn from_raw(next: u64, clock: T) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            next: crossbeam_utils::CachePadded::new(AtomicU64::new(next)),
            #[cfg(not(feature = "cache-padded"))]
            next: AtomicU64::new(next),
            clock,
            policy: RegressionPolicy::default(),
        }
    }

    /// Replaces the regression policy. Meant to be chained onto a
    /// constructor before the generator is shared.
    ///
    /// ```
    /// use tickstamp::{RegressionPolicy, TimestampGenerator};
    ///
    /// let generator = TimestampGenerator::new().with_regression_policy(RegressionPolicy::Clamp);
    /// assert_eq!(generator.policy(), RegressionPolicy::Clamp);
    /// ```
    #[must_use]
    pub fn with_regression_policy(mut self, policy: RegressionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured regression policy.
    pub fn policy(&self) -> RegressionPolicy {
        self.policy
    }

    /// Returns the time source backing this generator.
    pub fn clock(&self) -> &T {
        &self.clock
    }

    /// Generates the next unique packed timestamp.
    ///
    /// Never blocks and never fails: a lost compare-and-swap is retried
    /// immediately until one succeeds.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> u64 {
        loop {
            if let Poll::Ready { value } = self.poll() {
                break value;
            }
            core::hint::spin_loop();
        }
    }

    /// Like [`Self::generate`], wrapped as a [`Timestamp`].
    pub fn next_timestamp(&self) -> Timestamp {
        Timestamp::from_raw(self.generate())
    }

    /// Makes a single attempt to reserve the next value.
    ///
    /// - If the cursor's millisecond differs from the clock's, the clock
    ///   reading wins: the cursor moves to one past it and the reading itself
    ///   (count 0) is returned.
    /// - Otherwise the cursor value is returned and the cursor advances by 1.
    ///
    /// Returns [`Poll::Pending`] if the cursor changed underneath this call.
    pub fn poll(&self) -> Poll {
        let current = self.next.load(Ordering::Acquire);
        let current_time = component_time(current);
        let mut wall = timestamp_from_ms(self.clock.current_millis());

        if wall < current_time {
            wall = self.cold_clock_behind(wall, current_time);
        }

        let (value, next) = if current_time == wall {
            // Past 2^20 values the increment carries into the time field.
            (current, current.wrapping_add(1))
        } else {
            (wall, wall + 1)
        };

        match self
            .next
            .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Poll::Ready { value },
            Err(_) => Poll::Pending,
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(&self, wall: u64, current_time: u64) -> u64 {
        #[cfg(feature = "tracing")]
        {
            let behind_ms = crate::millis_from_timestamp(current_time - wall);
            match self.policy {
                RegressionPolicy::Compat => tracing::warn!(
                    behind_ms,
                    "wall clock is behind the cursor; ordering with earlier values is lost"
                ),
                RegressionPolicy::Clamp => {
                    tracing::trace!(behind_ms, "wall clock is behind the cursor; clamping");
                }
            }
        }

        match self.policy {
            RegressionPolicy::Compat => wall,
            RegressionPolicy::Clamp => current_time,
        }
    }
}

impl<T> fmt::Debug for TimestampGenerator<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampGenerator")
            .field("next", &self.next.load(Ordering::Relaxed))
            .field("clock", &self.clock)
            .field("policy", &self.policy)
            .finish()
    }
}
