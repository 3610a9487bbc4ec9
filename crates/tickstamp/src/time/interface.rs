/// A source of wall-clock time in whole milliseconds since the Unix epoch.
///
/// [`TimestampGenerator`] reads the clock through this trait so that callers
/// can plug in the system clock, a coarser cached clock, or a mocked time
/// source in tests.
///
/// # Example
///
/// ```
/// use tickstamp::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1_700_000_000_000
///     }
/// }
///
/// assert_eq!(FixedTime.current_millis(), 1_700_000_000_000);
/// ```
///
/// [`TimestampGenerator`]: crate::TimestampGenerator
pub trait TimeSource {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> u64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_millis(&self) -> u64 {
        (**self).current_millis()
    }
}
