/// The outcome of a single generation attempt.
///
/// Returned by [`TimestampGenerator::poll`], which performs exactly one
/// compare-and-swap on the generator's cursor:
///
/// - [`Poll::Ready`] carries a freshly reserved value.
/// - [`Poll::Pending`] means another caller moved the cursor first (or the
///   swap failed spuriously). Nothing was reserved; call again.
///
/// [`TimestampGenerator::generate`] simply repeats the attempt until it is
/// ready, which is what most callers want.
///
/// # Example
///
/// ```
/// use tickstamp::{Poll, TimestampGenerator};
///
/// let generator = TimestampGenerator::new();
/// let value = loop {
///     match generator.poll() {
///         Poll::Ready { value } => break value,
///         Poll::Pending => core::hint::spin_loop(),
///     }
/// };
/// assert!(value > 0);
/// ```
///
/// [`TimestampGenerator::poll`]: crate::TimestampGenerator::poll
/// [`TimestampGenerator::generate`]: crate::TimestampGenerator::generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Poll {
    /// A unique value was reserved and is ready to use.
    Ready {
        /// The packed timestamp.
        value: u64,
    },
    /// The attempt lost a race on the cursor; retry immediately.
    Pending,
}

impl Poll {
    /// Returns the reserved value, if any.
    pub const fn ready(self) -> Option<u64> {
        match self {
            Self::Ready { value } => Some(value),
            Self::Pending => None,
        }
    }
}
