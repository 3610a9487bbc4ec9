/// A result type whose error defaults to the crate [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors `tickstamp` can produce.
///
/// Generation itself is infallible. Errors only arise when parsing the value
/// types a host application reads from text, such as a stored [`Timestamp`]
/// or a configured [`RegressionPolicy`].
///
/// [`Timestamp`]: crate::Timestamp
/// [`RegressionPolicy`]: crate::RegressionPolicy
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input was not a decimal `u64`.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] core::num::ParseIntError),

    /// The input did not name a known regression policy.
    #[error("unknown regression policy (expected `compat` or `clamp`)")]
    UnknownPolicy,
}
