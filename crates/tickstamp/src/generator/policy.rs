use core::{fmt, str::FromStr};

use crate::Error;

/// How a [`TimestampGenerator`] reacts when the wall clock reads earlier
/// than the millisecond already recorded in its cursor.
///
/// That happens when the system clock is stepped backward, or when more than
/// 2^20 values were drawn in one millisecond and the counter carried into the
/// next one before the clock got there.
///
/// The default, [`RegressionPolicy::Compat`], follows the clock even when it
/// goes backward. [`RegressionPolicy::Clamp`] must be opted into explicitly.
///
/// Policies parse from and display as their lowercase names, so they can be
/// read straight from a host application's configuration:
///
/// ```
/// use tickstamp::RegressionPolicy;
///
/// let policy: RegressionPolicy = "Clamp".parse().unwrap();
/// assert_eq!(policy, RegressionPolicy::Clamp);
/// assert_eq!(policy.to_string(), "clamp");
/// ```
///
/// [`TimestampGenerator`]: crate::TimestampGenerator
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RegressionPolicy {
    /// Install whatever millisecond the clock reports, even an earlier one.
    ///
    /// Values issued after a backward step sort before values issued just
    /// prior to it, and after a counter carry with a stalled clock the
    /// values at the start of that millisecond are issued again.
    #[default]
    Compat,

    /// Never install a millisecond earlier than the cursor's.
    ///
    /// While the clock is behind, values keep counting up inside the
    /// cursor's millisecond until the clock catches up.
    Clamp,
}

impl RegressionPolicy {
    /// Returns the lowercase configuration name of this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Clamp => "clamp",
        }
    }
}

impl fmt::Display for RegressionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegressionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("compat") {
            Ok(Self::Compat)
        } else if s.eq_ignore_ascii_case("clamp") {
            Ok(Self::Clamp)
        } else {
            Err(Error::UnknownPolicy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_compat() {
        assert_eq!(RegressionPolicy::default(), RegressionPolicy::Compat);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("compat".parse::<RegressionPolicy>(), Ok(RegressionPolicy::Compat));
        assert_eq!(" CLAMP ".parse::<RegressionPolicy>(), Ok(RegressionPolicy::Clamp));
        assert_eq!(
            "saturate".parse::<RegressionPolicy>(),
            Err(Error::UnknownPolicy)
        );
        assert_eq!("".parse::<RegressionPolicy>(), Err(Error::UnknownPolicy));
    }

    #[test]
    fn names_round_trip() {
        for policy in [RegressionPolicy::Compat, RegressionPolicy::Clamp] {
            assert_eq!(policy.as_str().parse::<RegressionPolicy>(), Ok(policy));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&RegressionPolicy::Clamp).unwrap();
        assert_eq!(json, "\"clamp\"");
        let back: RegressionPolicy = serde_json::from_str("\"compat\"").unwrap();
        assert_eq!(back, RegressionPolicy::Compat);
        assert!(serde_json::from_str::<RegressionPolicy>("\"Clamp\"").is_err());
    }
}
