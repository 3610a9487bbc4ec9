/// Number of high bits holding milliseconds since the Unix epoch.
///
/// 44 bits of milliseconds cover roughly 557 years from 1970.
pub const TIME_BITS: u32 = 44;

/// Number of low bits holding the per-millisecond counter.
///
/// 20 bits allow 1,048,576 values per millisecond.
pub const COUNT_BITS: u32 = 20;

const _: () = assert!(
    TIME_BITS + COUNT_BITS == u64::BITS,
    "time and count fields must fill exactly 64 bits"
);

/// Bitmask selecting the time component. Occupies bits 20 through 63.
pub const TIME_MASK: u64 = !0 << COUNT_BITS;

/// Bitmask selecting the count component. Occupies bits 0 through 19.
pub const COUNT_MASK: u64 = !0 >> TIME_BITS;

/// Largest value the count component can hold.
pub const MAX_COUNT: u64 = COUNT_MASK;

/// Converts milliseconds since the Unix epoch into a packed value with a zero
/// count component.
///
/// Milliseconds beyond the 44-bit range are truncated by the shift.
///
/// ```
/// use tickstamp::{COUNT_BITS, timestamp_from_ms};
///
/// assert_eq!(timestamp_from_ms(1), 1 << COUNT_BITS);
/// ```
#[inline]
#[must_use]
pub const fn timestamp_from_ms(ms: u64) -> u64 {
    ms << COUNT_BITS
}

/// Returns the milliseconds encoded in the time component of `value`.
#[inline]
#[must_use]
pub const fn millis_from_timestamp(value: u64) -> u64 {
    value >> COUNT_BITS
}

/// Returns `value` with its count component cleared.
///
/// The result is still in packed form, so it compares directly against
/// [`timestamp_from_ms`] and [`now`].
///
/// [`now`]: crate::now
#[inline]
#[must_use]
pub const fn component_time(value: u64) -> u64 {
    value & TIME_MASK
}

/// Returns the low 20-bit counter of `value`.
#[inline]
#[must_use]
pub const fn component_count(value: u64) -> u64 {
    value & COUNT_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_partition_the_word() {
        assert_eq!(TIME_MASK & COUNT_MASK, 0);
        assert_eq!(TIME_MASK | COUNT_MASK, u64::MAX);
        assert_eq!(COUNT_MASK, (1 << 20) - 1);
        assert_eq!(TIME_MASK.count_ones(), TIME_BITS);
    }

    #[test]
    fn decomposition_round_trips_millis() {
        for ms in [0, 1, 42, 1_700_000_000_000, (1 << TIME_BITS) - 1] {
            let packed = timestamp_from_ms(ms);
            assert_eq!(component_time(packed), packed);
            assert_eq!(component_count(packed), 0);
            assert_eq!(millis_from_timestamp(packed), ms);
        }
    }

    #[test]
    fn components_split_a_packed_value() {
        let value = timestamp_from_ms(1_700_000_000_000) + 7;
        assert_eq!(component_time(value), 1_700_000_000_000 << 20);
        assert_eq!(component_count(value), 7);
        assert_eq!(component_time(value) | component_count(value), value);
    }

    #[test]
    fn millis_past_the_time_field_are_truncated() {
        let ms = 1 << TIME_BITS;
        assert_eq!(timestamp_from_ms(ms), 0);
        assert_eq!(timestamp_from_ms(ms + 3), timestamp_from_ms(3));
    }
}
