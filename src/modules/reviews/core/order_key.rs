// Descending-time order key for review rows.
//
// Purpose
// - Map a timestamp to a row key whose ascending string order equals
//   descending timestamp order, so "latest N reviews" is a plain forward
//   partition scan with no sort step.
//
// Responsibilities
// - Fixed-width, zero-padded decimal of the inverted microsecond tick count.
//   String comparison of two keys must equal numeric comparison.

use chrono::{DateTime, Utc};

/// Invariant: t1 < t2 implies encode(t1) > encode(t2) under byte-wise
/// comparison. The subtraction runs in i128 so the full chrono range encodes
/// without overflow; 20 digits cover the resulting value range.
pub fn encode(timestamp: DateTime<Utc>) -> String {
    let inverted = i64::MAX as i128 - timestamp.timestamp_micros() as i128;
    format!("{inverted:020}")
}

/// Sentinel for "no reviews yet": older than anything the store can hold.
pub fn min_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::MIN_UTC
}

#[cfg(test)]
mod review_order_key_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_order_keys_opposite_to_timestamps() {
        let older = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();
        assert!(encode(older) > encode(newer));
    }

    #[rstest]
    fn it_should_order_keys_for_sub_second_differences() {
        let base = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let later = base + chrono::TimeDelta::microseconds(1);
        assert!(encode(base) > encode(later));
    }

    #[rstest]
    fn it_should_produce_fixed_width_keys() {
        for timestamp in [
            min_timestamp(),
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            DateTime::<Utc>::MAX_UTC,
        ] {
            let key = encode(timestamp);
            assert_eq!(key.len(), 20, "key {key} is not fixed width");
            assert!(key.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[rstest]
    fn it_should_encode_equal_timestamps_to_equal_keys() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 3, 3, 3, 3).unwrap();
        assert_eq!(encode(timestamp), encode(timestamp));
    }

    #[rstest]
    fn it_should_sort_the_sentinel_after_every_real_timestamp() {
        let real = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert!(encode(min_timestamp()) > encode(real));
    }
}
