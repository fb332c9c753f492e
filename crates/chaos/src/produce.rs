//! Typed value producers.
//!
//! Each producer makes at most one [`Chaos::rand`] call unless its
//! documentation says otherwise. Integer and duration bounds at or below
//! zero short-circuit to zero without consuming randomness, so `int(0)` and
//! its callers draw nothing.

use chrono::{DateTime, TimeDelta, Utc};
use rand::RngCore;
use uuid::{Builder, Uuid};

use crate::instance::Chaos;
use crate::num::{Float, Integer};

/// Characters used by [`Chaos::string`].
const ALPHANUMERIC: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Last second of the [`Chaos::time`] universe, `2^32 - 1` seconds after the epoch.
const TIME_SPAN_SECONDS: i64 = 4_294_967_295;

impl Chaos {
    /// Returns an integer in `[0, n]`.
    ///
    /// Returns zero without consuming randomness when `n <= 0`.
    ///
    /// ```
    /// use chaos::Chaos;
    ///
    /// let mut chaos = Chaos::new("docs");
    /// assert!(chaos.int(10_u8) <= 10);
    /// assert_eq!(chaos.int(-5_i32), 0);
    /// assert_eq!(chaos.counter(), 1);
    /// ```
    pub fn int<I: Integer>(&mut self, n: I) -> I {
        if n <= I::ZERO {
            return I::ZERO;
        }
        I::sample_inclusive(&mut self.rand(), I::ZERO, n)
    }

    /// Returns an integer in `[min, max]`, swapping reversed bounds.
    pub fn range_int<I: Integer>(&mut self, min: I, max: I) -> I {
        let (low, high) = if min > max { (max, min) } else { (min, max) };
        I::sample_inclusive(&mut self.rand(), low, high)
    }

    /// Returns a boolean derived from an integer draw in `[0, 1]`.
    pub fn bool(&mut self) -> bool {
        self.int(1_u8) == 0
    }

    /// Returns a duration in `[0, n]` at nanosecond resolution.
    ///
    /// Non-positive `n` yields zero. Bounds beyond the `i64` nanosecond range
    /// (about 292 years) saturate.
    pub fn duration(&mut self, n: TimeDelta) -> TimeDelta {
        TimeDelta::nanoseconds(self.int(saturating_nanos(n)))
    }

    /// Returns a duration in `[min, max]`, swapping reversed bounds.
    pub fn range_duration(&mut self, min: TimeDelta, max: TimeDelta) -> TimeDelta {
        TimeDelta::nanoseconds(self.range_int(saturating_nanos(min), saturating_nanos(max)))
    }

    /// Returns a whole-second instant between the Unix epoch and
    /// 2106-02-07 06:28:15 UTC inclusive.
    pub fn time(&mut self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.int(TIME_SPAN_SECONDS), 0).unwrap_or_default()
    }

    /// Returns a whole-second instant in `[min, max]`.
    ///
    /// Sub-second parts of the bounds are discarded before sampling.
    pub fn range_time(&mut self, min: DateTime<Utc>, max: DateTime<Utc>) -> DateTime<Utc> {
        let secs = self.range_int(min.timestamp(), max.timestamp());
        DateTime::from_timestamp(secs, 0).unwrap_or(min)
    }

    /// Returns a float in `[0, n)`; negative `n` mirrors the interval.
    pub fn float<F: Float>(&mut self, n: F) -> F {
        F::sample_unit(&mut self.rand()) * n
    }

    /// Returns a float in `[min, max)` for finite bounds.
    ///
    /// Interpolates between the bounds with one unit draw, so spans wider
    /// than `F::MAX` stay finite. Reversed bounds yield `(max, min]`.
    pub fn range_float<F: Float>(&mut self, min: F, max: F) -> F {
        let unit = F::sample_unit(&mut self.rand());
        let value = min * (F::ONE - unit) + max * unit;
        if min < max && value >= max { min } else { value }
    }

    /// Returns `length` characters drawn from `[a-zA-Z0-9]`.
    ///
    /// Consumes one draw per character.
    #[expect(
        clippy::indexing_slicing,
        reason = "index is drawn from [0, ALPHANUMERIC.len() - 1]"
    )]
    pub fn string(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| char::from(ALPHANUMERIC[self.int(ALPHANUMERIC.len() - 1)]))
            .collect()
    }

    /// Returns `length` independent integers in `[0, high]`.
    ///
    /// Consumes one draw per element when `high > 0` and none otherwise.
    pub fn int_slice<I: Integer>(&mut self, high: I, length: usize) -> Vec<I> {
        (0..length).map(|_| self.int(high)).collect()
    }

    /// Returns a version 4, RFC 4122 variant UUID.
    pub fn uuid(&mut self) -> Uuid {
        let mut bytes = [0_u8; 16];
        self.rand().fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// Converts a duration to nanoseconds, saturating at the `i64` bounds.
fn saturating_nanos(delta: TimeDelta) -> i64 {
    delta.num_nanoseconds().unwrap_or_else(|| {
        if delta < TimeDelta::zero() {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};
    use uuid::{Variant, Version};

    use super::*;

    #[fixture]
    fn fixed() -> Chaos {
        let mut chaos = Chaos::new("fixed-producers");
        chaos.fix();
        chaos
    }

    #[fixture]
    fn unfixed() -> Chaos {
        Chaos::new("unfixed-producers")
    }

    #[rstest]
    fn fixed_int_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.int(100), fixed.int(100));
    }

    #[rstest]
    fn unfixed_int_yields_distinct_values(mut unfixed: Chaos) {
        let values: HashSet<i64> = (0..1000).map(|_| unfixed.int(i64::MAX)).collect();
        assert_eq!(values.len(), 1000);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(10)]
    #[case(i64::from(i32::MAX))]
    fn int_stays_within_bound(mut unfixed: Chaos, #[case] n: i64) {
        for _ in 0..200 {
            let value = unfixed.int(n);
            assert!((0..=n).contains(&value), "{value} outside [0, {n}]");
        }
    }

    #[rstest]
    #[case(0_i32)]
    #[case(-10_i32)]
    #[case(i32::MIN)]
    fn non_positive_bound_yields_zero_without_draw(mut unfixed: Chaos, #[case] n: i32) {
        assert_eq!(unfixed.int(n), 0);
        assert_eq!(unfixed.counter(), 0);
    }

    #[rstest]
    fn int_reaches_its_upper_bound(mut unfixed: Chaos) {
        let seen: HashSet<u8> = (0..500).map(|_| unfixed.int(3_u8)).collect();
        assert_eq!(seen, HashSet::from([0, 1, 2, 3]));
    }

    #[rstest]
    #[case(-5, 5)]
    #[case(5, -5)]
    #[case(7, 7)]
    #[case(i64::MIN, i64::MAX)]
    fn range_int_stays_within_bounds(mut unfixed: Chaos, #[case] min: i64, #[case] max: i64) {
        let (low, high) = (min.min(max), min.max(max));
        for _ in 0..200 {
            let value = unfixed.range_int(min, max);
            assert!((low..=high).contains(&value));
        }
    }

    #[rstest]
    fn bool_produces_both_values(mut unfixed: Chaos) {
        let seen: HashSet<bool> = (0..100).map(|_| unfixed.bool()).collect();
        assert_eq!(seen.len(), 2);
    }

    #[rstest]
    fn fixed_bool_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.bool(), fixed.bool());
    }

    #[rstest]
    fn duration_stays_within_bound(mut unfixed: Chaos) {
        let hour = TimeDelta::hours(1);
        for _ in 0..200 {
            let value = unfixed.duration(hour);
            assert!(value >= TimeDelta::zero() && value <= hour);
        }
    }

    #[rstest]
    #[case(TimeDelta::zero())]
    #[case(TimeDelta::seconds(-30))]
    fn non_positive_duration_yields_zero(mut unfixed: Chaos, #[case] n: TimeDelta) {
        assert_eq!(unfixed.duration(n), TimeDelta::zero());
    }

    #[rstest]
    fn range_duration_swaps_reversed_bounds(mut unfixed: Chaos) {
        let low = TimeDelta::minutes(1);
        let high = TimeDelta::minutes(2);
        for _ in 0..100 {
            let value = unfixed.range_duration(high, low);
            assert!(value >= low && value <= high);
        }
    }

    #[rstest]
    fn duration_saturates_beyond_nanosecond_range(mut fixed: Chaos) {
        let value = fixed.duration(TimeDelta::MAX);
        assert!(value >= TimeDelta::zero());
    }

    #[rstest]
    fn time_stays_within_universe(mut unfixed: Chaos) {
        let last = DateTime::from_timestamp(TIME_SPAN_SECONDS, 0).expect("valid timestamp");
        for _ in 0..200 {
            let value = unfixed.time();
            assert!(value >= DateTime::<Utc>::default() && value <= last);
        }
    }

    #[rstest]
    fn fixed_time_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.time(), fixed.time());
    }

    #[rstest]
    fn range_time_stays_within_bounds(mut unfixed: Chaos) {
        let min = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let max = DateTime::from_timestamp(1_700_086_400, 0).expect("valid timestamp");
        for _ in 0..200 {
            let value = unfixed.range_time(min, max);
            assert!(value >= min && value <= max);
        }
    }

    #[rstest]
    fn range_time_swaps_reversed_bounds(mut unfixed: Chaos) {
        let min = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let max = DateTime::from_timestamp(1_700_000_060, 0).expect("valid timestamp");
        for _ in 0..200 {
            let value = unfixed.range_time(max, min);
            assert!(value >= min && value <= max);
        }
    }

    #[rstest]
    fn reversed_range_time_matches_ordered_draw() {
        let min = DateTime::from_timestamp(1_600_000_000, 0).expect("valid timestamp");
        let max = DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
        let mut ordered = Chaos::new("time-order");
        let mut reversed = Chaos::new("time-order");
        assert_eq!(ordered.range_time(min, max), reversed.range_time(max, min));
    }

    #[rstest]
    fn isize_int_stays_within_bound(mut unfixed: Chaos) {
        for _ in 0..200 {
            assert!((0..=7).contains(&unfixed.int(7_isize)));
        }
        assert_eq!(unfixed.int(-7_isize), 0);
    }

    #[rstest]
    fn float_stays_within_half_open_bound(mut unfixed: Chaos) {
        for _ in 0..200 {
            let value = unfixed.float(10.0_f64);
            assert!((0.0..10.0).contains(&value));
        }
    }

    #[rstest]
    fn negative_float_bound_mirrors_interval(mut unfixed: Chaos) {
        for _ in 0..200 {
            let value = unfixed.float(-10.0_f32);
            assert!(value <= 0.0 && value > -10.0);
        }
    }

    #[rstest]
    fn zero_float_bound_yields_zero(mut unfixed: Chaos) {
        assert!(unfixed.float(0.0_f64).abs() < f64::EPSILON);
    }

    #[rstest]
    fn tiny_float_bound_is_respected(mut unfixed: Chaos) {
        let n = 1e-10_f64;
        let value = unfixed.float(n);
        assert!((0.0..n).contains(&value));
    }

    #[rstest]
    fn range_float_stays_within_bounds(mut unfixed: Chaos) {
        for _ in 0..200 {
            let value = unfixed.range_float(-2.5_f64, 2.5);
            assert!((-2.5..2.5).contains(&value));
        }
    }

    #[rstest]
    fn full_width_range_float_stays_finite(mut unfixed: Chaos) {
        for _ in 0..200 {
            let value = unfixed.range_float(f64::MIN, f64::MAX);
            assert!(value.is_finite());
            assert!((f64::MIN..f64::MAX).contains(&value));
        }
    }

    #[rstest]
    fn range_float_draws_once(mut unfixed: Chaos) {
        let _ = unfixed.range_float(0.0_f32, 1.0);
        assert_eq!(unfixed.counter(), 1);
    }

    #[rstest]
    fn fixed_float_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.float(1.0_f64).to_bits(), fixed.float(1.0_f64).to_bits());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(64)]
    fn string_has_requested_length(mut unfixed: Chaos, #[case] length: usize) {
        let value = unfixed.string(length);
        assert_eq!(value.chars().count(), length);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[rstest]
    fn empty_string_consumes_nothing(mut unfixed: Chaos) {
        assert_eq!(unfixed.string(0), "");
        assert_eq!(unfixed.counter(), 0);
    }

    #[rstest]
    fn string_draws_once_per_character(mut unfixed: Chaos) {
        let _ = unfixed.string(12);
        assert_eq!(unfixed.counter(), 12);
    }

    #[rstest]
    fn fixed_string_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.string(16), fixed.string(16));
    }

    #[rstest]
    fn int_slice_respects_length_and_bound(mut unfixed: Chaos) {
        let values = unfixed.int_slice(10_usize, 50);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|&v| v <= 10));
        assert_eq!(unfixed.counter(), 50);
    }

    #[rstest]
    fn zero_bound_int_slice_draws_nothing(mut unfixed: Chaos) {
        assert_eq!(unfixed.int_slice(0_u16, 4), [0, 0, 0, 0]);
        assert_eq!(unfixed.counter(), 0);
    }

    #[rstest]
    fn empty_int_slice_is_empty(mut unfixed: Chaos) {
        assert!(unfixed.int_slice(10, 0).is_empty());
    }

    #[rstest]
    fn uuid_is_version_four(mut unfixed: Chaos) {
        for _ in 0..50 {
            let id = unfixed.uuid();
            assert_eq!(id.get_version(), Some(Version::Random));
            assert_eq!(id.get_variant(), Variant::RFC4122);
        }
    }

    #[rstest]
    fn fixed_uuid_is_repeatable(mut fixed: Chaos) {
        assert_eq!(fixed.uuid(), fixed.uuid());
    }

    #[rstest]
    fn unfixed_uuids_are_distinct(mut unfixed: Chaos) {
        assert_ne!(unfixed.uuid(), unfixed.uuid());
    }
}
