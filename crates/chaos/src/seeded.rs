//! Stateless producers keyed directly by a seed.
//!
//! Each function behaves as a fresh [`Chaos`] built from `seed`, so the
//! same arguments and seed always yield the same value and no state is
//! shared between calls. Combine with [`seed!`](crate::seed!) to key values
//! by several parts:
//!
//! ```
//! use chaos::{seed, seeded};
//!
//! let first = seeded::int(100, seed!("order-", 7));
//! assert_eq!(first, seeded::int(100, "order-7"));
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::error::ChaosError;
use crate::instance::Chaos;
use crate::num::{Float, Integer};
use crate::seed::Seed;

/// Returns an integer in `[0, n]` keyed by `seed`.
#[must_use]
pub fn int<I: Integer>(n: I, seed: impl Into<Seed>) -> I {
    Chaos::new(seed).int(n)
}

/// Returns an integer in `[min, max]` keyed by `seed`.
#[must_use]
pub fn range_int<I: Integer>(min: I, max: I, seed: impl Into<Seed>) -> I {
    Chaos::new(seed).range_int(min, max)
}

/// Returns a boolean keyed by `seed`.
#[must_use]
pub fn bool(seed: impl Into<Seed>) -> bool {
    Chaos::new(seed).bool()
}

/// Returns a duration in `[0, n]` keyed by `seed`.
#[must_use]
pub fn duration(n: TimeDelta, seed: impl Into<Seed>) -> TimeDelta {
    Chaos::new(seed).duration(n)
}

/// Returns a duration in `[min, max]` keyed by `seed`.
#[must_use]
pub fn range_duration(min: TimeDelta, max: TimeDelta, seed: impl Into<Seed>) -> TimeDelta {
    Chaos::new(seed).range_duration(min, max)
}

/// Returns an instant in the 32-bit epoch-seconds universe keyed by `seed`.
#[must_use]
pub fn time(seed: impl Into<Seed>) -> DateTime<Utc> {
    Chaos::new(seed).time()
}

/// Returns an instant in `[min, max]` keyed by `seed`.
#[must_use]
pub fn range_time(min: DateTime<Utc>, max: DateTime<Utc>, seed: impl Into<Seed>) -> DateTime<Utc> {
    Chaos::new(seed).range_time(min, max)
}

/// Returns a float in `[0, n)` keyed by `seed`.
#[must_use]
pub fn float<F: Float>(n: F, seed: impl Into<Seed>) -> F {
    Chaos::new(seed).float(n)
}

/// Returns a float in `[min, max)` keyed by `seed`.
#[must_use]
pub fn range_float<F: Float>(min: F, max: F, seed: impl Into<Seed>) -> F {
    Chaos::new(seed).range_float(min, max)
}

/// Returns an alphanumeric string of `length` characters keyed by `seed`.
#[must_use]
pub fn string(length: usize, seed: impl Into<Seed>) -> String {
    Chaos::new(seed).string(length)
}

/// Returns `length` integers in `[0, high]` keyed by `seed`.
#[must_use]
pub fn int_slice<I: Integer>(high: I, length: usize, seed: impl Into<Seed>) -> Vec<I> {
    Chaos::new(seed).int_slice(high, length)
}

/// Returns a version 4 UUID keyed by `seed`.
#[must_use]
pub fn uuid(seed: impl Into<Seed>) -> Uuid {
    Chaos::new(seed).uuid()
}

/// Returns one element of `items` keyed by `seed`.
#[must_use]
pub fn item<T: Clone + Default>(items: &[T], seed: impl Into<Seed>) -> T {
    Chaos::new(seed).item(items)
}

/// Selects `count` elements of `items` without replacement, keyed by `seed`.
///
/// # Errors
///
/// Returns [`ChaosError::NotEnoughItems`] when `count` exceeds `items.len()`.
pub fn unique_items<T: Clone>(
    items: &[T],
    count: usize,
    seed: impl Into<Seed>,
) -> Result<Vec<T>, ChaosError> {
    Chaos::new(seed).unique_items(items, count)
}

/// Selects `count` elements of `items` without replacement, keyed by `seed`.
///
/// # Panics
///
/// Panics when `count` exceeds `items.len()`.
#[must_use]
pub fn must_unique_items<T: Clone>(items: &[T], count: usize, seed: impl Into<Seed>) -> Vec<T> {
    Chaos::new(seed).must_unique_items(items, count)
}
