//! Ambient default generator.
//!
//! Call sites can produce values without carrying a [`Chaos`] by using the
//! free functions here. One active instance is shared by the whole process.
//! It is built from [`Config::from_env`] on first use. Replace it with
//! [`set`] and toggle its mode with [`fix`] and [`unfix`].
//!
//! Each call locks the instance, so concurrent callers never corrupt it.
//! Interleaving is still observable: callers that need a reproducible
//! sequence across threads must serialise externally or pass their own
//! [`Chaos`].
//!
//! ```
//! use chaos::{Chaos, global};
//!
//! global::set(Chaos::new("ambient"));
//! global::fix();
//! assert_eq!(global::int(100), global::int(100));
//! ```

use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::ChaosError;
use crate::instance::Chaos;
use crate::num::{Float, Integer};

static ACTIVE: OnceLock<Mutex<Chaos>> = OnceLock::new();

fn initial() -> Chaos {
    let config = Config::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "ignoring invalid chaos environment; using defaults");
        Config::default()
    });
    Chaos::from_config(&config)
}

/// Runs `f` against the active instance while holding its lock.
///
/// A lock poisoned by a panicking caller is recovered. Calling any function
/// of this module from inside `f` deadlocks.
pub fn with<R>(f: impl FnOnce(&mut Chaos) -> R) -> R {
    let mut active = ACTIVE
        .get_or_init(|| Mutex::new(initial()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());
    f(&mut active)
}

/// Replaces the active instance for the whole process.
pub fn set(chaos: Chaos) {
    debug!(seed = %chaos.seed(), fixed = chaos.is_fixed(), "replacing active chaos instance");
    with(|active| *active = chaos);
}

/// Returns a snapshot of the active instance.
#[must_use]
pub fn active() -> Chaos {
    with(|active| active.clone())
}

/// Fixes the active instance so every call replays the same stream.
pub fn fix() {
    debug!("fixing active chaos instance");
    with(Chaos::fix);
}

/// Resumes advancing the active instance on each call.
pub fn unfix() {
    debug!("unfixing active chaos instance");
    with(Chaos::unfix);
}

/// Returns an integer in `[0, n]` from the active instance.
#[must_use]
pub fn int<I: Integer>(n: I) -> I {
    with(|c| c.int(n))
}

/// Returns an integer in `[min, max]` from the active instance.
#[must_use]
pub fn range_int<I: Integer>(min: I, max: I) -> I {
    with(|c| c.range_int(min, max))
}

/// Returns a boolean from the active instance.
#[must_use]
pub fn bool() -> bool {
    with(Chaos::bool)
}

/// Returns a duration in `[0, n]` from the active instance.
#[must_use]
pub fn duration(n: TimeDelta) -> TimeDelta {
    with(|c| c.duration(n))
}

/// Returns a duration in `[min, max]` from the active instance.
#[must_use]
pub fn range_duration(min: TimeDelta, max: TimeDelta) -> TimeDelta {
    with(|c| c.range_duration(min, max))
}

/// Returns an instant in the 32-bit epoch-seconds universe.
#[must_use]
pub fn time() -> DateTime<Utc> {
    with(Chaos::time)
}

/// Returns an instant in `[min, max]` from the active instance.
#[must_use]
pub fn range_time(min: DateTime<Utc>, max: DateTime<Utc>) -> DateTime<Utc> {
    with(|c| c.range_time(min, max))
}

/// Returns a float in `[0, n)` from the active instance.
#[must_use]
pub fn float<F: Float>(n: F) -> F {
    with(|c| c.float(n))
}

/// Returns a float in `[min, max)` from the active instance.
#[must_use]
pub fn range_float<F: Float>(min: F, max: F) -> F {
    with(|c| c.range_float(min, max))
}

/// Returns an alphanumeric string of `length` characters.
#[must_use]
pub fn string(length: usize) -> String {
    with(|c| c.string(length))
}

/// Returns `length` integers in `[0, high]` from the active instance.
#[must_use]
pub fn int_slice<I: Integer>(high: I, length: usize) -> Vec<I> {
    with(|c| c.int_slice(high, length))
}

/// Returns a version 4 UUID from the active instance.
#[must_use]
pub fn uuid() -> Uuid {
    with(Chaos::uuid)
}

/// Returns one element of `items` from the active instance.
#[must_use]
pub fn item<T: Clone + Default>(items: &[T]) -> T {
    with(|c| c.item(items))
}

/// Selects `count` elements of `items` without replacement.
///
/// # Errors
///
/// Returns [`ChaosError::NotEnoughItems`] when `count` exceeds `items.len()`.
pub fn unique_items<T: Clone>(items: &[T], count: usize) -> Result<Vec<T>, ChaosError> {
    with(|c| c.unique_items(items, count))
}

/// Selects `count` elements of `items` without replacement.
///
/// # Panics
///
/// Panics when `count` exceeds `items.len()`.
#[must_use]
pub fn must_unique_items<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    with(|c| c.must_unique_items(items, count))
}
