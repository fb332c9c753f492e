//! Numeric widths accepted by the typed producers.
//!
//! The traits are sealed: producers are generic over the primitive integer
//! and float types only.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use rand::Rng;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type that can be sampled over an inclusive range.
pub trait Integer: sealed::Sealed + Copy + PartialOrd + Debug {
    /// The additive identity.
    const ZERO: Self;

    /// Samples a value in `[low, high]`. Callers guarantee `low <= high`.
    fn sample_inclusive<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self;
}

/// A primitive float type that can be sampled from `[0, 1)`.
pub trait Float:
    sealed::Sealed
    + Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The multiplicative identity.
    const ONE: Self;

    /// Samples a value in the half-open unit interval.
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Integer for $ty {
            const ZERO: Self = 0;

            fn sample_inclusive<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
                rng.random_range(low..=high)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Float for $ty {
            const ONE: Self = 1.0;

            fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.random()
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl sealed::Sealed for isize {}

/// Sampled through `i64`, which holds every `isize` on supported targets.
impl Integer for isize {
    const ZERO: Self = 0;

    fn sample_inclusive<R: Rng + ?Sized>(rng: &mut R, low: Self, high: Self) -> Self {
        let wide_low = i64::try_from(low).unwrap_or(i64::MIN);
        let wide_high = i64::try_from(high).unwrap_or(i64::MAX);
        Self::try_from(rng.random_range(wide_low..=wide_high)).unwrap_or(low)
    }
}
