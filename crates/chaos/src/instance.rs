//! The seeded generator instance.
//!
//! A [`Chaos`] holds a base seed, a call counter and a fixed flag. Every
//! value request goes through [`Chaos::rand`], which derives a numeric seed
//! from `"<base seed>-<counter>"` and builds a fresh uniform generator from
//! it. Output therefore depends only on the seed and the counter, never on
//! which producers were called before.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::config::Config;
use crate::seed::{Seed, derive_seed};

/// A deterministic generator of pseudo-random values.
///
/// Unfixed instances advance their counter on every call, so successive
/// calls yield distinct values. Fixed instances replay the current counter,
/// so the same producer called with the same arguments returns the same
/// value.
///
/// Instances hold no internal locking. Share one across threads only behind
/// external synchronisation.
///
/// # Example
///
/// ```
/// use chaos::Chaos;
///
/// let mut chaos = Chaos::new("alpha");
/// chaos.fix();
/// let first = chaos.int(100);
/// assert_eq!(first, chaos.int(100));
/// assert!((0..=100).contains(&first));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chaos {
    seed: Seed,
    counter: u64,
    fixed: bool,
}

impl Chaos {
    /// Creates an unfixed instance with its counter at zero.
    #[must_use]
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            counter: 0,
            fixed: false,
        }
    }

    /// Creates an instance from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut chaos = Self::new(config.seed.as_str());
        if config.fixed {
            chaos.fix();
        }
        chaos
    }

    /// Returns the base seed.
    #[must_use]
    pub const fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Returns the current call counter.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Returns `true` while the instance is fixed.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Freezes the counter so every call replays the same derived seed.
    pub const fn fix(&mut self) {
        self.fixed = true;
    }

    /// Resumes advancing the counter on each call.
    pub const fn unfix(&mut self) {
        self.fixed = false;
    }

    /// Returns a fresh uniform generator for one value request.
    ///
    /// Advances the counter first unless the instance is fixed. This is the
    /// only place instance state changes.
    pub fn rand(&mut self) -> ChaCha8Rng {
        if !self.fixed {
            self.counter = self.counter.wrapping_add(1);
        }
        let derived = derive_seed(&format!("{}-{}", self.seed, self.counter));
        trace!(
            seed = %self.seed,
            counter = self.counter,
            derived,
            "derived uniform generator seed"
        );
        ChaCha8Rng::seed_from_u64(derived)
    }
}
