//! Deterministic pseudo-random values for test fixtures.
//!
//! Given a seed, this crate reproducibly yields the same sequence of
//! integers, floats, durations, timestamps, strings, UUIDs and slice
//! selections across runs, while different seeds behave like independent
//! randomness.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Seeded generator instances that advance per call or replay when fixed
//! - Typed producers over every primitive integer and float width
//! - Stateless producers keyed directly by a seed ([`seeded`])
//! - A process-wide ambient instance for call sites without one ([`global`])
//! - Seed configuration from JSON or the environment
//!
//! # Example
//!
//! ```
//! use chaos::Chaos;
//!
//! let mut chaos = Chaos::new("beta");
//! let first = chaos.int_slice(10, 5);
//! let second = chaos.int_slice(10, 5);
//!
//! assert_eq!(first.len(), 5);
//! assert!(first.iter().all(|&v| (0..=10).contains(&v)));
//! assert_ne!(first, second);
//! ```

mod config;
mod error;
pub mod global;
mod instance;
mod num;
mod produce;
mod seed;
pub mod seeded;
mod slice;

pub use config::{Config, FIXED_ENV, SEED_ENV};
pub use error::{ChaosError, ConfigError};
pub use instance::Chaos;
pub use num::{Float, Integer};
pub use seed::{Seed, derive_seed};
