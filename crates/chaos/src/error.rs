//! Error types for the chaos crate.
//!
//! This module defines semantic error enums for value selection and seed
//! configuration, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing values from a generator.
///
/// Every scalar producer is total over its input domain; only selection
/// without replacement can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChaosError {
    /// A unique selection asked for more items than the source holds.
    #[error("not enough items to select from: {available} < {requested}")]
    NotEnoughItems {
        /// Number of items requested.
        requested: usize,
        /// Number of items available in the source collection.
        available: usize,
    },
}

/// Errors that can occur when loading a generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file at '{path}': {message}")]
    IoError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The configuration JSON is malformed.
    #[error("invalid config JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// A boolean environment flag holds an unrecognised value.
    #[error("invalid value for {name}: '{value}' (expected true, false, 1 or 0)")]
    InvalidFlag {
        /// Name of the environment variable.
        name: String,
        /// The rejected value.
        value: String,
    },
}
