//! Generator configuration.
//!
//! A [`Config`] names the seed and fixed flag for a generator. It can be
//! parsed from JSON, loaded from a file, or read from the `CHAOS_SEED` and
//! `CHAOS_FIXED` environment variables, which is how the process-wide default
//! instance in [`crate::global`] is initialised.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the default seed.
pub const SEED_ENV: &str = "CHAOS_SEED";

/// Environment variable holding the default fixed flag.
pub const FIXED_ENV: &str = "CHAOS_FIXED";

/// Seed and mode for a generator instance.
///
/// Both fields are optional in JSON and default to an empty seed and an
/// unfixed generator.
///
/// # Example
///
/// ```
/// use chaos::{Chaos, Config};
///
/// let config = Config::from_json(r#"{"seed": "fixture-7", "fixed": true}"#)
///     .expect("valid config");
/// let mut chaos = Chaos::from_config(&config);
/// assert_eq!(chaos.int(1_000), chaos.int(1_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Base seed text.
    pub seed: String,
    /// Whether the generator starts fixed.
    pub fixed: bool,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlag`] if `CHAOS_FIXED` is set to an
    /// unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlag`] if the fixed flag is set to a
    /// value other than `true`, `false`, `1` or `0` (case-insensitive).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup(SEED_ENV).unwrap_or_default();
        let fixed = lookup(FIXED_ENV).map_or(Ok(false), |value| parse_flag(FIXED_ENV, &value))?;
        Ok(Self { seed, fixed })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}
