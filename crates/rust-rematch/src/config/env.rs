//! Environment-based configuration.
//!
//! Variables are read as `<PREFIX>_<NAME>`, with `REMATCH` as the default
//! prefix. Values are looked up through a [`VarSource`] so that tests can
//! supply a fixed set of variables instead of touching the process
//! environment.

use std::collections::HashMap;
use std::path::PathBuf;

use super::{LogFormat, RematchConfig};
use crate::error::{RematchError, Result};
use crate::matcher::PatternFlags;

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "REMATCH";

/// Where variable values come from.
#[derive(Debug, Clone, Default)]
pub enum VarSource {
    /// The process environment.
    #[default]
    Process,
    /// A fixed map of full variable names to values.
    Fixed(HashMap<String, String>),
}

impl VarSource {
    fn get(&self, name: &str) -> Option<String> {
        match self {
            Self::Process => std::env::var(name).ok(),
            Self::Fixed(vars) => vars.get(name).cloned(),
        }
    }
}

/// Environment variable reader.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Where values are read from.
    source: VarSource,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader over the process environment.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            source: VarSource::Process,
        }
    }

    /// Create a reader over a fixed set of variables.
    ///
    /// Names are full variable names, including the prefix.
    #[must_use]
    pub fn from_vars<I, K, V>(prefix: impl Into<String>, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            source: VarSource::Fixed(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value. Empty values count as unset.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        self.source
            .get(&self.var_name(name))
            .filter(|v| !v.trim().is_empty())
    }

    /// Get a string value with default.
    #[must_use]
    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    /// Get a parsed value.
    ///
    /// Returns an error naming the variable if the value does not parse.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|v| {
                v.trim().parse().map_err(|e| {
                    RematchError::config(format!("invalid {}: {e}", self.var_name(name)))
                })
            })
            .transpose()
    }

    /// Get a boolean value.
    #[must_use]
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).map(|v| {
            matches!(
                v.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on" | "enabled"
            )
        })
    }

    /// Get the configuration file path (`<PREFIX>_CONFIG`).
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.get("CONFIG").map(PathBuf::from)
    }

    /// Override configuration values from the environment.
    ///
    /// Recognised variables: `FLAGS`, `SIZE_LIMIT`, `DFA_SIZE_LIMIT`,
    /// `NEST_LIMIT`, `CACHE_SIZE`, `LOG` and `LOG_FORMAT`.
    pub fn apply(&self, config: &mut RematchConfig) -> Result<()> {
        if let Some(flags) = self.get("FLAGS") {
            config.compile.flags = PatternFlags::parse_list(&flags)?;
        }
        if let Some(bytes) = self.parse::<usize>("SIZE_LIMIT")? {
            config.compile.size_limit = Some(bytes);
        }
        if let Some(bytes) = self.parse::<usize>("DFA_SIZE_LIMIT")? {
            config.compile.dfa_size_limit = Some(bytes);
        }
        if let Some(depth) = self.parse::<u32>("NEST_LIMIT")? {
            config.compile.nest_limit = Some(depth);
        }
        if let Some(capacity) = self.parse::<usize>("CACHE_SIZE")? {
            config.cache.capacity = capacity;
        }
        if let Some(level) = self.get("LOG") {
            config.logging.level = level;
        }
        if let Some(format) = self.parse::<LogFormat>("LOG_FORMAT")? {
            config.logging.format = format;
        }
        Ok(())
    }
}
