//! Configuration types for rust-rematch.
//!
//! This module defines the configuration for compiling patterns, sizing the
//! pattern cache, and logging. A [`RematchConfig`] is usually loaded from a
//! file (see [`file`]) and then overridden from `REMATCH_*` environment
//! variables (see [`env`]).

pub mod env;
pub mod file;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RematchError;
use crate::matcher::PatternFlags;

/// Default maximum number of patterns held by a pattern cache.
pub const DEFAULT_CACHE_SIZE: usize = 100;

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RematchConfig {
    /// How patterns are compiled.
    pub compile: CompileConfig,

    /// Pattern cache configuration.
    pub cache: CacheConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl RematchConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compile configuration.
    #[must_use]
    pub const fn compile(mut self, compile: CompileConfig) -> Self {
        self.compile = compile;
        self
    }

    /// Set the cache configuration.
    #[must_use]
    pub const fn cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Set the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

/// Flags and engine limits applied when compiling patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Flags added to every pattern.
    pub flags: PatternFlags,

    /// Maximum size of a compiled program in bytes (engine default if unset).
    pub size_limit: Option<usize>,

    /// Maximum size of the lazy DFA cache in bytes (engine default if unset).
    pub dfa_size_limit: Option<usize>,

    /// Maximum nesting depth of groups and repetitions.
    pub nest_limit: Option<u32>,
}

impl CompileConfig {
    /// Create a compile configuration with the given default flags.
    #[must_use]
    pub const fn new(flags: PatternFlags) -> Self {
        Self {
            flags,
            size_limit: None,
            dfa_size_limit: None,
            nest_limit: None,
        }
    }

    /// Set the compiled program size limit.
    #[must_use]
    pub const fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Set the lazy DFA cache size limit.
    #[must_use]
    pub const fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Set the nesting limit.
    #[must_use]
    pub const fn nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = Some(depth);
        self
    }
}

/// Configuration for a pattern cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Maximum number of cached patterns.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_SIZE,
        }
    }
}

impl CacheConfig {
    /// Create a cache configuration with the given capacity.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `rust_rematch=trace`.
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the log format.
    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one event per line with all fields.
    #[default]
    Full,

    /// Shorter human-readable lines.
    Compact,

    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Get the format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = RematchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            "json" | "ndjson" => Ok(Self::Json),
            other => Err(RematchError::config(format!("unknown log format: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RematchConfig::default();
        assert_eq!(config.cache.capacity, DEFAULT_CACHE_SIZE);
        assert_eq!(config.compile.flags, PatternFlags::empty());
        assert_eq!(config.compile.size_limit, None);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Full);
    }

    #[test]
    fn builders() {
        let config = RematchConfig::new()
            .compile(
                CompileConfig::new(PatternFlags::CASE_INSENSITIVE)
                    .size_limit(1 << 20)
                    .nest_limit(64),
            )
            .cache(CacheConfig::new(8))
            .logging(LoggingConfig::new().level("debug").format(LogFormat::Json));

        assert_eq!(config.compile.flags, PatternFlags::CASE_INSENSITIVE);
        assert_eq!(config.compile.size_limit, Some(1 << 20));
        assert_eq!(config.compile.nest_limit, Some(64));
        assert_eq!(config.cache.capacity, 8);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
    }
}
