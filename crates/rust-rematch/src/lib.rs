//! rust-rematch: compile-once regular expression matching
//!
//! This crate wraps the [`regex`] engine in a small pattern-matching surface:
//! compile a [`Pattern`] once, then substitute, transform, collect, iterate
//! and anchor matches against any number of subjects.
//!
//! # Features
//!
//! - **Literal and transform substitution** with borrowed results when nothing matches
//! - **Match iteration** with byte and code-point offsets and capture groups
//! - **Anchored queries** at the start, end or across the whole subject
//! - **Pattern cache** and one-call helpers in [`quick`]
//! - **Compile-time validated patterns** via [`pattern!`]
//!
//! # Example
//!
//! ```
//! use rust_rematch::prelude::*;
//!
//! let text = "This is a sample text";
//!
//! let upper = Pattern::new(r"[a-z]")?.substitute_with(text, |m| m.as_str().to_uppercase());
//! assert_eq!(upper, "THIS IS A SAMPLE TEXT");
//!
//! let m = Pattern::new(r"t$")?.match_at(text, Anchor::End).unwrap();
//! assert_eq!((m.as_str(), m.start(), m.end()), ("t", 20, 21));
//! # Ok::<(), RematchError>(())
//! ```

// Re-export macros
pub use rust_rematch_macros::pattern;

pub mod config;
pub mod error;
pub mod matcher;
pub mod prelude;
pub mod quick;

pub use config::{
    CacheConfig, CompileConfig, LogFormat, LoggingConfig, RematchConfig,
    env::EnvConfig,
    file::{ConfigFormat, load_config, load_document, parse_config},
};
pub use error::{RematchError, Result};
pub use matcher::{
    Anchor, CacheStats, GLOBAL_CACHE, MatchResult, Matches, Pattern, PatternBuilder, PatternCache,
    PatternFlags, escape, get_pattern,
};
