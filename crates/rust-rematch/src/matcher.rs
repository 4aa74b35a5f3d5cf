//! Pattern matching module.
//!
//! This module provides compiled patterns, match results, anchors, matching
//! flags and the pattern cache.

mod anchor;
mod cache;
mod flags;
mod matches;
mod pattern;

pub use anchor::Anchor;
pub use cache::{CacheStats, GLOBAL_CACHE, PatternCache, get_pattern};
pub use flags::PatternFlags;
pub use matches::{MatchResult, Matches};
pub use pattern::{Pattern, PatternBuilder};

/// Escape every metacharacter in `text` so it matches literally.
#[must_use]
pub fn escape(text: &str) -> String {
    regex::escape(text)
}
