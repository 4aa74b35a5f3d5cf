//! One-call helpers that take a pattern source string.
//!
//! Each helper compiles through [`GLOBAL_CACHE`](crate::matcher::GLOBAL_CACHE),
//! so repeating a call with the same source compiles it only once. Use
//! [`Pattern`] directly when flags or limits are needed.
//!
//! # Example
//!
//! ```
//! let text = rust_rematch::quick::substitute_all(r"\s", "This is a sample text", "-")?;
//! assert_eq!(text, "This-is-a-sample-text");
//! # Ok::<(), rust_rematch::RematchError>(())
//! ```

use crate::error::Result;
use crate::matcher::{Anchor, MatchResult, Pattern, get_pattern};

/// Replace every match of `source` with a literal replacement.
pub fn substitute_all(source: &str, subject: &str, replacement: &str) -> Result<String> {
    Ok(get_pattern(source)?
        .substitute_all(subject, replacement)
        .into_owned())
}

/// Replace every match of `source` with the value of `transform`.
pub fn substitute_with<F>(source: &str, subject: &str, transform: F) -> Result<String>
where
    F: FnMut(&MatchResult<'_>) -> String,
{
    Ok(get_pattern(source)?
        .substitute_with(subject, transform)
        .into_owned())
}

/// Collect the text of every match of `source`.
pub fn find_all<'s>(source: &str, subject: &'s str) -> Result<Vec<&'s str>> {
    Ok(get_pattern(source)?.find_all(subject))
}

/// Find the first match of `source` anywhere in the subject.
pub fn search<'s>(source: &str, subject: &'s str) -> Result<Option<MatchResult<'s>>> {
    Ok(get_pattern(source)?.match_at(subject, Anchor::Unanchored))
}

/// Match `source` at the start of the subject.
pub fn match_start<'s>(source: &str, subject: &'s str) -> Result<Option<MatchResult<'s>>> {
    Ok(get_pattern(source)?.match_at(subject, Anchor::Start))
}

/// Match `source` against the whole subject.
pub fn full_match<'s>(source: &str, subject: &'s str) -> Result<Option<MatchResult<'s>>> {
    Ok(get_pattern(source)?.match_at(subject, Anchor::Full))
}

/// Split the subject on every match of `source`.
pub fn split<'s>(source: &str, subject: &'s str) -> Result<Vec<&'s str>> {
    Ok(get_pattern(source)?.split(subject))
}

/// Compile `source` through the global cache.
pub fn compile(source: &str) -> Result<std::sync::Arc<Pattern>> {
    get_pattern(source)
}
