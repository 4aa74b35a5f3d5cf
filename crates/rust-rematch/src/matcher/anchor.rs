//! Anchor constraints for single-match queries.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::RematchError;

/// Where a match must sit within the subject for [`Pattern::match_at`].
///
/// [`Pattern::match_at`]: super::Pattern::match_at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// The first match anywhere in the subject.
    #[default]
    Unanchored,
    /// The match must begin at offset 0.
    Start,
    /// The match must finish at the end of the subject.
    End,
    /// The match must span the whole subject.
    Full,
}

impl Anchor {
    /// All anchors, in declaration order.
    pub const ALL: [Self; 4] = [Self::Unanchored, Self::Start, Self::End, Self::Full];

    /// Get the anchor name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unanchored => "unanchored",
            Self::Start => "start",
            Self::End => "end",
            Self::Full => "full",
        }
    }

    /// Wrap a canonical pattern so the engine enforces this anchor.
    pub(crate) fn wrap(self, canonical: &str) -> String {
        match self {
            Self::Unanchored => canonical.to_string(),
            Self::Start => format!(r"\A(?:{canonical})"),
            Self::End => format!(r"(?:{canonical})\z"),
            Self::Full => format!(r"\A(?:{canonical})\z"),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = RematchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unanchored" | "search" | "none" => Ok(Self::Unanchored),
            "start" | "match" | "^" => Ok(Self::Start),
            "end" | "$" => Ok(Self::End),
            "full" | "fullmatch" | "whole" => Ok(Self::Full),
            other => Err(RematchError::config(format!("unknown anchor: {other}"))),
        }
    }
}
