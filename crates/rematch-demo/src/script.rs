//! Demonstration scripts: one subject and an ordered list of steps.

use std::path::Path;

use rust_rematch::{Anchor, PatternFlags, Result, load_document};
use serde::Deserialize;

/// Subject used by the built-in script.
pub const SAMPLE_INPUT: &str = "This is a sample text";

/// A subject string and the steps applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// The subject every step is applied to.
    pub input: String,

    /// Steps, run in order.
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One pattern and the operation applied with it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Step {
    /// Pattern source.
    pub pattern: String,

    /// Flags used to compile the pattern.
    #[serde(default)]
    pub flags: PatternFlags,

    /// What to do with the pattern.
    #[serde(flatten)]
    pub operation: Operation,
}

/// Operations a step can perform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Replace every match with a literal string.
    Substitute {
        /// The replacement text.
        replacement: String,
    },
    /// Uppercase every match.
    Uppercase,
    /// Lowercase every match.
    Lowercase,
    /// Print every matched substring.
    FindAll,
    /// Print every match with its offsets.
    FindIter,
    /// Print the single match satisfying an anchor.
    MatchAt {
        /// Where the match must sit.
        anchor: Anchor,
    },
    /// Print the pieces between matches.
    Split,
}

impl Operation {
    /// Get the operation name used in scripts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Substitute { .. } => "substitute",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::FindAll => "find_all",
            Self::FindIter => "find_iter",
            Self::MatchAt { .. } => "match_at",
            Self::Split => "split",
        }
    }
}

impl Step {
    /// Create a step with no flags.
    #[must_use]
    pub fn new(pattern: impl Into<String>, operation: Operation) -> Self {
        Self {
            pattern: pattern.into(),
            flags: PatternFlags::empty(),
            operation,
        }
    }
}

impl Script {
    /// Load a script from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        load_document(path)
    }

    /// The built-in script: the five canonical examples over [`SAMPLE_INPUT`].
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            input: SAMPLE_INPUT.to_string(),
            steps: vec![
                Step::new(
                    r"\s",
                    Operation::Substitute {
                        replacement: "-".to_string(),
                    },
                ),
                Step::new(
                    r"\sis",
                    Operation::Substitute {
                        replacement: " was".to_string(),
                    },
                ),
                Step::new(r"[a-z]", Operation::Uppercase),
                Step::new(r"t$", Operation::FindIter),
                Step::new(r"\b\w{2}\b", Operation::FindAll),
            ],
        }
    }
}
