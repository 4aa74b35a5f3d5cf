//! Compiled patterns and the operations applied through them.
//!
//! A [`Pattern`] is compiled once and then applied any number of times. It
//! holds the search form of the expression plus start-, end- and
//! fully-anchored forms so that [`Pattern::match_at`] never recompiles.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::{Captures, Regex, RegexBuilder};
use regex_syntax::ParserBuilder;

use super::anchor::Anchor;
use super::flags::PatternFlags;
use super::matches::{MatchResult, Matches};
use crate::config::CompileConfig;
use crate::error::{RematchError, Result};

/// A compiled regular expression together with its source and flags.
///
/// Cloning is cheap and a pattern may be shared across threads for
/// read-only use.
#[derive(Clone)]
pub struct Pattern {
    source: Arc<str>,
    flags: PatternFlags,
    regex: Regex,
    start: Regex,
    end: Regex,
    full: Regex,
    names: Arc<[Option<String>]>,
}

impl Pattern {
    /// Compile a pattern with no flags.
    ///
    /// # Errors
    ///
    /// Returns [`RematchError::InvalidPattern`] if the source is not a valid
    /// regular expression.
    pub fn new(source: &str) -> Result<Self> {
        PatternBuilder::new(source).build()
    }

    /// Compile a pattern with the given flags.
    pub fn with_flags(source: &str, flags: PatternFlags) -> Result<Self> {
        PatternBuilder::new(source).flags(flags).build()
    }

    /// Start building a pattern with limits or flags.
    #[must_use]
    pub fn builder(source: &str) -> PatternBuilder<'_> {
        PatternBuilder::new(source)
    }

    /// Get the source the pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the flags the pattern was compiled with.
    #[must_use]
    pub const fn flags(&self) -> PatternFlags {
        self.flags
    }

    /// Get the number of capture groups, not counting group 0.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Iterate over the names of the capture groups, `None` for unnamed ones.
    pub fn group_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.names.iter().skip(1).map(Option::as_deref)
    }

    /// Check whether the pattern matches anywhere in the subject.
    #[must_use]
    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }

    /// Replace every non-overlapping match with a literal replacement.
    ///
    /// `$` in the replacement has no special meaning. When nothing matches,
    /// the subject is returned borrowed.
    #[must_use]
    pub fn substitute_all<'s>(&self, subject: &'s str, replacement: &str) -> Cow<'s, str> {
        self.replace(subject, 0, |_, out| out.push_str(replacement)).0
    }

    /// Replace every non-overlapping match with the value of `transform`.
    ///
    /// `transform` is called exactly once per match, in left-to-right order.
    pub fn substitute_with<'s, F>(&self, subject: &'s str, mut transform: F) -> Cow<'s, str>
    where
        F: FnMut(&MatchResult<'s>) -> String,
    {
        self.replace(subject, 0, |captures, out| {
            let m = MatchResult::from_captures(subject, captures, &self.names);
            out.push_str(&transform(&m));
        })
        .0
    }

    /// Replace every match, expanding `$1`, `$name` and `${name}` in the
    /// template with the corresponding group. `$$` writes a literal `$`.
    #[must_use]
    pub fn substitute_expand<'s>(&self, subject: &'s str, template: &str) -> Cow<'s, str> {
        self.replace(subject, 0, |captures, out| captures.expand(template, out))
            .0
    }

    /// Replace at most `limit` matches with a literal replacement and report
    /// how many replacements were made. A `limit` of 0 means no limit.
    #[must_use]
    pub fn substitute_counted<'s>(
        &self,
        subject: &'s str,
        replacement: &str,
        limit: usize,
    ) -> (Cow<'s, str>, usize) {
        self.replace(subject, limit, |_, out| out.push_str(replacement))
    }

    /// Collect the text of every non-overlapping match, left to right.
    #[must_use]
    pub fn find_all<'s>(&self, subject: &'s str) -> Vec<&'s str> {
        self.regex.find_iter(subject).map(|m| m.as_str()).collect()
    }

    /// Iterate lazily over every non-overlapping match, left to right.
    ///
    /// After an empty match the scan resumes one code point further on, and
    /// an empty match that begins where the previous match ended is skipped.
    #[must_use]
    pub fn find_iter<'p, 's>(&'p self, subject: &'s str) -> Matches<'p, 's> {
        Matches::new(subject, self.regex.captures_iter(subject), &self.names)
    }

    /// Find a single match that satisfies the anchor.
    ///
    /// Absence of a match is `None`, never an error.
    #[must_use]
    pub fn match_at<'s>(&self, subject: &'s str, anchor: Anchor) -> Option<MatchResult<'s>> {
        let regex = match anchor {
            Anchor::Unanchored => &self.regex,
            Anchor::Start => &self.start,
            Anchor::End => &self.end,
            Anchor::Full => &self.full,
        };

        regex
            .captures(subject)
            .map(|captures| MatchResult::from_captures(subject, &captures, &self.names))
    }

    /// Find the first match anywhere in the subject.
    #[must_use]
    pub fn search<'s>(&self, subject: &'s str) -> Option<MatchResult<'s>> {
        self.match_at(subject, Anchor::Unanchored)
    }

    /// Split the subject on every match.
    #[must_use]
    pub fn split<'s>(&self, subject: &'s str) -> Vec<&'s str> {
        self.regex.split(subject).collect()
    }

    /// Split the subject into at most `limit` pieces.
    #[must_use]
    pub fn splitn<'s>(&self, subject: &'s str, limit: usize) -> Vec<&'s str> {
        self.regex.splitn(subject, limit).collect()
    }

    /// Drive a replacement over at most `limit` matches (0 for all).
    fn replace<'s, F>(&self, subject: &'s str, limit: usize, mut append: F) -> (Cow<'s, str>, usize)
    where
        F: FnMut(&Captures<'s>, &mut String),
    {
        let mut captures = self.regex.captures_iter(subject).peekable();
        if captures.peek().is_none() {
            return (Cow::Borrowed(subject), 0);
        }

        let mut out = String::with_capacity(subject.len());
        let mut last = 0;
        let mut count = 0;

        for caps in captures {
            if limit != 0 && count == limit {
                break;
            }
            let whole = caps.get_match();
            out.push_str(&subject[last..whole.start()]);
            append(&caps, &mut out);
            last = whole.end();
            count += 1;
        }

        out.push_str(&subject[last..]);
        (Cow::Owned(out), count)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.flags.inline(), self.source)
    }
}

/// Patterns are equal when their source and flags are equal. Engine limits
/// only decide whether a pattern compiles, so they are not compared.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl std::str::FromStr for Pattern {
    type Err = RematchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Builder for a [`Pattern`] with flags and engine limits.
#[derive(Debug, Clone)]
pub struct PatternBuilder<'a> {
    source: &'a str,
    flags: PatternFlags,
    size_limit: Option<usize>,
    dfa_size_limit: Option<usize>,
    nest_limit: Option<u32>,
}

impl<'a> PatternBuilder<'a> {
    /// Create a builder for the given source.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            flags: PatternFlags::empty(),
            size_limit: None,
            dfa_size_limit: None,
            nest_limit: None,
        }
    }

    /// Set the matching flags, replacing any set before.
    #[must_use]
    pub const fn flags(mut self, flags: PatternFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Add a single flag.
    #[must_use]
    pub const fn flag(mut self, flag: PatternFlags) -> Self {
        self.flags = self.flags.union(flag);
        self
    }

    /// Limit the size of the compiled program, in bytes.
    #[must_use]
    pub const fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Limit the cache used by the lazy DFA, in bytes.
    #[must_use]
    pub const fn dfa_size_limit(mut self, bytes: usize) -> Self {
        self.dfa_size_limit = Some(bytes);
        self
    }

    /// Limit how deeply groups and repetitions may nest in the source.
    ///
    /// Checked while parsing, so a rejection reports the position of the
    /// group that is nested too deeply.
    #[must_use]
    pub const fn nest_limit(mut self, depth: u32) -> Self {
        self.nest_limit = Some(depth);
        self
    }

    /// Apply flags and limits from a compile configuration.
    ///
    /// Flags are added to those already set; limits replace unset ones.
    #[must_use]
    pub fn config(mut self, config: &CompileConfig) -> Self {
        self.flags |= config.flags;
        self.size_limit = self.size_limit.or(config.size_limit);
        self.dfa_size_limit = self.dfa_size_limit.or(config.dfa_size_limit);
        self.nest_limit = self.nest_limit.or(config.nest_limit);
        self
    }

    /// Compile the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RematchError::InvalidPattern`] if the source is not a valid
    /// regular expression or the compiled form exceeds a limit.
    pub fn build(self) -> Result<Pattern> {
        let result = self.compile();
        match &result {
            Ok(_) => {
                tracing::debug!(pattern = %self.source, flags = ?self.flags, "compiled pattern");
            }
            Err(err) => {
                tracing::debug!(pattern = %self.source, error = %err, "rejected pattern");
            }
        }
        result
    }

    fn compile(&self) -> Result<Pattern> {
        // Parsing first gives a precise error position, and the printed form
        // has every flag resolved so it can be wrapped in anchors safely.
        let hir = self.parser().parse(self.source).map_err(|err| self.syntax_error(&err))?;
        let canonical = hir.to_string();

        let regex = self.engine(self.source, self.flags)?;
        let start = self.engine(&Anchor::Start.wrap(&canonical), PatternFlags::empty())?;
        let end = self.engine(&Anchor::End.wrap(&canonical), PatternFlags::empty())?;
        let full = self.engine(&Anchor::Full.wrap(&canonical), PatternFlags::empty())?;

        let names = regex
            .capture_names()
            .map(|name| name.map(str::to_string))
            .collect();

        Ok(Pattern {
            source: Arc::from(self.source),
            flags: self.flags,
            regex,
            start,
            end,
            full,
            names,
        })
    }

    fn parser(&self) -> regex_syntax::Parser {
        let mut parser = ParserBuilder::new();
        parser
            .case_insensitive(self.flags.contains(PatternFlags::CASE_INSENSITIVE))
            .multi_line(self.flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(self.flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(self.flags.contains(PatternFlags::IGNORE_WHITESPACE))
            .swap_greed(self.flags.contains(PatternFlags::SWAP_GREED))
            .crlf(self.flags.contains(PatternFlags::CRLF));
        if let Some(depth) = self.nest_limit {
            parser.nest_limit(depth);
        }
        parser.build()
    }

    fn engine(&self, pattern: &str, flags: PatternFlags) -> Result<Regex> {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
            .multi_line(flags.contains(PatternFlags::MULTI_LINE))
            .dot_matches_new_line(flags.contains(PatternFlags::DOT_MATCHES_NEW_LINE))
            .ignore_whitespace(flags.contains(PatternFlags::IGNORE_WHITESPACE))
            .swap_greed(flags.contains(PatternFlags::SWAP_GREED))
            .crlf(flags.contains(PatternFlags::CRLF));
        if let Some(bytes) = self.size_limit {
            builder.size_limit(bytes);
        }
        if let Some(bytes) = self.dfa_size_limit {
            builder.dfa_size_limit(bytes);
        }
        // The parser already enforced the nesting limit on the source, and the
        // anchored forms nest deeper than the source they are printed from.
        builder.nest_limit(u32::MAX);

        builder.build().map_err(|err| {
            let message = match err {
                regex::Error::CompiledTooBig(limit) => {
                    format!("compiled pattern exceeds the size limit of {limit} bytes")
                }
                other => other.to_string(),
            };
            RematchError::invalid_pattern(self.source, message, None)
        })
    }

    fn syntax_error(&self, err: &regex_syntax::Error) -> RematchError {
        let (message, position) = match err {
            regex_syntax::Error::Parse(e) => (e.kind().to_string(), Some(e.span().start.offset)),
            regex_syntax::Error::Translate(e) => {
                (e.kind().to_string(), Some(e.span().start.offset))
            }
            other => (other.to_string(), None),
        };
        RematchError::invalid_pattern(self.source, message, position)
    }
}
