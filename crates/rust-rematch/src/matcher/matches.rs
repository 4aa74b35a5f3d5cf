//! Match results and the lazy match iterator.

use std::ops::Range;
use std::sync::Arc;

use regex::{CaptureMatches, Captures, Match};

/// One successful match of a pattern against a subject.
///
/// Offsets are byte offsets into the subject and form the half-open range
/// `[start, end)`, so `&subject[m.start()..m.end()] == m.as_str()` always
/// holds. Use [`MatchResult::char_range`] for code-point offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'s> {
    subject: &'s str,
    whole: Match<'s>,
    /// Every group including group 0.
    groups: Vec<Option<Match<'s>>>,
    names: Arc<[Option<String>]>,
}

impl<'s> MatchResult<'s> {
    pub(crate) fn from_captures(
        subject: &'s str,
        captures: &Captures<'s>,
        names: &Arc<[Option<String>]>,
    ) -> Self {
        Self {
            subject,
            whole: captures.get_match(),
            groups: captures.iter().collect(),
            names: Arc::clone(names),
        }
    }

    /// Get the matched text.
    #[must_use]
    pub fn as_str(&self) -> &'s str {
        self.whole.as_str()
    }

    /// Get the start byte offset.
    #[must_use]
    pub fn start(&self) -> usize {
        self.whole.start()
    }

    /// Get the end byte offset (exclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.whole.end()
    }

    /// Get the byte range of the match.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.whole.range()
    }

    /// Get the length of the match in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.whole.len()
    }

    /// Check if the match is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.whole.is_empty()
    }

    /// Get the subject the match was found in.
    #[must_use]
    pub const fn subject(&self) -> &'s str {
        self.subject
    }

    /// Get the range of the match in code points rather than bytes.
    #[must_use]
    pub fn char_range(&self) -> Range<usize> {
        let start = self.subject[..self.start()].chars().count();
        start..start + self.as_str().chars().count()
    }

    /// Get the text of a group by index. Group 0 is the whole match.
    ///
    /// Returns `None` for a group that did not participate in the match or
    /// that does not exist.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&'s str> {
        self.groups.get(index).copied().flatten().map(|m| m.as_str())
    }

    /// Get the byte range of a group by index.
    #[must_use]
    pub fn group_range(&self, index: usize) -> Option<Range<usize>> {
        self.groups.get(index).copied().flatten().map(|m| m.range())
    }

    /// Get the text of a named group.
    #[must_use]
    pub fn name(&self, name: &str) -> Option<&'s str> {
        let index = self
            .names
            .iter()
            .position(|n| n.as_deref() == Some(name))?;
        self.group(index)
    }

    /// Get the number of capture groups, not counting group 0.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len().saturating_sub(1)
    }

    /// Iterate over the capture groups, not counting group 0.
    pub fn groups(&self) -> impl Iterator<Item = Option<&'s str>> + '_ {
        self.groups.iter().skip(1).map(|g| g.map(|m| m.as_str()))
    }

    /// Iterate over the named groups that participated in the match.
    pub fn named_groups(&self) -> impl Iterator<Item = (&str, &'s str)> + '_ {
        self.names
            .iter()
            .zip(&self.groups)
            .filter_map(|(name, group)| Some((name.as_deref()?, group.as_ref()?.as_str())))
    }
}

/// A lazy, single-pass iterator over successive non-overlapping matches.
///
/// Created by [`Pattern::find_iter`](super::Pattern::find_iter).
#[derive(Debug)]
pub struct Matches<'p, 's> {
    subject: &'s str,
    inner: CaptureMatches<'p, 's>,
    names: &'p Arc<[Option<String>]>,
}

impl<'p, 's> Matches<'p, 's> {
    pub(crate) const fn new(
        subject: &'s str,
        inner: CaptureMatches<'p, 's>,
        names: &'p Arc<[Option<String>]>,
    ) -> Self {
        Self {
            subject,
            inner,
            names,
        }
    }
}

impl<'s> Iterator for Matches<'_, 's> {
    type Item = MatchResult<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|captures| MatchResult::from_captures(self.subject, &captures, self.names))
    }
}
