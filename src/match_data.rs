// match_data.rs - Immutable snapshot of a single pattern match.
//
// A MatchData owns a copy of the subject string plus one span per capture
// group (index 0 = whole match). It is built incrementally through
// MatchDataBuilder while a matcher populates it, validated once in
// `finish`, and read-only from then on.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

use smallvec::SmallVec;

use crate::error::Error;

/// A half-open byte range delimiting a capture within the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the captured text in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length capture.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// The result of one successful match: subject, capture spans, and the
/// name table of the owning pattern.
///
/// Group 0 is the whole match; groups that did not participate are absent.
/// The subject is copied at match time, so later mutation of the caller's
/// string is never observed.
///
/// # Examples
///
/// ```
/// use resub::matcher::Pattern;
///
/// let p = Pattern::new(r"(foo)(bar)(BAZ)?").unwrap();
/// let m = p.match_str("foobarbaz").unwrap();
/// assert_eq!(m.get(0), Some("foobar"));
/// assert_eq!(m.get(1), Some("foo"));
/// assert_eq!(m.get(3), None);     // group in range, did not participate
/// assert_eq!(m.get(-2), Some("bar"));
/// assert_eq!(m.pre_match(), "");
/// assert_eq!(m.post_match(), "baz");
/// ```
#[derive(Debug, Clone)]
pub struct MatchData {
    subject: Box<str>,
    pattern: Box<str>,
    groups: SmallVec<[Option<Span>; 8]>,
    // (name, 1-based group index), sorted by index.
    names: Vec<(Box<str>, usize)>,
}

impl MatchData {
    /// Start building match data for `subject`. The subject is copied.
    pub fn builder(subject: &str) -> MatchDataBuilder {
        MatchDataBuilder {
            subject: subject.into(),
            pattern: Box::from(""),
            groups: SmallVec::new(),
            names: Vec::new(),
        }
    }

    /// Number of groups, including group 0.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups (cannot occur for data built
    /// through [`MatchDataBuilder`]).
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The copied subject string.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Source text of the pattern that produced this match.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Start offset of group `i`, or `None` for an unmatched group.
    ///
    /// An index outside `[0, len)` is a programmer error and reported as
    /// [`Error::Index`], never as an absent group.
    pub fn begin(&self, i: usize) -> Result<Option<usize>, Error> {
        match self.groups.get(i) {
            Some(group) => Ok(group.map(|s| s.start)),
            None => Err(Error::Index {
                index: i,
                len: self.groups.len(),
            }),
        }
    }

    /// End offset (exclusive) of group `i`, or `None` for an unmatched group.
    pub fn end(&self, i: usize) -> Result<Option<usize>, Error> {
        match self.groups.get(i) {
            Some(group) => Ok(group.map(|s| s.end)),
            None => Err(Error::Index {
                index: i,
                len: self.groups.len(),
            }),
        }
    }

    /// The (begin, end) pair of group `i` as a [`Span`]; both offsets are
    /// present or absent together.
    pub fn offset(&self, i: usize) -> Result<Option<Span>, Error> {
        match self.groups.get(i) {
            Some(group) => Ok(*group),
            None => Err(Error::Index {
                index: i,
                len: self.groups.len(),
            }),
        }
    }

    /// Text of group `n`, with Ruby-style negative indexing from the end
    /// (`-1` is the last group).
    ///
    /// Out-of-range indexes return `None` rather than an error, matching
    /// the forgiving `m[n]` accessor rather than `begin`/`end`.
    pub fn get(&self, n: isize) -> Option<&str> {
        let len = self.groups.len() as isize;
        let n = if n < 0 { n + len } else { n };
        if n < 0 || n >= len {
            return None;
        }
        let span = self.groups[n as usize]?;
        Some(&self.subject[span.range()])
    }

    /// Text of every group in order, group 0 included.
    pub fn to_vec(&self) -> Vec<Option<&str>> {
        (0..self.groups.len()).map(|i| self.get(i as isize)).collect()
    }

    /// Text of every capture group, excluding the whole match.
    pub fn captures(&self) -> Vec<Option<&str>> {
        (1..self.groups.len()).map(|i| self.get(i as isize)).collect()
    }

    /// The last capture group that participated in the match.
    pub fn last_capture(&self) -> Option<&str> {
        let span = self.groups.iter().skip(1).rev().flatten().next()?;
        Some(&self.subject[span.range()])
    }

    /// The part of the subject before the match.
    pub fn pre_match(&self) -> &str {
        &self.subject[..self.whole().start]
    }

    /// The part of the subject after the match.
    pub fn post_match(&self) -> &str {
        &self.subject[self.whole().end..]
    }

    /// The matched part of the subject (group 0).
    pub fn matched_area(&self) -> &str {
        &self.subject[self.whole().range()]
    }

    /// Capture name to 1-based group index, each index wrapped in a
    /// single-element list. The list form leaves room for engines that
    /// allow one name on several groups.
    pub fn named_captures(&self) -> HashMap<String, Vec<usize>> {
        self.names
            .iter()
            .map(|(name, index)| (name.to_string(), vec![*index]))
            .collect()
    }

    /// Capture names ordered by group index; unnamed groups are skipped.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(|(name, _)| name.as_ref()).collect()
    }

    /// Text of the named capture group, or `None` if the name is unknown
    /// or the group did not participate.
    pub fn group(&self, name: &str) -> Option<&str> {
        let index = self
            .names
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, index)| *index)?;
        self.get(index as isize)
    }

    // Group 0 is validated present in finish(); the fallback span only
    // exists to keep this panic-free.
    fn whole(&self) -> Span {
        self.groups
            .first()
            .copied()
            .flatten()
            .unwrap_or(Span::new(0, 0))
    }
}

impl fmt::Display for MatchData {
    /// Quoted matched area, followed by each capture tagged with its
    /// 1-based ordinal; absent captures render as `None`.
    ///
    /// ```
    /// use resub::matcher::Pattern;
    ///
    /// let p = Pattern::new(r"(foo)(bar)(BAZ)?").unwrap();
    /// let m = p.match_str("foobarbaz").unwrap();
    /// assert_eq!(m.to_string(), r#""foobar" 1:"foo" 2:"bar" 3:None"#);
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.matched_area())?;
        for i in 1..self.groups.len() {
            match self.get(i as isize) {
                Some(text) => write!(f, " {}:{:?}", i, text)?,
                None => write!(f, " {}:None", i)?,
            }
        }
        Ok(())
    }
}

/// Accumulates capture spans and names while a matcher populates a result,
/// then validates everything once in [`finish`](MatchDataBuilder::finish).
///
/// After `finish` there is no mutation path into the [`MatchData`].
#[derive(Debug)]
pub struct MatchDataBuilder {
    subject: Box<str>,
    pattern: Box<str>,
    groups: SmallVec<[Option<Span>; 8]>,
    names: Vec<(Box<str>, usize)>,
}

impl MatchDataBuilder {
    /// Record the pattern source for later inspection.
    pub fn pattern(mut self, source: &str) -> Self {
        self.pattern = source.into();
        self
    }

    /// Append the span of the next group. The first pushed span is group 0.
    pub fn push_group(mut self, start: usize, end: usize) -> Self {
        self.groups.push(Some(Span::new(start, end)));
        self
    }

    /// Append a group that did not participate in the match.
    pub fn push_unmatched(mut self) -> Self {
        self.groups.push(None);
        self
    }

    /// Bind `name` to the 1-based group `index`.
    pub fn name(mut self, name: &str, index: usize) -> Self {
        self.names.push((name.into(), index));
        self
    }

    /// Validate the accumulated state and produce an immutable [`MatchData`].
    ///
    /// Fails if group 0 is missing or unmatched, if any span lies outside
    /// the subject or has `start > end`, if a name points at a group that
    /// does not exist, or if one name is bound to two different groups.
    pub fn finish(mut self) -> Result<MatchData, Error> {
        match self.groups.first() {
            Some(Some(_)) => {}
            _ => return Err(Error::MissingWholeMatch),
        }
        for span in self.groups.iter().flatten() {
            if span.start > span.end || span.end > self.subject.len() {
                return Err(Error::Span {
                    start: span.start,
                    end: span.end,
                    subject_len: self.subject.len(),
                });
            }
        }
        for (name, index) in &self.names {
            if *index == 0 || *index >= self.groups.len() {
                return Err(Error::NameIndex {
                    name: name.to_string(),
                    index: *index,
                    len: self.groups.len(),
                });
            }
            let conflicting = self
                .names
                .iter()
                .any(|(other, other_index)| other == name && other_index != index);
            if conflicting {
                return Err(Error::NameConflict {
                    name: name.to_string(),
                });
            }
        }
        self.names.sort_by_key(|(_, index)| *index);
        Ok(MatchData {
            subject: self.subject,
            pattern: self.pattern,
            groups: self.groups,
            names: self.names,
        })
    }
}
