// matcher.rs - The pattern-matcher boundary and its default implementation.
//
// The substitution engine only ever talks to the `Matcher` trait; `Pattern`
// is the shipped implementation, backed by the `regex` crate. Option flags
// are forwarded to the engine and not interpreted here.

use std::cell::RefCell;

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

use crate::error::{Error, MatchFault};
use crate::match_data::MatchData;

bitflags! {
    /// Pattern option flags, forwarded opaquely to the backing engine.
    ///
    /// The numeric values are the classic `i` / `x` / `m` option bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Options: u32 {
        /// Case-insensitive matching.
        const IGNORECASE = 1;
        /// Extended mode: whitespace and `#` comments in the pattern
        /// are ignored.
        const EXTENDED = 2;
        /// `^` and `$` match at every line boundary.
        const MULTILINE = 4;
    }
}

/// The boundary to an actual regex engine.
///
/// `Ok(None)` means no match; `Err(MatchFault)` is a runtime matching
/// fault, which is a different thing: `sub`/`gsub` mask it to no-match,
/// anything else is free to propagate it.
pub trait Matcher {
    /// Search `subject` from byte offset `start` and return the match
    /// result, one span per capture group with group 0 first.
    fn match_at(&self, subject: &str, start: usize) -> Result<Option<MatchData>, MatchFault>;
}

thread_local! {
    static LAST_MATCH: RefCell<Option<MatchData>> = const { RefCell::new(None) };
}

/// The most recent result of a top-level match on this thread.
///
/// Set by [`Pattern::match_str`] / [`Pattern::match_pos`] on a match and
/// cleared by them on no-match; never shared across threads.
pub fn last_match() -> Option<MatchData> {
    LAST_MATCH.with(|slot| slot.borrow().clone())
}

fn set_last_match(m: Option<&MatchData>) {
    LAST_MATCH.with(|slot| *slot.borrow_mut() = m.cloned());
}

/// A compiled pattern: the default [`Matcher`] implementation.
///
/// # Examples
///
/// ```
/// use resub::matcher::{Options, Pattern};
///
/// let p = Pattern::with_options("hello", Options::IGNORECASE).unwrap();
/// assert!(p.is_match("say HELLO"));
/// assert_eq!(p.match_pos("say hello"), Some(4));
/// assert!(p.casefold());
/// ```
pub struct Pattern {
    re: Regex,
    source: String,
    options: Options,
}

impl Pattern {
    /// Compile `source` with no options.
    pub fn new(source: &str) -> Result<Pattern, Error> {
        Self::with_options(source, Options::empty())
    }

    /// Compile `source`, forwarding the option flags to the engine.
    pub fn with_options(source: &str, options: Options) -> Result<Pattern, Error> {
        let re = RegexBuilder::new(source)
            .case_insensitive(options.contains(Options::IGNORECASE))
            .ignore_whitespace(options.contains(Options::EXTENDED))
            .multi_line(options.contains(Options::MULTILINE))
            .build()?;
        Ok(Pattern {
            re,
            source: source.to_string(),
            options,
        })
    }

    /// The pattern source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The option flags the pattern was compiled with.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Whether the pattern matches case-insensitively.
    pub fn casefold(&self) -> bool {
        self.options.contains(Options::IGNORECASE)
    }

    /// Top-level match against `subject`.
    ///
    /// Faults are masked to no-match here, matching the forgiving calling
    /// convention of the original API. Updates the thread-local
    /// [`last_match`] slot: set on a match, cleared on none.
    pub fn match_str(&self, subject: &str) -> Option<MatchData> {
        let m = self.match_at(subject, 0).ok().flatten();
        set_last_match(m.as_ref());
        m
    }

    /// Byte offset of the start of the first match, or `None`.
    ///
    /// Shares the [`match_str`](Pattern::match_str) last-match lifecycle.
    pub fn match_pos(&self, subject: &str) -> Option<usize> {
        self.match_str(subject).and_then(|m| m.begin(0).ok().flatten())
    }

    /// Whether the pattern matches anywhere in `subject`.
    ///
    /// Does not build match data and leaves [`last_match`] untouched.
    pub fn is_match(&self, subject: &str) -> bool {
        self.re.is_match(subject)
    }

    /// Single substitution; see [`crate::subst::sub`].
    pub fn sub(&self, subject: &str, replacement: &crate::subst::Replacement<'_>) -> String {
        crate::subst::sub(subject, self, replacement)
    }

    /// Global substitution; see [`crate::subst::gsub`].
    pub fn gsub(&self, subject: &str, replacement: &crate::subst::Replacement<'_>) -> String {
        crate::subst::gsub(subject, self, replacement)
    }
}

impl Matcher for Pattern {
    fn match_at(&self, subject: &str, start: usize) -> Result<Option<MatchData>, MatchFault> {
        if start > subject.len() {
            return Ok(None);
        }
        let caps = match self.re.captures_at(subject, start) {
            Some(caps) => caps,
            None => return Ok(None),
        };
        let mut builder = MatchData::builder(subject).pattern(&self.source);
        for group in caps.iter() {
            builder = match group {
                Some(m) => builder.push_group(m.start(), m.end()),
                None => builder.push_unmatched(),
            };
        }
        for (index, name) in self.re.capture_names().enumerate() {
            if let Some(name) = name {
                builder = builder.name(name, index);
            }
        }
        builder
            .finish()
            .map(Some)
            .map_err(|err| MatchFault::new(err.to_string()))
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("options", &self.options)
            .finish()
    }
}
