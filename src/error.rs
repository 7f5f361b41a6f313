// error.rs - Error types for match-data construction and accessor misuse.
//
// Two deliberately separate types: `Error` for programmer-facing problems
// (bad pattern syntax, out-of-range group index, broken construction
// invariants) and `MatchFault` for runtime faults raised by a matcher
// implementation. A fault is not a no-match; callers that want the original
// forgiving semantics mask it at the sub/gsub boundary.

use std::fmt;

/// Error type for pattern compilation, accessor misuse, and match-data
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern source could not be compiled by the backing engine.
    Syntax { message: String },
    /// Group index outside `[0, len)` passed to `begin`/`end`/`offset`.
    ///
    /// Contrast with an in-range group that simply did not participate in
    /// the match, which is reported as absent, not as an error.
    Index { index: usize, len: usize },
    /// A capture span violates `start <= end <= subject.len()`.
    Span {
        start: usize,
        end: usize,
        subject_len: usize,
    },
    /// Match data was finished without a whole-match span (group 0).
    MissingWholeMatch,
    /// A capture name refers to a group index outside `[1, len)`.
    NameIndex {
        name: String,
        index: usize,
        len: usize,
    },
    /// The same capture name was bound to two different group indexes.
    NameConflict { name: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { message } => write!(f, "syntax error: {}", message),
            Error::Index { index, len } => {
                write!(f, "index {} out of matches (length {})", index, len)
            }
            Error::Span {
                start,
                end,
                subject_len,
            } => write!(
                f,
                "invalid span {}..{} for subject of length {}",
                start, end, subject_len
            ),
            Error::MissingWholeMatch => write!(f, "match data has no whole-match span"),
            Error::NameIndex { name, index, len } => write!(
                f,
                "capture name {:?} refers to group {} of {}",
                name, index, len
            ),
            Error::NameConflict { name } => {
                write!(f, "capture name {:?} bound to conflicting groups", name)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Syntax {
            message: err.to_string(),
        }
    }
}

/// A runtime fault raised by a [`Matcher`](crate::matcher::Matcher)
/// implementation, distinct from "no match".
///
/// `sub`/`gsub` and the top-level match entry points convert a fault into
/// no-match semantics; everything else propagates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFault {
    message: String,
}

impl MatchFault {
    pub fn new(message: impl Into<String>) -> Self {
        MatchFault {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for MatchFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matcher fault: {}", self.message)
    }
}

impl std::error::Error for MatchFault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_display() {
        let err = Error::Index { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of matches (length 3)");
    }

    #[test]
    fn span_display() {
        let err = Error::Span {
            start: 4,
            end: 2,
            subject_len: 10,
        };
        assert_eq!(err.to_string(), "invalid span 4..2 for subject of length 10");
    }

    #[test]
    fn from_regex_error() {
        let bad = regex::Regex::new("(unclosed").unwrap_err();
        let err = Error::from(bad);
        assert!(matches!(err, Error::Syntax { .. }));
        assert!(err.to_string().starts_with("syntax error:"));
    }

    #[test]
    fn fault_display() {
        let fault = MatchFault::new("stack limit");
        assert_eq!(fault.message(), "stack limit");
        assert_eq!(fault.to_string(), "matcher fault: stack limit");
    }

    #[test]
    fn error_trait_objects() {
        let err: Box<dyn std::error::Error> = Box::new(Error::MissingWholeMatch);
        assert_eq!(err.to_string(), "match data has no whole-match span");
        let fault: Box<dyn std::error::Error> = Box::new(MatchFault::new("boom"));
        assert_eq!(fault.to_string(), "matcher fault: boom");
    }
}
