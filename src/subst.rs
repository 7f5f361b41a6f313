// subst.rs - Single and global substitution over a pattern matcher.
//
// The scan strategy mirrors the original engine: each gsub turn re-matches
// against the post-match remainder as a fresh subject, so pre/post slices
// are always relative to the current match and overlapping matches are
// never revisited. Matcher faults are masked to no-match at this boundary.

use crate::match_data::MatchData;
use crate::matcher::Matcher;
use crate::template;

/// How to build the replacement text for one match.
///
/// Selected once at call entry; the variants are mutually exclusive, so a
/// callback structurally takes precedence over any template string.
pub enum Replacement<'a> {
    /// Inserted verbatim, no escape processing.
    Literal(&'a str),
    /// Expanded against the current match via [`crate::template::expand`].
    Template(&'a str),
    /// Called with the matched substring; its return value is inserted.
    Callback(&'a dyn Fn(&str) -> String),
}

impl Replacement<'_> {
    fn build(&self, m: &MatchData) -> String {
        match self {
            Replacement::Literal(text) => (*text).to_string(),
            Replacement::Template(text) => template::expand(text, m),
            Replacement::Callback(call) => call(m.get(0).unwrap_or("")),
        }
    }

    // The literal-needle path does no template expansion; template text is
    // inserted verbatim there.
    fn build_literal(&self, matched: &str) -> String {
        match self {
            Replacement::Literal(text) | Replacement::Template(text) => (*text).to_string(),
            Replacement::Callback(call) => call(matched),
        }
    }
}

impl std::fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Replacement::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Replacement::Template(text) => f.debug_tuple("Template").field(text).finish(),
            Replacement::Callback(_) => f.debug_tuple("Callback").finish(),
        }
    }
}

/// Replace the first match of `matcher` in `subject`.
///
/// No match, a matcher fault, or a degenerate zero-group result all leave
/// the subject unchanged.
///
/// # Examples
///
/// ```
/// use resub::matcher::Pattern;
/// use resub::subst::{sub, Replacement};
///
/// let p = Pattern::new(r"(\w+)").unwrap();
/// assert_eq!(sub("hello world", &p, &Replacement::Template(r"[\1]")), "[hello] world");
/// ```
pub fn sub<M: Matcher + ?Sized>(
    subject: &str,
    matcher: &M,
    replacement: &Replacement<'_>,
) -> String {
    let m = match matcher.match_at(subject, 0) {
        Ok(Some(m)) => m,
        Ok(None) | Err(_) => return subject.to_string(),
    };
    if m.is_empty() {
        return subject.to_string();
    }
    let mut out = String::with_capacity(subject.len());
    out.push_str(m.pre_match());
    out.push_str(&replacement.build(&m));
    out.push_str(m.post_match());
    out
}

/// Replace every non-overlapping match of `matcher` in `subject`.
///
/// A zero-length match at the start of the remaining text ends the scan
/// immediately, returning only what has been accumulated so far -- the
/// remainder is dropped. This reproduces the original engine's early exit
/// (see DESIGN.md); a zero-width-safe gsub would instead advance one
/// character and continue.
///
/// # Examples
///
/// ```
/// use resub::matcher::Pattern;
/// use resub::subst::{gsub, Replacement};
///
/// let p = Pattern::new("a").unwrap();
/// assert_eq!(gsub("aaa", &p, &Replacement::Literal("b")), "bbb");
/// ```
pub fn gsub<M: Matcher + ?Sized>(
    subject: &str,
    matcher: &M,
    replacement: &Replacement<'_>,
) -> String {
    let mut rest = subject.to_string();
    let mut out = String::with_capacity(subject.len());
    loop {
        let m = match matcher.match_at(&rest, 0) {
            Ok(Some(m)) => m,
            Ok(None) | Err(_) => break,
        };
        if m.is_empty() {
            break;
        }
        if m.end(0) == Ok(Some(0)) {
            return out;
        }
        out.push_str(m.pre_match());
        out.push_str(&replacement.build(&m));
        rest = m.post_match().to_string();
    }
    out.push_str(&rest);
    out
}

/// Replace the first occurrence of the plain substring `needle`.
///
/// This is the path taken when the pattern is given as a literal string
/// rather than a compiled pattern: no backreference expansion applies, so
/// [`Replacement::Template`] text is inserted verbatim. An empty needle
/// matches at position 0 and the replacement lands at the front.
pub fn sub_literal(subject: &str, needle: &str, replacement: &Replacement<'_>) -> String {
    match subject.find(needle) {
        None => subject.to_string(),
        Some(pos) => {
            let end = pos + needle.len();
            let mut out = String::with_capacity(subject.len());
            out.push_str(&subject[..pos]);
            out.push_str(&replacement.build_literal(&subject[pos..end]));
            out.push_str(&subject[end..]);
            out
        }
    }
}

/// Replace every non-overlapping occurrence of the plain substring
/// `needle`; an empty needle inserts the replacement between every
/// character and at both ends.
pub fn gsub_literal(subject: &str, needle: &str, replacement: &Replacement<'_>) -> String {
    let mut out = String::with_capacity(subject.len());
    if needle.is_empty() {
        for c in subject.chars() {
            out.push_str(&replacement.build_literal(""));
            out.push(c);
        }
        out.push_str(&replacement.build_literal(""));
        return out;
    }
    let mut rest = subject;
    while let Some(pos) = rest.find(needle) {
        out.push_str(&rest[..pos]);
        out.push_str(&replacement.build_literal(needle));
        rest = &rest[pos + needle.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchFault;
    use crate::matcher::Pattern;

    // A matcher that always raises a runtime fault.
    struct Faulty;

    impl Matcher for Faulty {
        fn match_at(&self, _: &str, _: usize) -> Result<Option<MatchData>, MatchFault> {
            Err(MatchFault::new("synthetic fault"))
        }
    }

    #[test]
    fn sub_replaces_exactly_once() {
        let p = Pattern::new("a").unwrap();
        assert_eq!(sub("banana", &p, &Replacement::Literal("o")), "bonana");
    }

    #[test]
    fn sub_no_match_returns_subject() {
        let p = Pattern::new("z").unwrap();
        assert_eq!(sub("banana", &p, &Replacement::Literal("o")), "banana");
        assert_eq!(gsub("banana", &p, &Replacement::Literal("o")), "banana");
    }

    #[test]
    fn fault_is_masked_to_no_match() {
        assert_eq!(sub("banana", &Faulty, &Replacement::Literal("o")), "banana");
        assert_eq!(gsub("banana", &Faulty, &Replacement::Literal("o")), "banana");
    }

    #[test]
    fn sub_with_template() {
        let p = Pattern::new(r"(\w+)").unwrap();
        let out = sub("hello world", &p, &Replacement::Template(r"[\1]"));
        assert_eq!(out, "[hello] world");
    }

    #[test]
    fn sub_with_callback() {
        let p = Pattern::new(r"\d+").unwrap();
        let upper = |matched: &str| format!("<{}>", matched);
        assert_eq!(
            sub("a 12 b 34", &p, &Replacement::Callback(&upper)),
            "a <12> b 34"
        );
        assert_eq!(
            gsub("a 12 b 34", &p, &Replacement::Callback(&upper)),
            "a <12> b <34>"
        );
    }

    #[test]
    fn gsub_replaces_globally() {
        let p = Pattern::new("a").unwrap();
        assert_eq!(gsub("aaa", &p, &Replacement::Literal("b")), "bbb");
        let swap = Pattern::new(r"(\w)@(\w)").unwrap();
        assert_eq!(
            gsub("a@b c@d", &swap, &Replacement::Template(r"\2@\1")),
            "b@a d@c"
        );
    }

    #[test]
    fn gsub_zero_length_match_terminates() {
        let p = Pattern::new("a*").unwrap();
        assert_eq!(gsub("", &p, &Replacement::Literal("-")), "");
    }

    #[test]
    fn gsub_zero_length_match_truncates_remainder() {
        // The preserved early exit drops the unmatched suffix.
        let p = Pattern::new("x*").unwrap();
        assert_eq!(gsub("abc", &p, &Replacement::Literal("-")), "");
    }

    #[test]
    fn gsub_matches_are_non_overlapping() {
        let p = Pattern::new("aa").unwrap();
        assert_eq!(gsub("aaaa", &p, &Replacement::Literal("b")), "bb");
        assert_eq!(gsub("aaa", &p, &Replacement::Literal("b")), "ba");
    }

    #[test]
    fn template_sees_only_current_match() {
        let p = Pattern::new(r"(\w)(\d)").unwrap();
        let out = gsub("a1 b2", &p, &Replacement::Template(r"\2\1"));
        assert_eq!(out, "1a 2b");
    }

    #[test]
    fn literal_sub_is_plain_text() {
        let r = Replacement::Template(r"\1");
        // Template escapes do not expand on the literal-needle path.
        assert_eq!(sub_literal("a.b.c", ".", &r), r"a\1b.c");
        assert_eq!(gsub_literal("a.b.c", ".", &r), r"a\1b\1c");
        assert_eq!(sub_literal("abc", "z", &r), "abc");
    }

    #[test]
    fn literal_callback_receives_needle() {
        let wrap = |matched: &str| format!("({})", matched);
        let r = Replacement::Callback(&wrap);
        assert_eq!(sub_literal("a-b", "-", &r), "a(-)b");
        assert_eq!(gsub_literal("a-b-c", "-", &r), "a(-)b(-)c");
    }

    #[test]
    fn literal_empty_needle() {
        let r = Replacement::Literal("-");
        assert_eq!(sub_literal("ab", "", &r), "-ab");
        assert_eq!(gsub_literal("ab", "", &r), "-a-b-");
        assert_eq!(gsub_literal("", "", &r), "-");
    }

    #[test]
    fn pattern_convenience_methods() {
        let p = Pattern::new(r"(o)").unwrap();
        assert_eq!(p.sub("foo", &Replacement::Template(r"<\1>")), "f<o>o");
        assert_eq!(p.gsub("foo", &Replacement::Template(r"<\1>")), "f<o><o>");
    }

    #[test]
    fn replacement_debug() {
        assert_eq!(format!("{:?}", Replacement::Literal("x")), "Literal(\"x\")");
        let call = |m: &str| m.to_string();
        assert_eq!(format!("{:?}", Replacement::Callback(&call)), "Callback");
    }
}
