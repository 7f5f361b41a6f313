// template.rs - Backreference-template expansion for replacement strings.
//
// A template is a literal replacement string carrying two-character escape
// sequences: \0-\9 (group text), \& (whole match), \` (pre-match),
// \' (post-match), \+ (last participating capture), \\ (literal backslash).
// Anything else after a backslash passes through unchanged.

use memchr::memchr;

use crate::match_data::MatchData;

/// Expand `template` against a single match result.
///
/// Expansion only ever sees the given match; in a `gsub` loop each
/// replacement is expanded against the match of that iteration alone.
///
/// # Examples
///
/// ```
/// use resub::matcher::Pattern;
/// use resub::template::expand;
///
/// let p = Pattern::new(r"(h\w+), (w\w+)").unwrap();
/// let m = p.match_str("hello, world!").unwrap();
/// assert_eq!(expand(r"\2, \1", &m), "world, hello");
/// assert_eq!(expand(r"<\&>", &m), "<hello, world>");
/// assert_eq!(expand(r"\'", &m), "!");
/// ```
pub fn expand(template: &str, m: &MatchData) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut i = 0;

    while i < bytes.len() {
        let backslash = match memchr(b'\\', &bytes[i..]) {
            Some(offset) => i + offset,
            None => {
                out.push_str(&template[i..]);
                break;
            }
        };
        out.push_str(&template[i..backslash]);
        if backslash + 1 == bytes.len() {
            // Trailing backslash stands for itself.
            out.push('\\');
            break;
        }
        match bytes[backslash + 1] {
            b'&' => out.push_str(m.get(0).unwrap_or("")),
            b'`' => out.push_str(m.pre_match()),
            b'\'' => out.push_str(m.post_match()),
            b'+' => out.push_str(m.last_capture().unwrap_or("")),
            c @ b'0'..=b'9' => out.push_str(m.get((c - b'0') as isize).unwrap_or("")),
            b'\\' => out.push('\\'),
            _ => {
                // Unrecognized escape: keep the backslash and the full
                // (possibly multibyte) character that follows.
                let tail = &template[backslash + 1..];
                let char_len = tail.chars().next().map_or(1, char::len_utf8);
                out.push('\\');
                out.push_str(&tail[..char_len]);
                i = backslash + 1 + char_len;
                continue;
            }
        }
        i = backslash + 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchData {
        // /(foo)(bar)(BAZ)?/ against "XXfoobarbaz".
        MatchData::builder("XXfoobarbaz")
            .push_group(2, 8)
            .push_group(2, 5)
            .push_group(5, 8)
            .push_unmatched()
            .finish()
            .unwrap()
    }

    #[test]
    fn literal_text_passes_through() {
        let m = sample();
        assert_eq!(expand("no escapes here", &m), "no escapes here");
        assert_eq!(expand("", &m), "");
    }

    #[test]
    fn group_references() {
        let m = sample();
        assert_eq!(expand(r"\0-\1", &m), "foobar-foo");
        assert_eq!(expand(r"\2\1", &m), "barfoo");
        // Absent and out-of-range groups expand to nothing.
        assert_eq!(expand(r"[\3]", &m), "[]");
        assert_eq!(expand(r"[\9]", &m), "[]");
    }

    #[test]
    fn whole_match_and_context() {
        let m = sample();
        assert_eq!(expand(r"\&", &m), "foobar");
        assert_eq!(expand(r"\`", &m), "XX");
        assert_eq!(expand(r"\'", &m), "baz");
    }

    #[test]
    fn plus_takes_last_participating_capture() {
        let m = sample();
        assert_eq!(expand(r"\+", &m), "bar");

        let no_caps = MatchData::builder("abc").push_group(0, 2).finish().unwrap();
        assert_eq!(expand(r"<\+>", &no_caps), "<>");
    }

    #[test]
    fn escaped_and_trailing_backslash() {
        let m = sample();
        assert_eq!(expand(r"a\\b", &m), r"a\b");
        assert_eq!(expand("tail\\", &m), "tail\\");
        assert_eq!(expand("\\", &m), "\\");
    }

    #[test]
    fn unrecognized_escape_passes_through() {
        let m = sample();
        assert_eq!(expand(r"\z", &m), r"\z");
        assert_eq!(expand(r"a\!b", &m), r"a\!b");
        // Multibyte character after the backslash survives intact.
        assert_eq!(expand("pre\\é post", &m), "pre\\é post");
    }

    #[test]
    fn mixed_template() {
        let m = sample();
        assert_eq!(expand(r"[\1|\2|\3]\\", &m), r"[foo|bar|]\");
    }
}
