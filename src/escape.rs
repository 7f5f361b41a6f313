// escape.rs - Escape metacharacters so a string matches itself literally.

/// Escape every pattern metacharacter in `text` for literal use inside a
/// pattern. Control characters map to their letter escapes (`\n`, `\t`,
/// ...); everything outside the table passes through unchanged.
///
/// # Examples
///
/// ```
/// use resub::escape::escape;
///
/// assert_eq!(escape("1 + 1 = 2?"), r"1\ \+\ 1\ =\ 2\?");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ' ' => out.push_str("\\ "),
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '|' => out.push_str("\\|"),
            '-' => out.push_str("\\-"),
            '*' => out.push_str("\\*"),
            '.' => out.push_str("\\."),
            '\\' => out.push_str("\\\\"),
            '?' => out.push_str("\\?"),
            '+' => out.push_str("\\+"),
            '^' => out.push_str("\\^"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            _ => out.push(c),
        }
    }
    out
}
