//! Escaping and truncation helpers for HTML and SVG output.

/// Escapes `&`, `<`, `>`, `"`, and `'` for use in element text and
/// attribute values (HTML and SVG alike).
#[must_use]
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Shortens `input` to at most `max_chars` characters, replacing the
/// tail with `...` when it is cut. Counts characters, not bytes.
#[must_use]
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = input.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Replaces line breaks with single spaces.
#[must_use]
pub fn fold_lines(input: &str) -> String {
    input
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_markup(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn truncation_budget() {
        let short = "a".repeat(60);
        assert_eq!(truncate_chars(&short, 60), short);

        let long = "b".repeat(61);
        let cut = truncate_chars(&long, 60);
        assert_eq!(cut.chars().count(), 60);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"b".repeat(57)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let emoji = "🚀".repeat(70);
        let cut = truncate_chars(&emoji, 60);
        assert_eq!(cut.chars().count(), 60);
    }

    #[test]
    fn folds_newlines() {
        assert_eq!(fold_lines("one\ntwo\r\nthree"), "one two three");
    }
}
