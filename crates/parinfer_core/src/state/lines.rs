//! Splitting the raw input text into logical lines.
//!
//! Accepts `\n`, `\r\n`, and `\r` as line endings (§6). The final trailing
//! empty line is preserved when the input ends with a line ending, matching
//! `str::split` semantics over a normalized `\n`-only copy.

/// Split `text` into lines on any of `\n`, `\r\n`, `\r`.
///
/// If `text` ends with a line ending, the returned vector has a trailing
/// empty `String` for the (empty) line that follows it — this is what lets
/// the line loop re-emit a final blank line rather than swallowing it.
pub(crate) fn split_input_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_all_three_line_endings() {
        assert_eq!(split_input_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_input_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_input_lines("a\rb"), vec!["a", "b"]);
    }

    #[test]
    fn trailing_newline_preserves_empty_final_line() {
        assert_eq!(split_input_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_input_lines("a"), vec!["a"]);
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        assert_eq!(split_input_lines(""), vec![""]);
    }
}
