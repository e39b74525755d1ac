//! Inputs accepted by [`crate::indent_mode`], [`crate::paren_mode`], and
//! [`crate::smart_mode`].
//!
//! This is the "thin" layer the core treats as an external collaborator: it
//! only normalizes caller input into the shape the reconciler expects.

use serde::{Deserialize, Serialize};

/// A single caller-reported edit, in 1-based input coordinates.
///
/// `old_text`/`new_text` are assumed to be single-line (no embedded
/// newlines) — a multi-line replacement is reported by the caller as a
/// sequence of single-line changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInput {
    pub line_no: usize,
    pub x: usize,
    pub old_text: String,
    pub new_text: String,
}

/// The ordered, de-duplicated set of characters that start a line comment.
///
/// Defaults to `[';']`. Construct from a single `char` or any string-like
/// value; duplicates are dropped, first occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentChars(Vec<char>);

impl Default for CommentChars {
    fn default() -> Self {
        Self(vec![';'])
    }
}

impl CommentChars {
    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }
}

impl From<char> for CommentChars {
    fn from(ch: char) -> Self {
        Self(vec![ch])
    }
}

impl From<&str> for CommentChars {
    fn from(s: &str) -> Self {
        let mut seen = Vec::new();
        for ch in s.chars() {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        if seen.is_empty() {
            return Self::default();
        }
        Self(seen)
    }
}

impl From<String> for CommentChars {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Caller-supplied context for a single pass.
///
/// All coordinates are 1-based; `None` means "unknown/absent" (there is no
/// sentinel integer anywhere in this crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub cursor_line: Option<usize>,
    pub cursor_x: Option<usize>,
    pub prev_cursor_line: Option<usize>,
    pub prev_cursor_x: Option<usize>,
    pub selection_start_line: Option<usize>,
    pub changes: Vec<ChangeInput>,
    pub force_balance: bool,
    pub partial_result: bool,
    pub return_parens: bool,
    pub comment_chars: CommentChars,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            cursor_line: None,
            cursor_x: None,
            prev_cursor_line: None,
            prev_cursor_x: None,
            selection_start_line: None,
            changes: Vec::new(),
            force_balance: false,
            partial_result: false,
            return_parens: false,
            comment_chars: CommentChars::default(),
        }
    }
}

impl Options {
    /// A caller-supplied `0` is not a valid 1-based coordinate; treat it the
    /// same as "absent" rather than letting it silently shift every
    /// downstream comparison by one.
    pub(crate) fn normalized(mut self) -> Self {
        let fix = |v: Option<usize>| v.filter(|&n| n > 0);
        self.cursor_line = fix(self.cursor_line);
        self.cursor_x = fix(self.cursor_x);
        self.prev_cursor_line = fix(self.prev_cursor_line);
        self.prev_cursor_x = fix(self.prev_cursor_x);
        self.selection_start_line = fix(self.selection_start_line);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_comment_chars_is_semicolon() {
        assert_eq!(CommentChars::default().chars(), &[';']);
    }

    #[test]
    fn from_str_dedupes_preserving_order() {
        let cc = CommentChars::from("#;#");
        assert_eq!(cc.chars(), &['#', ';']);
    }

    #[test]
    fn zero_coordinates_normalize_to_absent() {
        let opts = Options {
            cursor_line: Some(0),
            cursor_x: Some(3),
            ..Options::default()
        }
        .normalized();
        assert_eq!(opts.cursor_line, None);
        assert_eq!(opts.cursor_x, Some(3));
    }
}
