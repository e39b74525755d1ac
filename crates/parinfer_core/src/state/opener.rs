//! The paren stack: each entry is an *opener* — a still-open `( [ {` and
//! everything the reconciler has learned about it so far.

use crate::outcome::CloserInfo;

/// Which whitespace→non-whitespace micro-state an opener is tracking while
/// looking for its first argument's column (§4.2, §4.1 rule about
/// `trackingArgTabStop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArgTabStop {
    /// Looking for the whitespace that follows the operator token.
    Space,
    /// Whitespace seen; the next non-whitespace char is the argument column.
    Arg,
}

/// One entry of the paren stack.
///
/// All positions are 1-based. `input_line_no`/`input_x` record where the
/// opener sat in the *original* text (used for error reporting);
/// `line_no`/`x` track its position in the (possibly already-edited)
/// output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Opener {
    pub input_line_no: usize,
    pub input_x: usize,
    pub line_no: usize,
    pub x: usize,
    pub ch: char,

    /// Net columns this opener's line has shifted by edits the reconciler
    /// made (not edits the user made — see `Options::changes`), used by
    /// parent-opener resolution (§4.5).
    pub indent_delta: isize,

    /// The indentation column reserved for this opener's children once one
    /// has been seen on its own starting line.
    pub max_child_indent: Option<usize>,

    /// The column of this opener's first argument, once known; feeds
    /// `TabStop` collection for the cursor's line.
    pub arg_x: Option<usize>,

    pub closer: Option<CloserInfo>,

    /// Index into `State::paren_arena`, set only when `return_parens`.
    pub(crate) arena_idx: Option<usize>,
}

impl Opener {
    pub fn new(
        input_line_no: usize,
        input_x: usize,
        line_no: usize,
        x: usize,
        ch: char,
        indent_delta: isize,
    ) -> Self {
        Self {
            input_line_no,
            input_x,
            line_no,
            x,
            ch,
            indent_delta,
            max_child_indent: None,
            arg_x: None,
            closer: None,
            arena_idx: None,
        }
    }
}

/// `( [ {` → the fixed map to `) ] }`.
pub(crate) fn matching_closer(ch: char) -> Option<char> {
    match ch {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

pub(crate) fn is_open_paren(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

pub(crate) fn is_close_paren(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}
