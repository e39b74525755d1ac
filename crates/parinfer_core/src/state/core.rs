//! The working value threaded through a single reconciliation pass.
//!
//! Named `State` rather than the distilled design's "Result" to avoid
//! colliding with `std::result::Result`; the public, serializable type
//! handed back to callers is [`crate::outcome::Outcome`], derived from this
//! at the very end of [`crate::driver::run_pass`].
//!
//! A `State` is built once per attempt (§4.8) and never reused across a
//! restart — the Paren Mode retry gets its own fresh value.

use std::collections::HashMap;

use crate::error::{ErrorName, ErrorPos, ParinferError};
use crate::options::{CommentChars, Options};
use crate::outcome::{ParenTrailRange, TabStop};
use crate::state::changes::{build_change_index, ChangeIndex};
use crate::state::lines::split_input_lines;
use crate::state::opener::{ArgTabStop, Opener};
use crate::state::paren_trail::ParenTrail;
use crate::state::paren_tree::ParenArena;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Indent,
    Paren,
}

/// A stray close-paren Indent Mode dropped rather than failed on outright
/// (§4.3). `output_line_no`/`output_x` are this character's position in
/// *output* coordinates, the same space `ParenTrail::start_x`/`end_x` use,
/// so it can be compared against the line's eventual trail once that trail
/// is corrected; `error` is the diagnostic to raise if it turns out the
/// trail never grew to cover this position.
#[derive(Debug, Clone)]
pub(crate) struct PendingStrayClose {
    pub output_line_no: usize,
    pub output_x: usize,
    pub error: ParinferError,
}

pub(crate) struct State {
    pub mode: Mode,
    pub smart: bool,

    pub orig_text: String,
    pub orig_cursor_line: Option<usize>,
    pub orig_cursor_x: Option<usize>,

    pub input_lines: Vec<String>,
    pub input_line_no: usize,
    pub input_x: usize,

    pub lines: Vec<String>,
    pub line_no: usize,
    pub x: usize,
    pub ch: String,

    pub paren_stack: Vec<Opener>,
    pub paren_trail: ParenTrail,
    pub paren_trails: Vec<ParenTrailRange>,

    pub cursor_line: Option<usize>,
    pub cursor_x: Option<usize>,
    pub prev_cursor_line: Option<usize>,
    pub prev_cursor_x: Option<usize>,
    pub selection_start_line: Option<usize>,

    pub is_in_code: bool,
    pub is_in_str: bool,
    pub is_in_comment: bool,
    pub is_escaping: bool,
    pub is_escaped: bool,
    pub quote_danger: bool,
    pub comment_x: Option<usize>,
    pub comment_chars: CommentChars,

    pub tracking_indent: bool,
    pub indent_delta: isize,
    pub tracking_arg_tab_stop: Option<ArgTabStop>,
    /// This line's indentation column, recorded once `on_indent` runs for
    /// it; used to set a parent opener's `max_child_indent` on first child.
    pub current_line_indent_x: Option<usize>,

    pub changes: ChangeIndex,

    pub error_pos_cache: HashMap<ErrorName, ErrorPos>,
    pub pending_stray_close: Option<PendingStrayClose>,
    pub error: Option<ParinferError>,
    pub success: bool,

    pub tab_stops: Vec<TabStop>,
    pub paren_arena: Option<ParenArena>,

    pub partial_result: bool,
    pub force_balance: bool,
    pub return_parens: bool,
}

impl State {
    pub fn new(mode: Mode, smart: bool, text: &str, options: &Options) -> Self {
        let input_lines = split_input_lines(text);
        let lines = input_lines.clone();

        Self {
            mode,
            smart,

            orig_text: text.to_string(),
            orig_cursor_line: options.cursor_line,
            orig_cursor_x: options.cursor_x,

            input_lines,
            input_line_no: 0,
            input_x: 0,

            lines,
            line_no: 0,
            x: 0,
            ch: String::new(),

            paren_stack: Vec::new(),
            paren_trail: ParenTrail::default(),
            paren_trails: Vec::new(),

            cursor_line: options.cursor_line,
            cursor_x: options.cursor_x,
            prev_cursor_line: options.prev_cursor_line,
            prev_cursor_x: options.prev_cursor_x,
            selection_start_line: options.selection_start_line,

            is_in_code: true,
            is_in_str: false,
            is_in_comment: false,
            is_escaping: false,
            is_escaped: false,
            quote_danger: false,
            comment_x: None,
            comment_chars: options.comment_chars.clone(),

            tracking_indent: false,
            indent_delta: 0,
            tracking_arg_tab_stop: None,
            current_line_indent_x: None,

            changes: build_change_index(&options.changes),

            error_pos_cache: HashMap::new(),
            pending_stray_close: None,
            error: None,
            success: true,

            tab_stops: Vec::new(),
            paren_arena: if options.return_parens {
                Some(ParenArena::default())
            } else {
                None
            },

            partial_result: options.partial_result,
            force_balance: options.force_balance,
            return_parens: options.return_parens,
        }
    }

    /// Is `line_no` the cursor's line, or within an active selection that
    /// starts at `selection_start_line` and ends at the cursor?
    pub fn line_has_cursor_interest(&self, line_no: usize) -> bool {
        if self.cursor_line == Some(line_no) {
            return true;
        }
        if let (Some(start), Some(cursor)) = (self.selection_start_line, self.cursor_line) {
            let (lo, hi) = if start <= cursor {
                (start, cursor)
            } else {
                (cursor, start)
            };
            return line_no >= lo && line_no <= hi;
        }
        false
    }

    pub fn cache_error_pos(&mut self, name: ErrorName, line_no: usize, x: usize) {
        self.error_pos_cache.insert(name, ErrorPos { line_no, x });
    }
}
