//! The tail of character dispatch (§4.1 steps 5-8, post-routing, and commit):
//! comment-char/backslash/tab/newline handling, the paren-trail "closable"
//! reset, argument tab-stop tracking, and splicing the (possibly rewritten)
//! character back into the output line.

use crate::state::opener::{is_close_paren, ArgTabStop};
use crate::state::State;
use crate::text_ops;

pub(crate) fn start_comment(state: &mut State) {
    state.is_in_comment = true;
    state.comment_x = Some(state.x);
    state.tracking_arg_tab_stop = None;
}

pub(crate) fn start_escaping(state: &mut State) {
    state.is_escaping = true;
}

pub(crate) fn rewrite_tab(state: &mut State) {
    state.ch = "  ".to_string();
}

pub(crate) fn clear_newline(state: &mut State) {
    state.is_in_comment = false;
    state.ch = String::new();
}

/// Is `ch` a character that could terminate a "list" — i.e. could begin a
/// fresh trailing run of close-parens right after it? Any non-whitespace,
/// non-close-paren, non-empty code character qualifies (§4.1 post-routing).
fn is_closable(ch: &str, is_in_code: bool) -> bool {
    if !is_in_code || ch.is_empty() {
        return false;
    }
    let c = ch.chars().next().unwrap();
    if c == ' ' || c == '\t' || c == '\n' {
        return false;
    }
    !is_close_paren(c)
}

/// Post-routing bookkeeping (§4.1, the paragraph after the numbered steps)
/// plus the final commit of the (possibly rewritten) character into the
/// output line. `orig_ch` is the character as read from the input, before
/// any rewrite made during this dispatch pass.
pub(crate) fn finish_dispatch(state: &mut State, orig_ch: &str) {
    state.is_in_code = !state.is_in_comment && !state.is_in_str;

    if orig_ch == "\n" {
        // The synthetic end-of-line character is never part of a line's
        // stored text (lines are joined back together with "\n" at the very
        // end) — nothing to splice, and no length change to attribute to
        // `indent_delta`.
        return;
    }

    let orig_len = text_ops::char_len(orig_ch);

    if is_closable(&state.ch, state.is_in_code) {
        let reset_x = state.x + text_ops::char_len(&state.ch);
        let reset_line = state.line_no;
        state.paren_trail.reset(reset_line, reset_x);
    }

    if let Some(stage) = state.tracking_arg_tab_stop {
        match stage {
            // Waiting for the whitespace that follows the opener's operator
            // token; non-whitespace content (the operator itself) doesn't
            // end the wait.
            ArgTabStop::Space => {
                if state.ch == " " {
                    state.tracking_arg_tab_stop = Some(ArgTabStop::Arg);
                }
            }
            // Whitespace seen; the next non-whitespace char is the argument
            // column.
            ArgTabStop::Arg => {
                if !state.ch.is_empty() && state.ch != " " {
                    if let Some(opener) = state.paren_stack.last_mut() {
                        opener.arg_x = Some(state.x);
                    }
                    state.tracking_arg_tab_stop = None;
                }
            }
        }
    }

    let new_len = text_ops::char_len(&state.ch);
    if state.ch != orig_ch {
        let line_idx = state.line_no - 1;
        state.lines[line_idx] = text_ops::splice(&state.lines[line_idx], state.x, state.x + orig_len, &state.ch);
        state.indent_delta -= (orig_len + new_len) as isize;
        if let (Some(cl), Some(cx)) = (state.cursor_line, state.cursor_x) {
            if cl == state.line_no && cx > state.x {
                state.cursor_x = Some((cx as isize + (new_len as isize - orig_len as isize)).max(0) as usize);
            }
        }
    }

    state.x += new_len;
}
