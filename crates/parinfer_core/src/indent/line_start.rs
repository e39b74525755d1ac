//! The three line-start handlers (§4.4): dispatched once per line, on the
//! first character that is neither newline, space, nor tab.

use crate::error::{ErrorName, ExtraError, ParinferError};
use crate::indent::parent::parent_opener_index;
use crate::indent::trail_ops::{append_leading_close, clamp_indent_to_parent, correct_paren_trail};
use crate::signal::Signal;
use crate::state::opener::{is_close_paren, matching_closer};
use crate::state::{Mode, State};

/// What the caller should do with the character that triggered this
/// handler once it returns.
pub(crate) enum LineStartOutcome {
    /// Fully handled (e.g. a leading close-paren absorbed into the trail);
    /// the caller commits the (now possibly empty) `state.ch` without
    /// running normal dispatch again.
    Handled,
    /// Indentation bookkeeping ran; the character still needs its own
    /// normal dispatch (it may open a form, start a comment, etc).
    Continue,
}

pub(crate) fn handle_line_start(state: &mut State, orig_ch: &str) -> Result<LineStartOutcome, Signal> {
    let indent_x = state.x;
    state.current_line_indent_x = Some(indent_x);

    let ch = orig_ch.chars().next().unwrap_or('\0');

    if state.is_in_code && is_close_paren(ch) {
        handle_leading_close_paren(state, ch)
    } else if state.is_in_code && state.comment_chars.contains(ch) {
        handle_leading_comment(state, indent_x);
        Ok(LineStartOutcome::Continue)
    } else {
        on_indent(state, indent_x)?;
        Ok(LineStartOutcome::Continue)
    }
}

fn handle_leading_close_paren(state: &mut State, close_ch: char) -> Result<LineStartOutcome, Signal> {
    match state.mode {
        Mode::Indent => {
            if state.force_balance {
                return Ok(LineStartOutcome::Continue);
            }
            if state.smart {
                return Err(Signal::Restart);
            }
            state.cache_error_pos(ErrorName::LeadingCloseParen, state.input_line_no, state.input_x);
            state.ch = String::new();
            Ok(LineStartOutcome::Handled)
        }
        Mode::Paren => {
            let matches_top = state
                .paren_stack
                .last()
                .map(|o| matching_closer(o.ch) == Some(close_ch))
                .unwrap_or(false);

            if !matches_top {
                if state.smart {
                    state.ch = String::new();
                    return Ok(LineStartOutcome::Handled);
                }
                let extra = state.paren_stack.last().map(|o| ExtraError {
                    line_no: o.input_line_no,
                    x: o.input_x,
                });
                let mut err =
                    ParinferError::new(ErrorName::UnmatchedCloseParen, state.input_line_no, state.input_x);
                if let Some(extra) = extra {
                    err = err.with_extra(extra);
                }
                return Err(err.into());
            }

            let cursor_left_of_it = state.cursor_line == Some(state.line_no)
                && state.cursor_x.map(|cx| cx < state.x).unwrap_or(false);

            if cursor_left_of_it {
                clamp_indent_to_parent(state, state.x);
                Ok(LineStartOutcome::Continue)
            } else {
                append_leading_close(state);
                Ok(LineStartOutcome::Handled)
            }
        }
    }
}

fn handle_leading_comment(state: &mut State, indent_x: usize) {
    let Some(idx) = parent_opener_index(state, indent_x) else {
        return;
    };
    let delta = state.paren_stack[idx].indent_delta;
    if delta != 0 {
        state.paren_stack[idx].indent_delta = 0;
        crate::indent::trail_ops::apply_pending_indent_delta(state, delta);
    }
}

fn on_indent(state: &mut State, indent_x: usize) -> Result<(), Signal> {
    if state.quote_danger {
        return Err(
            ParinferError::new(ErrorName::QuoteDanger, state.input_line_no, state.input_x).into(),
        );
    }

    match state.mode {
        Mode::Indent => correct_paren_trail(state, indent_x)?,
        Mode::Paren => clamp_indent_to_parent(state, indent_x),
    }
    Ok(())
}
