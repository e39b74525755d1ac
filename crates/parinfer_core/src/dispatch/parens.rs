//! Open- and close-paren events (§4.2, §4.3).

use crate::error::{ErrorName, ExtraError, ParinferError};
use crate::outcome::CloserInfo;
use crate::signal::Signal;
use crate::state::opener::{matching_closer, ArgTabStop, Opener};
use crate::state::{Mode, PendingStrayClose, State};

pub(crate) fn handle_open_paren(state: &mut State) {
    if !state.is_in_code {
        return;
    }
    let ch = state.ch.chars().next().expect("open-paren dispatch on non-empty ch");
    let parent_arena_idx = state.paren_stack.last().and_then(|o| o.arena_idx);

    let mut opener = Opener::new(
        state.input_line_no,
        state.input_x,
        state.line_no,
        state.x,
        ch,
        state.indent_delta,
    );

    if state.return_parens {
        let arena = state.paren_arena.get_or_insert_with(Default::default);
        opener.arena_idx = Some(arena.push(opener.line_no, opener.x, opener.ch, parent_arena_idx));
    }

    state.paren_stack.push(opener);
    state.tracking_arg_tab_stop = Some(ArgTabStop::Space);
}

fn cursor_holds(
    parent_x: Option<usize>,
    opener: &Opener,
    cursor_line: Option<usize>,
    cursor_x: Option<usize>,
) -> bool {
    let (Some(line), Some(x)) = (cursor_line, cursor_x) else {
        return false;
    };
    if line != opener.line_no {
        return false;
    }
    let lower = parent_x.map(|px| px + 1).unwrap_or(1);
    x >= lower && x <= opener.x
}

pub(crate) fn handle_close_paren(state: &mut State) -> Result<(), Signal> {
    if !state.is_in_code {
        return Ok(());
    }
    let close_ch = state.ch.chars().next().expect("close-paren dispatch on non-empty ch");

    let matches_top = state
        .paren_stack
        .last()
        .map(|top| matching_closer(top.ch) == Some(close_ch))
        .unwrap_or(false);

    if !matches_top {
        return handle_unmatched_close(state);
    }

    let mut opener = state.paren_stack.pop().expect("checked non-empty above");
    let closer = CloserInfo {
        line_no: state.line_no,
        x: state.x,
        ch: close_ch,
    };
    opener.closer = Some(closer);
    if state.return_parens {
        if let (Some(arena), Some(idx)) = (state.paren_arena.as_mut(), opener.arena_idx) {
            arena.set_closer(idx, closer);
        }
    }

    if state.mode == Mode::Indent && state.smart {
        let parent_x = state.paren_stack.last().map(|p| p.x);
        let holding_now = cursor_holds(parent_x, &opener, state.cursor_line, state.cursor_x);
        let holding_prev = cursor_holds(parent_x, &opener, state.prev_cursor_line, state.prev_cursor_x);

        if holding_prev && !holding_now {
            return Err(Signal::Restart);
        }
        if holding_now {
            let clamped_start = state.paren_trail.clamped.start_x.or(state.paren_trail.start_x);
            let clamped_end = Some(state.x + 1);
            let mut clamped_openers = std::mem::take(&mut state.paren_trail.clamped.openers);
            clamped_openers.push(opener);

            let reset_line = state.line_no;
            let reset_x = state.x + 1;
            state.paren_trail.reset(reset_line, reset_x);

            // `reset` unconditionally clears `clamped` — it's preserved across
            // the call above and restored here so the original (pre-hold)
            // positions survive for `remember_paren_trail` to read back.
            state.paren_trail.clamped.start_x = clamped_start;
            state.paren_trail.clamped.end_x = clamped_end;
            state.paren_trail.clamped.openers = clamped_openers;
            return Ok(());
        }
    }

    if !state.paren_trail.is_active() {
        state.paren_trail.reset(state.line_no, state.x);
    }
    state.paren_trail.openers.push(opener);
    state.paren_trail.end_x = Some(state.x + 1);
    Ok(())
}

fn handle_unmatched_close(state: &mut State) -> Result<(), Signal> {
    match state.mode {
        Mode::Paren => {
            let within_leading_trail = state.smart
                && state
                    .paren_trail
                    .start_x
                    .map(|start| state.x >= start)
                    .unwrap_or(false);
            if within_leading_trail {
                state.ch.clear();
                Ok(())
            } else {
                let extra = state.paren_stack.last().map(|o| ExtraError {
                    line_no: o.input_line_no,
                    x: o.input_x,
                });
                let mut err =
                    ParinferError::new(ErrorName::UnmatchedCloseParen, state.input_line_no, state.input_x);
                if let Some(extra) = extra {
                    err = err.with_extra(extra);
                }
                Err(err.into())
            }
        }
        Mode::Indent => {
            state.cache_error_pos(ErrorName::UnmatchedCloseParen, state.input_line_no, state.input_x);

            let top_pos = state.paren_stack.last().map(|top| (top.input_line_no, top.input_x));
            let mut error =
                ParinferError::new(ErrorName::UnmatchedCloseParen, state.input_line_no, state.input_x);
            if let Some((line_no, x)) = top_pos {
                state.cache_error_pos(ErrorName::UnmatchedOpenParen, line_no, x);
                error = error.with_extra(ExtraError { line_no, x });
            }
            state.pending_stray_close = Some(PendingStrayClose {
                output_line_no: state.line_no,
                output_x: state.x,
                error,
            });

            state.ch.clear();
            Ok(())
        }
    }
}
