//! The line loop (§2 step 2) and the restart trampoline (§2 step 5, §4.8).
//!
//! This is the only place that distinguishes `Signal::Restart` from
//! `Signal::Error` — everywhere else in the crate, both just `?`-propagate
//! out of whatever attempt is currently running.

use tracing::{debug, warn};

use crate::dispatch::{commit_only, dispatch_char};
use crate::error::ParinferError;
use crate::finalize::finalize;
use crate::indent::{finalize_line, handle_line_start, LineStartOutcome};
use crate::options::Options;
use crate::outcome::{Outcome, TabStop};
use crate::signal::Signal;
use crate::state::{Mode, State};

fn run_line_loop(state: &mut State) -> Result<(), Signal> {
    let line_count = state.input_lines.len();

    for line_idx in 0..line_count {
        let line_no = line_idx + 1;
        state.line_no = line_no;
        state.input_line_no = line_no;
        state.x = 1;
        state.input_x = 1;
        state.tracking_indent = !state.is_in_str;
        state.current_line_indent_x = None;

        if state.line_has_cursor_interest(line_no) {
            let stops: Vec<(char, usize, usize, usize)> = state
                .paren_stack
                .iter()
                .filter_map(|o| o.arg_x.map(|arg_x| (o.ch, o.x, o.line_no, arg_x)))
                .collect();
            for (ch, x, opener_line_no, arg_x) in stops {
                state.tab_stops.push(TabStop {
                    ch,
                    x,
                    line_no: opener_line_no,
                    start_x: x,
                    end_x: arg_x,
                });
            }
        }

        let mut chars: Vec<char> = state.input_lines[line_idx].chars().collect();
        chars.push('\n');

        for (i, c) in chars.into_iter().enumerate() {
            state.input_x = i + 1;

            let delta_adjust = state
                .changes
                .get(&state.input_line_no)
                .and_then(|by_x| by_x.get(&state.input_x))
                .map(|rec| rec.new_end_x as isize - rec.old_end_x as isize);
            if let Some(adjust) = delta_adjust {
                state.indent_delta += adjust;
            }

            let orig_ch = c.to_string();

            if state.tracking_indent && c != ' ' && c != '\t' && c != '\n' {
                state.tracking_indent = false;
                match handle_line_start(state, &orig_ch)? {
                    LineStartOutcome::Handled => commit_only(state, &orig_ch),
                    LineStartOutcome::Continue => dispatch_char(state, &orig_ch)?,
                }
            } else {
                dispatch_char(state, &orig_ch)?;
            }
        }

        finalize_line(state);
    }

    finalize(state)
}

fn build_outcome(state: State) -> Outcome {
    Outcome {
        success: true,
        text: state.lines.join("\n"),
        cursor_x: state.cursor_x,
        cursor_line: state.cursor_line,
        tab_stops: state.tab_stops,
        paren_trails: state.paren_trails,
        parens: state.paren_arena.map(|arena| arena.into_tree()),
        error: None,
    }
}

fn failure_outcome(state: State, err: ParinferError, partial_result: bool) -> Outcome {
    if partial_result {
        Outcome {
            success: false,
            text: state.lines.join("\n"),
            cursor_x: state.cursor_x,
            cursor_line: state.cursor_line,
            tab_stops: state.tab_stops,
            paren_trails: state.paren_trails,
            parens: state.paren_arena.map(|arena| arena.into_tree()),
            error: Some(err),
        }
    } else {
        Outcome {
            success: false,
            text: state.orig_text,
            cursor_x: state.orig_cursor_x,
            cursor_line: state.orig_cursor_line,
            tab_stops: Vec::new(),
            paren_trails: Vec::new(),
            parens: None,
            error: Some(err),
        }
    }
}

/// Run one `(mode, smart)` attempt, restarting once as Paren Mode if the
/// attempt raised the internal restart sentinel. Bounded to at most two
/// attempts: Paren Mode never raises `Signal::Restart` itself.
pub(crate) fn run(mode: Mode, smart: bool, text: &str, options: Options) -> Outcome {
    let options = options.normalized();

    let span = tracing::info_span!("parinfer_pass", mode = ?mode, smart, input_len = text.len());
    let _enter = span.enter();
    debug!("starting pass");

    let mut state = State::new(mode, smart, text, &options);
    match run_line_loop(&mut state) {
        Ok(()) => build_outcome(state),
        Err(Signal::Restart) => {
            warn!("restarting pass in paren mode");
            let mut retry = State::new(Mode::Paren, false, text, &options);
            match run_line_loop(&mut retry) {
                Ok(()) => build_outcome(retry),
                Err(Signal::Restart) => {
                    unreachable!("paren mode attempts never raise the restart sentinel")
                }
                Err(Signal::Error(err)) => {
                    warn!(error = %err, "pass failed after restart");
                    failure_outcome(retry, err, options.partial_result)
                }
            }
        }
        Err(Signal::Error(err)) => {
            warn!(error = %err, "pass failed");
            failure_outcome(state, err, options.partial_result)
        }
    }
}
