//! Paren-trail operations (§4.6): reset lives on `ParenTrail` itself
//! (`state/paren_trail.rs`); everything else that mutates a trail against
//! the rest of `State` lives here.

use crate::indent::parent::parent_opener_index;
use crate::outcome::{CloserInfo, ParenTrailRange};
use crate::signal::Signal;
use crate::state::opener::matching_closer;
use crate::state::paren_trail::ClampedTrail;
use crate::state::{Mode, State};
use crate::text_ops;

/// Remember the trail's (possibly clamped) extent as a completed range,
/// coalescing with the previous entry when it's the same line.
pub(crate) fn remember_paren_trail(state: &mut State) {
    let (Some(line_no), Some(trail_end)) = (state.paren_trail.line_no, state.paren_trail.end_x) else {
        return;
    };
    let start_x = state.paren_trail.clamped.start_x.or(state.paren_trail.start_x);
    let end_x = state.paren_trail.clamped.end_x.or(Some(trail_end));
    let (Some(start_x), Some(end_x)) = (start_x, end_x) else {
        return;
    };
    if start_x >= end_x {
        return;
    }
    if let Some(last) = state.paren_trails.last_mut() {
        if last.line_no == line_no {
            last.end_x = last.end_x.max(end_x);
            return;
        }
    }
    state.paren_trails.push(ParenTrailRange { line_no, start_x, end_x });
}

fn leading_space_count(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Shift the current output line's leading whitespace by `delta` columns,
/// keeping `state.x` in sync with the characters that moved under it.
pub(crate) fn apply_pending_indent_delta(state: &mut State, delta: isize) {
    if delta == 0 || state.line_no == 0 || state.line_no > state.lines.len() {
        // No real output line to shift — e.g. the synthetic final indent
        // event in Indent Mode finalize has no line of its own.
        return;
    }
    let line_idx = state.line_no - 1;
    let current_indent = leading_space_count(&state.lines[line_idx]);
    let new_indent = (current_indent as isize + delta).max(0) as usize;
    let new_ws = " ".repeat(new_indent);
    state.lines[line_idx] = text_ops::splice(&state.lines[line_idx], 1, current_indent + 1, &new_ws);
    let shift = new_indent as isize - current_indent as isize;
    state.x = (state.x as isize + shift).max(1) as usize;
}

/// A stray close-paren Indent Mode cached rather than failed on outright
/// (§4.3) only actually fails once its line's trail is finalized. "Sits
/// outside the eventual paren trail" means real content reset the trail
/// to start somewhere past the stray — i.e. `start_x` (every ordinary
/// character the trail absorbs keeps `start_x` at or behind it; only a
/// fresh `is_closable` reset after the stray moves `start_x` past it).
fn check_pending_stray_close(state: &mut State, line_no: usize, start_x: usize) -> Result<(), Signal> {
    let is_this_line = state
        .pending_stray_close
        .as_ref()
        .is_some_and(|pending| pending.output_line_no == line_no);
    if !is_this_line {
        return Ok(());
    }
    let pending = state.pending_stray_close.take().expect("checked above");
    if pending.output_x < start_x {
        return Err(pending.error.into());
    }
    Ok(())
}

/// *Correct* (Indent Mode, from `on_indent`): close the previous line's
/// still-pending trail down to the resolved parent, splicing the missing
/// close characters onto that trail's own line.
pub(crate) fn correct_paren_trail(state: &mut State, indent_x: usize) -> Result<(), Signal> {
    if !state.paren_trail.is_active() {
        return Ok(());
    }
    let parent_idx = parent_opener_index(state, indent_x);
    let pop_count = match parent_idx {
        Some(idx) => state.paren_stack.len() - 1 - idx,
        None => state.paren_stack.len(),
    };

    if pop_count > 0 {
        let line_no = state.paren_trail.line_no.expect("checked active above");
        let line_idx = line_no - 1;
        let start_x = state.paren_trail.start_x.expect("active trail has start_x");
        let end_x = state.paren_trail.end_x.expect("active trail has end_x");
        let mut closers = String::new();

        for _ in 0..pop_count {
            let Some(mut opener) = state.paren_stack.pop() else {
                break;
            };
            if let Some(c) = matching_closer(opener.ch) {
                let pos = start_x + closers.chars().count();
                closers.push(c);
                let closer = CloserInfo { line_no, x: pos, ch: c };
                opener.closer = Some(closer);
                if state.return_parens {
                    if let (Some(arena), Some(idx)) = (state.paren_arena.as_mut(), opener.arena_idx) {
                        arena.set_closer(idx, closer);
                    }
                }
            }
            state.paren_trail.openers.push(opener);
        }

        // Replace the trail's whole existing span, not just insert at its
        // end — the span may already hold real closer characters from a
        // close-paren this same line matched earlier in the pass.
        state.lines[line_idx] = text_ops::splice(&state.lines[line_idx], start_x, end_x, &closers);
        state.paren_trail.end_x = Some(start_x + closers.chars().count());
    }

    if let Some(line_no) = state.paren_trail.line_no {
        let start_x = state.paren_trail.clamped.start_x.or(state.paren_trail.start_x);
        if let Some(start_x) = start_x {
            check_pending_stray_close(state, line_no, start_x)?;
        }
    }

    remember_paren_trail(state);
    state.paren_trail.invalidate();

    if let Some(top) = state.paren_stack.last_mut() {
        let delta = top.indent_delta;
        if delta != 0 {
            top.indent_delta = 0;
            apply_pending_indent_delta(state, delta);
        }
    }

    Ok(())
}

/// *Correct the indentation* (Paren Mode, from `on_indent`): clamp this
/// line's indent into `[parent.x + 1, parent.max_child_indent]`, applying
/// the parent's own pending shift first.
pub(crate) fn clamp_indent_to_parent(state: &mut State, indent_x: usize) {
    let Some(idx) = parent_opener_index(state, indent_x) else {
        return;
    };

    let parent_delta = state.paren_stack[idx].indent_delta;
    if parent_delta != 0 {
        state.paren_stack[idx].indent_delta = 0;
        apply_pending_indent_delta(state, parent_delta);
    }

    let min_indent = state.paren_stack[idx].x + 1;
    let max_indent = state.paren_stack[idx]
        .max_child_indent
        .unwrap_or(usize::MAX)
        .max(min_indent);
    let current = state.x;
    let clamped = current.clamp(min_indent, max_indent);
    if clamped != current {
        apply_pending_indent_delta(state, clamped as isize - current as isize);
    }
}

/// Record this line's starting indentation as the still-open parent's
/// `max_child_indent`, first child wins (Paren Mode per-line finalize).
pub(crate) fn set_max_child_indent(state: &mut State) {
    let Some(indent_x) = state.current_line_indent_x else {
        return;
    };
    if let Some(top) = state.paren_stack.last_mut() {
        // The opener's own originating line isn't a child line — skip it so
        // the first *real* child sets this, not the opener's own column.
        if top.line_no == state.line_no {
            return;
        }
        if top.max_child_indent.is_none() {
            top.max_child_indent = Some(indent_x);
        }
    }
}

/// *Clamp to cursor* (Indent Mode, per-line finalize): split the trail into
/// a clamped prefix (already confirmed closed, since the cursor sits past
/// it) and a suffix that's still undecided.
pub(crate) fn clamp_trail_to_cursor(state: &mut State) {
    let Some(trail_line) = state.paren_trail.line_no else {
        return;
    };
    if state.is_in_comment || state.cursor_line != Some(trail_line) {
        return;
    }
    let (Some(cursor_x), Some(start_x)) = (state.cursor_x, state.paren_trail.start_x) else {
        return;
    };
    if cursor_x <= start_x {
        return;
    }
    let end_x = state.paren_trail.end_x.unwrap_or(start_x);
    let new_start = start_x.max(cursor_x);
    let new_end = end_x.max(cursor_x);
    let num_clamped = (new_start - start_x).min(state.paren_trail.openers.len());
    let clamped_openers: Vec<_> = state.paren_trail.openers.drain(..num_clamped).collect();

    state.paren_trail.clamped = ClampedTrail {
        start_x: Some(start_x),
        end_x: Some(new_start),
        openers: clamped_openers,
    };
    state.paren_trail.start_x = Some(new_start);
    state.paren_trail.end_x = Some(new_end);
}

/// *Pop* (Indent Mode, per-line finalize): anything left in `openers` after
/// clamping wasn't confirmed closed by the cursor — give it back to the
/// stack so the next line's `correct_paren_trail` decides its fate.
pub(crate) fn pop_trail_to_stack(state: &mut State) {
    if state.paren_trail.openers.is_empty() {
        return;
    }
    let openers: Vec<_> = state.paren_trail.openers.drain(..).rev().collect();
    for mut opener in openers {
        opener.closer = None;
        state.paren_stack.push(opener);
    }
}

/// *Clean* (Paren Mode, per-line finalize): a trail with spaces mixed in
/// among its close-parens (`" )  ) "`) gets those spaces stripped in place.
pub(crate) fn clean_trail(state: &mut State) {
    let Some(line_no) = state.paren_trail.line_no else {
        return;
    };
    if state.cursor_line == Some(line_no) {
        return;
    }
    let (Some(start_x), Some(end_x)) = (state.paren_trail.start_x, state.paren_trail.end_x) else {
        return;
    };
    if start_x >= end_x {
        return;
    }
    let line_idx = line_no - 1;
    let line = state.lines[line_idx].clone();
    let segment: String = line.chars().skip(start_x - 1).take(end_x - start_x).collect();
    if !segment.contains(' ') {
        return;
    }
    let cleaned: String = segment.chars().filter(|&c| c != ' ').collect();
    state.lines[line_idx] = text_ops::splice(&line, start_x, end_x, &cleaned);
    state.paren_trail.end_x = Some(start_x + cleaned.chars().count());
}

/// *Append* (Paren Mode, leading close-paren path): close the innermost
/// still-open form at the trail's current end, and drop the leading
/// character that triggered it (the caller clears `state.ch` to empty so
/// the normal commit step records the deletion).
pub(crate) fn append_leading_close(state: &mut State) {
    let Some(mut opener) = state.paren_stack.pop() else {
        return;
    };
    if !state.paren_trail.is_active() {
        state.paren_trail.reset(state.line_no, state.x);
    }
    let Some(close_ch) = matching_closer(opener.ch) else {
        state.paren_stack.push(opener);
        return;
    };
    let insert_at = state.paren_trail.end_x.unwrap_or(state.x);
    let line_idx = state.line_no - 1;
    state.lines[line_idx] = text_ops::splice(&state.lines[line_idx], insert_at, insert_at, &close_ch.to_string());

    let closer = CloserInfo {
        line_no: state.line_no,
        x: insert_at,
        ch: close_ch,
    };
    opener.closer = Some(closer);
    if state.return_parens {
        if let (Some(arena), Some(idx)) = (state.paren_arena.as_mut(), opener.arena_idx) {
            arena.set_closer(idx, closer);
        }
    }
    state.paren_trail.openers.push(opener);
    state.paren_trail.end_x = Some(insert_at + 1);
    remember_paren_trail(state);
    state.ch = String::new();
}

/// Per-line finalize (§4.6 final paragraph), run once a line's characters
/// (including its synthetic trailing newline) have all been dispatched.
pub(crate) fn finalize_line(state: &mut State) {
    if state.is_in_str {
        state.paren_trail.invalidate();
        return;
    }
    match state.mode {
        Mode::Indent => {
            clamp_trail_to_cursor(state);
            pop_trail_to_stack(state);
        }
        Mode::Paren => {
            set_max_child_indent(state);
            clean_trail(state);
            remember_paren_trail(state);
        }
    }
}
