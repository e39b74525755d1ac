//! Parent-opener resolution (§4.5): which paren-stack entry, if any, claims
//! a given indentation column as belonging to one of its children.

use crate::state::State;

/// Scan the paren stack top-down and return the index of the opener that
/// claims `indent_x` as a child column, clearing that opener's pending
/// `indent_delta` if it was "adopted" under the last row of the decision
/// table.
pub(crate) fn parent_opener_index(state: &mut State, indent_x: usize) -> Option<usize> {
    let state_delta = state.indent_delta;
    let len = state.paren_stack.len();

    for idx in (0..len).rev() {
        let opener = &state.paren_stack[idx];
        let prev_outside =
            (opener.x as isize - opener.indent_delta) < (indent_x as isize - state_delta);
        let curr_outside = (opener.x as isize) < (indent_x as isize);

        let is_parent = match (prev_outside, curr_outside) {
            (true, true) => true,
            (false, false) => false,
            // Prevent fragmenting a form that was already resolved as a
            // single block on a prior pass.
            (true, false) => opener.indent_delta == 0,
            (false, true) => {
                if idx == 0 {
                    state_delta > opener.indent_delta
                } else {
                    let next_delta = state.paren_stack[idx - 1].indent_delta;
                    let opener_delta = state.paren_stack[idx].indent_delta;
                    let opener_x = state.paren_stack[idx].x;
                    if next_delta <= opener_delta {
                        (indent_x as isize + next_delta) > opener_x as isize
                    } else {
                        true
                    }
                }
            }
        };

        if is_parent {
            if matches!((prev_outside, curr_outside), (false, true)) {
                state.paren_stack[idx].indent_delta = 0;
            }
            return Some(idx);
        }
    }
    None
}
