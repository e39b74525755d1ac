//! Quote handling (§4.1 step 4): the only place `is_escaped` changes the
//! outcome of dispatch.

use crate::error::ErrorName;
use crate::state::State;

/// Called once the current character is known to be `"`.
pub(crate) fn handle_quote(state: &mut State) {
    if state.is_escaped {
        return;
    }
    if state.is_in_str {
        state.is_in_str = false;
    } else if state.is_in_comment {
        state.quote_danger = !state.quote_danger;
        state.cache_error_pos(ErrorName::QuoteDanger, state.input_line_no, state.input_x);
    } else {
        state.is_in_str = true;
        state.cache_error_pos(ErrorName::UnclosedQuote, state.input_line_no, state.input_x);
    }
}
