//! End-of-pass validation and the synthetic final indent event (§4.7).

use crate::error::{ErrorName, ErrorPos, ParinferError};
use crate::indent::trail_ops::correct_paren_trail;
use crate::signal::Signal;
use crate::state::{Mode, State};

pub(crate) fn finalize(state: &mut State) -> Result<(), Signal> {
    if state.quote_danger {
        let pos = state
            .error_pos_cache
            .get(&ErrorName::QuoteDanger)
            .copied()
            .unwrap_or(ErrorPos { line_no: state.input_line_no, x: state.input_x });
        return Err(ParinferError::new(ErrorName::QuoteDanger, pos.line_no, pos.x).into());
    }
    if state.is_in_str {
        let pos = state
            .error_pos_cache
            .get(&ErrorName::UnclosedQuote)
            .copied()
            .unwrap_or(ErrorPos { line_no: state.input_line_no, x: state.input_x });
        return Err(ParinferError::new(ErrorName::UnclosedQuote, pos.line_no, pos.x).into());
    }
    if state.mode == Mode::Paren && !state.paren_stack.is_empty() {
        let opener = &state.paren_stack[0];
        return Err(ParinferError::new(
            ErrorName::UnclosedParen,
            opener.input_line_no,
            opener.input_x,
        )
        .into());
    }

    if state.mode == Mode::Indent {
        // One more synthetic indent event past the last line, at column 1,
        // so a still-pending trail gets closed out instead of left dangling.
        state.line_no += 1;
        state.x = 1;
        correct_paren_trail(state, 1)?;
    }

    Ok(())
}
