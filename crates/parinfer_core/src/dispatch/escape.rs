//! Backslash-escape handling (§4.1 step 1).
//!
//! Consuming an escaped character never removes it from the normal routing
//! below — a quote right after a `\` still reaches the quote handler, which
//! is the one place `is_escaped` actually changes behavior (a literal quote
//! rather than a string boundary).

use crate::error::{ErrorName, ParinferError};
use crate::signal::Signal;
use crate::state::State;

pub(crate) fn handle_escaping(state: &mut State) -> Result<(), Signal> {
    if !state.is_escaping {
        return Ok(());
    }

    if state.ch == "\n" {
        if state.is_in_code {
            return Err(ParinferError::new(
                ErrorName::EolBackslash,
                state.input_line_no,
                state.input_x.saturating_sub(1).max(1),
            )
            .into());
        }
    } else {
        state.is_escaped = true;
    }
    state.is_escaping = false;
    Ok(())
}
