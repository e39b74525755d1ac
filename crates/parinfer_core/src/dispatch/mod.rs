//! Character dispatch (§4.1): the priority chain every input character goes
//! through, plus the handlers it delegates to.

mod commit;
mod escape;
mod parens;
mod quote;

use crate::signal::Step;
use crate::state::opener::{is_close_paren, is_open_paren};
use crate::state::State;

/// Route one input character through the full dispatch chain, mutating
/// `state` and committing the (possibly rewritten) character into the
/// current output line. `orig_ch` is the character as read from the input.
pub(crate) fn dispatch_char(state: &mut State, orig_ch: &str) -> Step {
    state.ch = orig_ch.to_string();
    state.is_escaped = false;

    escape::handle_escaping(state)?;

    let ch = state.ch.chars().next();
    match ch {
        Some(c) if is_open_paren(c) => parens::handle_open_paren(state),
        Some(c) if is_close_paren(c) => parens::handle_close_paren(state)?,
        Some('"') => quote::handle_quote(state),
        Some(c) if state.is_in_code && state.comment_chars.contains(c) => commit::start_comment(state),
        Some('\\') => commit::start_escaping(state),
        Some('\t') if state.is_in_code => commit::rewrite_tab(state),
        Some('\n') => commit::clear_newline(state),
        _ => {}
    }

    commit::finish_dispatch(state, orig_ch);
    Ok(())
}

/// Commit a character that a line-start handler already fully processed
/// (it may have rewritten `state.ch` to empty) without re-running the
/// classification chain above.
pub(crate) fn commit_only(state: &mut State, orig_ch: &str) {
    commit::finish_dispatch(state, orig_ch);
}
