//! Indentation handling: parent-opener resolution (§4.5), paren-trail
//! operations against the wider `State` (§4.6), and the line-start handlers
//! that trigger them (§4.4).

pub(crate) mod line_start;
pub(crate) mod parent;
pub(crate) mod trail_ops;

pub(crate) use line_start::{handle_line_start, LineStartOutcome};
pub(crate) use trail_ops::finalize_line;
