//! The two internal non-local exits a pass can take (§5, §9 of the design
//! notes): a domain error, or a request to restart the whole pass in Paren
//! Mode. Both are ordinary return values — nothing here is a panic.

use crate::error::ParinferError;

/// Returned by every step of the character loop. `Restart` and `Err` both
/// abort the current attempt; the driver in `driver.rs` is the only place
/// that distinguishes them from one another.
#[derive(Debug)]
pub(crate) enum Signal {
    Error(ParinferError),
    /// `leadingCloseParen` or `releaseCursorHold` fired: discard this
    /// attempt and retry from scratch in Paren Mode.
    Restart,
}

impl From<ParinferError> for Signal {
    fn from(err: ParinferError) -> Self {
        Signal::Error(err)
    }
}

pub(crate) type Step = Result<(), Signal>;
