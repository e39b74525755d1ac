//! The domain error taxonomy raised by a reconciliation pass.
//!
//! These are distinct from I/O failures (missing file, non-UTF-8 input):
//! an `ParinferError` means the *text itself* cannot be balanced, not that
//! something went wrong reading or writing it. The CLI front end keeps the
//! two domains separate rather than folding this into `anyhow::Error`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed set of error kinds a pass can raise.
///
/// `Serialize`/`Deserialize` use `kebab-case` so the wire representation
/// matches the vocabulary editors already expect (`"unmatched-close-paren"`,
/// not `"UnmatchedCloseParen"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorName {
    QuoteDanger,
    EolBackslash,
    UnclosedQuote,
    UnclosedParen,
    UnmatchedCloseParen,
    UnmatchedOpenParen,
    LeadingCloseParen,
    Unhandled,
}

impl ErrorName {
    /// A short human-readable description, used as the default `message`.
    pub fn description(self) -> &'static str {
        match self {
            ErrorName::QuoteDanger => "Quotes must be balanced inside comments.",
            ErrorName::EolBackslash => "Line cannot end in a trailing backslash.",
            ErrorName::UnclosedQuote => "String is missing a closing quote.",
            ErrorName::UnclosedParen => "Unclosed open-paren.",
            ErrorName::UnmatchedCloseParen => "Unmatched close-paren.",
            ErrorName::UnmatchedOpenParen => "Unmatched open-paren.",
            ErrorName::LeadingCloseParen => "A line cannot begin with a close-paren.",
            ErrorName::Unhandled => "An internal error occurred.",
        }
    }
}

/// A position paired with the paren character found there, used for the
/// `extra` field of `unmatched-close-paren` (it points back at the open
/// paren that would have matched).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraError {
    pub line_no: usize,
    pub x: usize,
}

/// A captured (but not yet necessarily fatal) error position.
///
/// Several error kinds are detected early (e.g. a dangling string quote) but
/// only reported at finalization if nothing else supersedes them first; this
/// is the record kept in `State::error_pos_cache` in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPos {
    pub line_no: usize,
    pub x: usize,
}

/// The error returned from a failed reconciliation pass.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParinferError {
    pub name: ErrorName,
    pub message: String,
    pub line_no: usize,
    pub x: usize,
    pub extra: Option<ExtraError>,
}

impl ParinferError {
    pub fn new(name: ErrorName, line_no: usize, x: usize) -> Self {
        Self {
            name,
            message: name.description().to_string(),
            line_no,
            x,
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: ExtraError) -> Self {
        self.extra = Some(extra);
        self
    }
}
