//! The public result of a pass: [`Outcome`] and the structural annotations
//! it carries.

use serde::{Deserialize, Serialize};

use crate::error::ParinferError;

/// An editor tab stop: a column an argument could align to, collected for
/// whichever line the cursor (or selection) sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStop {
    pub ch: char,
    pub x: usize,
    pub line_no: usize,
    pub start_x: usize,
    pub end_x: usize,
}

/// The `{line_no, start_x, end_x}` span of a completed paren trail, exported
/// so editors can highlight it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParenTrailRange {
    pub line_no: usize,
    pub start_x: usize,
    pub end_x: usize,
}

/// Where a matched close paren landed, recorded on the corresponding
/// [`ParenNode`] when `return_parens` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloserInfo {
    pub line_no: usize,
    pub x: usize,
    pub ch: char,
}

/// A node of the `returnParens` opener tree.
///
/// Built with plain indices into a flat `Vec` rather than parent/child
/// owning references, so there is nothing cyclic to worry about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenNode {
    pub line_no: usize,
    pub x: usize,
    pub ch: char,
    pub closer: Option<CloserInfo>,
    pub children: Vec<ParenNode>,
}

/// The result of calling [`crate::indent_mode`], [`crate::paren_mode`], or
/// [`crate::smart_mode`].
///
/// On failure (`success: false`), `text`/`cursor_x`/`cursor_line` reflect the
/// *original* input unless `Options::partial_result` was set, in which case
/// they reflect the transformation up to the point of failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub text: String,
    pub cursor_x: Option<usize>,
    pub cursor_line: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tab_stops: Vec<TabStop>,
    pub paren_trails: Vec<ParenTrailRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parens: Option<Vec<ParenNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ParinferError>,
}
