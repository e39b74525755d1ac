//! The paren trail: the contiguous run of close-parens trailing the current
//! output line, plus the "clamped" view used when the cursor holds it open
//! (§4.6).

use crate::state::opener::Opener;

#[derive(Debug, Clone, Default)]
pub(crate) struct ClampedTrail {
    pub start_x: Option<usize>,
    pub end_x: Option<usize>,
    pub openers: Vec<Opener>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ParenTrail {
    pub line_no: Option<usize>,
    pub start_x: Option<usize>,
    pub end_x: Option<usize>,
    pub openers: Vec<Opener>,
    pub clamped: ClampedTrail,
}

impl ParenTrail {
    pub fn is_active(&self) -> bool {
        self.line_no.is_some()
    }

    /// Reset the trail to an empty span starting at `(line_no, x)`. Called at
    /// every line start and after every character that could begin a new
    /// trailing close-paren run.
    pub fn reset(&mut self, line_no: usize, x: usize) {
        self.line_no = Some(line_no);
        self.start_x = Some(x);
        self.end_x = Some(x);
        self.openers.clear();
        self.clamped = ClampedTrail::default();
    }

    pub fn invalidate(&mut self) {
        *self = ParenTrail::default();
    }
}
