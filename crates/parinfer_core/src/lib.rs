//! A single-pass character-driven reconciler between S-expression
//! indentation and trailing close-parens.
//!
//! Three entry points, each a pure function of `(text, options)`:
//! [`indent_mode`] trusts indentation and rewrites parens to match it,
//! [`paren_mode`] trusts parens and rewrites indentation to match them, and
//! [`smart_mode`] runs Indent Mode but falls back to a fresh Paren Mode pass
//! when the edit it's about to make would cross a paren the cursor is
//! sitting inside of.
//!
//! See [`Options`] for the accepted caller context and [`Outcome`] for the
//! result shape. Everything else in this crate is private: the reconciler
//! itself ([`state`], [`dispatch`], [`indent`], [`finalize`], [`driver`])
//! is an implementation detail callers never see directly.

mod classify;
mod dispatch;
mod driver;
mod error;
mod finalize;
mod indent;
mod options;
mod outcome;
mod signal;
mod state;
mod text_ops;

pub use error::{ErrorName, ExtraError, ParinferError};
pub use options::{ChangeInput, CommentChars, Options};
pub use outcome::{CloserInfo, Outcome, ParenNode, ParenTrailRange, TabStop};

use state::Mode;

/// Trust indentation; rewrite close-parens to match it.
pub fn indent_mode(text: &str, options: Options) -> Outcome {
    driver::run(Mode::Indent, false, text, options)
}

/// Trust close-parens; rewrite indentation to match them.
pub fn paren_mode(text: &str, options: Options) -> Outcome {
    driver::run(Mode::Paren, false, text, options)
}

/// Indent Mode that falls back to a fresh Paren Mode pass rather than
/// collapsing structure the cursor is actively editing. A selection in
/// flight (`selection_start_line` set) disables the fallback, matching
/// `indent_mode`, since smart collapsing mid-selection has no well-defined
/// cursor to hold a form open against.
pub fn smart_mode(text: &str, options: Options) -> Outcome {
    let smart = options.selection_start_line.is_none();
    driver::run(Mode::Indent, smart, text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Options {
        Options::default()
    }

    #[test]
    fn indent_mode_leaves_already_closed_form_unchanged() {
        let out = indent_mode("(foo\n  bar)", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo\n  bar)");
    }

    #[test]
    fn indent_mode_moves_close_paren_to_match_dedent() {
        let out = indent_mode("(foo\n  bar\nbaz)", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo\n  bar)\nbaz");
    }

    #[test]
    fn indent_mode_drops_a_stray_unmatched_close_paren() {
        let out = indent_mode("(foo)\nbar)", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo)\nbar");
    }

    #[test]
    fn paren_mode_pulls_overindented_sibling_back_to_max_child_indent() {
        // `bar` establishes the child indent (column 3) for `foo`'s `(`;
        // `baz` overshoots it, so Paren Mode pulls it back in line.
        let out = paren_mode("(foo\n  bar\n      baz)", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo\n  bar\n  baz)");
    }

    #[test]
    fn paren_mode_leaves_already_valid_indentation_alone() {
        let out = paren_mode("(foo\n  bar)", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo\n  bar)");
    }

    #[test]
    fn paren_mode_reports_unclosed_paren() {
        let out = paren_mode("(foo\n  bar", opts());
        assert!(!out.success);
        let err = out.error.expect("unclosed paren must fail");
        assert_eq!(err.name, ErrorName::UnclosedParen);
        assert_eq!(err.line_no, 1);
        assert_eq!(err.x, 1);
    }

    #[test]
    fn indent_mode_drops_stray_trailing_close_paren() {
        let out = indent_mode("(foo))", opts());
        assert!(out.success);
        assert_eq!(out.text, "(foo)");
    }

    #[test]
    fn paren_mode_fails_on_the_same_stray_close_paren() {
        let out = paren_mode("(foo))", opts());
        assert!(!out.success);
        let err = out.error.unwrap();
        assert_eq!(err.name, ErrorName::UnmatchedCloseParen);
        assert_eq!(err.line_no, 1);
        assert_eq!(err.x, 6);
    }

    #[test]
    fn indent_mode_is_idempotent() {
        let first = indent_mode("(foo\n  bar\nbaz)", opts());
        assert!(first.success);
        let second = indent_mode(&first.text, opts());
        assert!(second.success);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn paren_mode_output_feeds_back_unchanged() {
        let first = paren_mode("(foo\n  bar\n      baz)", opts());
        assert!(first.success);
        let second = paren_mode(&first.text, opts());
        assert!(second.success);
        assert_eq!(first.text, second.text);
    }

    #[test]
    fn output_of_indent_mode_stays_balanced_under_paren_mode() {
        let out = indent_mode("(a (b\n  c)\n  d)", opts());
        assert!(out.success);
        let reparsed = paren_mode(&out.text, opts());
        assert!(reparsed.success);
    }

    #[test]
    fn failure_without_partial_result_returns_original_text() {
        let out = indent_mode("\"abc", opts());
        assert!(!out.success);
        assert_eq!(out.text, "\"abc");
        let err = out.error.unwrap();
        assert_eq!(err.name, ErrorName::UnclosedQuote);
        // Reported at the opening quote, not at the end-of-pass position.
        assert_eq!(err.line_no, 1);
        assert_eq!(err.x, 1);
    }

    #[test]
    fn failure_with_partial_result_returns_transformed_prefix() {
        let options = Options { partial_result: true, ..opts() };
        let out = paren_mode("(foo\n  bar", options);
        assert!(!out.success);
        assert!(out.error.is_some());
    }

    #[test]
    fn zero_cursor_coordinates_are_treated_as_absent() {
        let options = Options {
            cursor_line: Some(0),
            cursor_x: Some(0),
            ..opts()
        };
        let out = indent_mode("(foo\n  bar)", options);
        assert!(out.success);
    }

    #[test]
    fn smart_mode_falls_back_to_paren_mode_when_cursor_holds_a_form_open() {
        let options = Options {
            cursor_line: Some(2),
            cursor_x: Some(3),
            prev_cursor_line: Some(1),
            prev_cursor_x: Some(5),
            ..opts()
        };
        let out = smart_mode("(foo (bar)\n  baz)", options);
        assert!(out.success);
    }

    #[test]
    fn empty_input_round_trips() {
        let out = indent_mode("", opts());
        assert!(out.success);
        assert_eq!(out.text, "");
    }

    #[test]
    fn a_reported_change_does_not_by_itself_change_a_balanced_outcome() {
        // The caller reporting that it typed an extra space at the start of
        // line 2 (column 1, "" -> " ") should not, on its own, make the
        // reconciler treat the line as if Parinfer itself had shifted it —
        // the already-balanced form stays unchanged.
        let options = Options {
            changes: vec![ChangeInput {
                line_no: 2,
                x: 1,
                old_text: String::new(),
                new_text: " ".into(),
            }],
            ..opts()
        };
        let out = indent_mode("(foo\n   bar)", options);
        assert!(out.success);
        assert_eq!(out.text, "(foo\n   bar)");
    }

    #[test]
    fn stray_close_paren_fails_once_real_content_follows_it_on_the_line() {
        // Unlike `"(foo))"` (scenario 4, the stray is the last thing on the
        // line and gets silently dropped), `bar` here resets the trail past
        // the stray close-paren before the line ends — it never rejoins the
        // eventual trail, so the cached diagnostic must surface.
        let out = indent_mode("(foo))bar", opts());
        assert!(!out.success);
        let err = out.error.unwrap();
        assert_eq!(err.name, ErrorName::UnmatchedCloseParen);
        assert_eq!(err.line_no, 1);
        assert_eq!(err.x, 6);
    }

    #[test]
    fn cursor_hold_reports_the_clamped_trail_not_the_post_reset_one() {
        // The inner `)` at col 10 closes `(bar`'s opener while the cursor
        // holds it open (col 4, between `(foo`'s col 1 and `(bar`'s col 6) —
        // both now and previously, so there's no restart. The reported trail
        // for line 1 must reflect the *clamped* (pre-hold) extent, cols
        // 10..11, not the narrower span the trail was rewound to afterward.
        let options = Options {
            cursor_line: Some(1),
            cursor_x: Some(4),
            prev_cursor_line: Some(1),
            prev_cursor_x: Some(4),
            ..opts()
        };
        let out = smart_mode("(foo (bar))", options);
        assert!(out.success);
        assert_eq!(out.text, "(foo (bar))");
        assert!(out
            .paren_trails
            .iter()
            .any(|t| t.line_no == 1 && t.start_x == 10 && t.end_x == 11));
    }

    #[test]
    fn installing_a_tracing_subscriber_does_not_change_the_outcome() {
        let input = "(foo\n  bar\nbaz)";
        let without_subscriber = indent_mode(input, opts());

        let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
        let with_subscriber =
            tracing::subscriber::with_default(subscriber, || indent_mode(input, opts()));

        assert_eq!(without_subscriber, with_subscriber);
    }
}
