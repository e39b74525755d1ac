//! `parinfer`: run a reconciliation pass from the command line.
//!
//! Reads text from a file argument or stdin, runs the requested mode, and
//! prints either the transformed text (default) or the full [`Outcome`] as
//! JSON (`--json`). Exits non-zero when the pass fails.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use parinfer_core::{indent_mode, paren_mode, smart_mode, ChangeInput, CommentChars, Options};
use tracing::debug;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Indent,
    Paren,
    Smart,
}

#[derive(Parser)]
#[command(name = "parinfer", version, about = "Infer S-expression structure from indentation or parens")]
struct Cli {
    /// File to read; omit or pass `-` to read from stdin
    path: Option<PathBuf>,

    /// Which pass to run
    #[arg(long, value_enum, default_value = "smart")]
    mode: ModeArg,

    /// 1-based cursor line, for Smart Mode's paren-hold check
    #[arg(long)]
    cursor_line: Option<usize>,
    /// 1-based cursor column
    #[arg(long)]
    cursor_x: Option<usize>,
    /// 1-based cursor line before the edit that triggered this pass
    #[arg(long)]
    prev_cursor_line: Option<usize>,
    /// 1-based cursor column before the edit that triggered this pass
    #[arg(long)]
    prev_cursor_x: Option<usize>,

    /// Characters that start a line comment (defaults to `;`)
    #[arg(long)]
    comment_chars: Option<String>,

    /// Attempt to return a valid result even when a form is unbalanced
    #[arg(long)]
    force_balance: bool,
    /// On failure, still return the text transformed up to the failure point
    #[arg(long)]
    partial_result: bool,
    /// Include the `parens` opener tree in the outcome
    #[arg(long)]
    return_parens: bool,

    /// Path to a JSON array of `{line_no, x, old_text, new_text}` edits
    #[arg(long)]
    changes: Option<PathBuf>,

    /// Print the full outcome as JSON instead of just the resulting text
    #[arg(long)]
    json: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(p) => {
            let bytes = fs::read(p).with_context(|| format!("failed to read file: {}", p.display()))?;
            String::from_utf8(bytes).with_context(|| format!("file is not valid UTF-8: {}", p.display()))
        }
    }
}

fn read_changes(path: &PathBuf) -> Result<Vec<ChangeInput>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read changes file: {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("invalid changes JSON: {}", path.display()))
}

fn build_options(cli: &Cli) -> Result<Options> {
    let changes = match &cli.changes {
        Some(path) => read_changes(path)?,
        None => Vec::new(),
    };
    Ok(Options {
        cursor_line: cli.cursor_line,
        cursor_x: cli.cursor_x,
        prev_cursor_line: cli.prev_cursor_line,
        prev_cursor_x: cli.prev_cursor_x,
        selection_start_line: None,
        changes,
        force_balance: cli.force_balance,
        partial_result: cli.partial_result,
        return_parens: cli.return_parens,
        comment_chars: cli
            .comment_chars
            .clone()
            .map(CommentChars::from)
            .unwrap_or_default(),
    })
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(cli: Cli) -> Result<i32> {
    let text = read_input(cli.path.as_ref())?;
    let options = build_options(&cli)?;

    debug!(mode = ?cli.mode, json = cli.json, "running pass");

    let outcome = match cli.mode {
        ModeArg::Indent => indent_mode(&text, options),
        ModeArg::Paren => paren_mode(&text, options),
        ModeArg::Smart => smart_mode(&text, options),
    };

    if cli.json {
        let out = serde_json::to_string_pretty(&outcome).context("failed to serialize outcome")?;
        println!("{out}");
    } else if outcome.success {
        print!("{}", outcome.text);
    } else if let Some(err) = &outcome.error {
        eprintln!("{}:{}: {}", err.line_no, err.x, err.message);
    }

    Ok(if outcome.success { 0 } else { 1 })
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };
    std::process::exit(exit_code);
}
