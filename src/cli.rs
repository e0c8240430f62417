use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(name = "ccat", version, about = "ccat command", long_about = None)]
pub struct Args {
    /// Files to concatenate (if none are given, reads from stdin)
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Number all output lines
    #[arg(long = "number", short = 'n', action = ArgAction::SetTrue)]
    pub number: bool,

    /// Number non-empty lines and drop empty ones (ignored with --number)
    #[arg(long = "blank", short = 'b', action = ArgAction::SetTrue)]
    pub blank: bool,

    /// Verbose diagnostics on stderr
    #[arg(long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error if reading, decoding or writing fails.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}

pub use run_impl::run_with_args;
