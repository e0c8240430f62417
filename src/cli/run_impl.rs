use std::io::{self, Write};

use anyhow::Result;

use crate::collector::{self, CollectOptions};
use crate::error::CatError;
use crate::formatter;
use crate::types::Mode;

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    let mode = Mode::from_flags(args.number, args.blank);
    let opts = CollectOptions {
        verbose: args.verbose,
    };

    if args.verbose > 0 {
        if args.files.is_empty() {
            eprintln!("Reading from stdin");
        } else {
            eprintln!("Reading {} file(s)", args.files.len());
        }
        eprintln!("Mode: {}", mode.name());
        if args.number && args.blank {
            eprintln!("--blank has no effect together with --number");
        }
    }

    let raw = collector::collect(&args.files, &opts)?;
    let out = formatter::format_bytes(&raw, mode)?;

    if args.verbose > 1 {
        eprintln!("Totals: input_bytes={}, output_bytes={}", raw.len(), out.len());
    }

    write_output(&mut io::stdout().lock(), out.as_bytes())?;
    Ok(())
}

/// Writes the rendered blob. A reader that went away early is not an error.
fn write_output<W: Write>(w: &mut W, out: &[u8]) -> std::result::Result<(), CatError> {
    match w.write_all(out).and_then(|()| w.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(CatError::from),
    }
}
