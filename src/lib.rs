//! `ccat`: concatenate files (or stdin) to stdout, optionally numbering lines.
//!
//! The pipeline is [`collector::collect`] into [`formatter::format_bytes`],
//! driven by [`cli::run`].

pub mod cli;
pub mod collector;
pub mod error;
pub mod formatter;
pub mod types;

pub use error::CatError;
pub use types::Mode;
