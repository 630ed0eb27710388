//! codefmt - Batch normalizer for source file whitespace and documentation blocks
//!
//! Replaces tabs, converts the indentation unit to a target width and rewrites a
//! file's documentation comment block into a canonical aligned form.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::struct_excessive_bools)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::{DocBlockError, FatalCause, FatalError, Result};
pub use process::{run, ChangeTag, Engine, FileReport, RunSummary};
