//! File processing and run orchestration.
//!
//! This module drives a run one file at a time:
//!
//! **Enumeration** ([`walk`]):
//! - Walk the input directory depth-first, skipping excluded directories,
//!   extensions and glob patterns
//!
//! **Per file** ([`pipeline`]):
//! - Load the file as lines
//! - Replace tabs, rewrite the indentation unit, normalize the documentation block
//! - Record which steps changed the text and persist it unless simulating
//!
//! **Reporting** ([`summary`]):
//! - Count modified files and the extensions they carry
//!
//! The first fatal error stops the run; files written before it stay written.

pub mod pipeline;
pub mod summary;
pub mod walk;

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::FatalError;

pub use pipeline::{
    display_path, ChangeTag, Engine, FileReport, ModificationRecord, SourceText,
};
pub use summary::{file_line, RunSummary};
pub use walk::FileWalker;

/// Process every accepted file under `root` in order
///
/// `on_file` sees each finished file before the next one is loaded. A tree
/// that cannot be fully enumerated fails before any file is touched. The first
/// fatal error is returned immediately and no summary is produced.
pub fn run<F>(
    root: &Path,
    config: &Config,
    simulate: bool,
    mut on_file: F,
) -> Result<RunSummary, FatalError>
where
    F: FnMut(&FileReport),
{
    let engine = Engine::new(config, simulate);
    let files = FileWalker::new(config).collect(root)?;
    info!(root = %root.display(), count = files.len(), simulate, "starting run");

    let mut summary = RunSummary::default();
    for path in &files {
        let report = engine.process_file(path, display_path(root, path))?;
        on_file(&report);
        summary.record(&report);
    }
    Ok(summary)
}
