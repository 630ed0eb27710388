//! Run-level bookkeeping and terminal reporting

use std::collections::BTreeSet;
use std::fmt;

use crate::process::pipeline::FileReport;

/// Totals accumulated over a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    files_seen: usize,
    modified_files: usize,
    extensions: BTreeSet<String>,
}

impl RunSummary {
    /// Fold one finished file into the totals
    pub fn record(&mut self, report: &FileReport) {
        self.files_seen += 1;
        if !report.is_dirty() {
            return;
        }
        self.modified_files += 1;
        if let Some(ext) = report.extension() {
            self.extensions.insert(ext);
        }
    }

    #[must_use]
    pub fn files_seen(&self) -> usize {
        self.files_seen
    }

    #[must_use]
    pub fn modified_files(&self) -> usize {
        self.modified_files
    }

    /// Distinct extensions among modified files, sorted
    #[must_use]
    pub fn extensions(&self) -> &BTreeSet<String> {
        &self.extensions
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modified_files == 0 {
            return write!(f, "No files needed changes ({} checked).", self.files_seen);
        }
        let noun = if self.modified_files == 1 { "file" } else { "files" };
        write!(
            f,
            "{} {noun} modified ({} checked)",
            self.modified_files, self.files_seen
        )?;
        if !self.extensions.is_empty() {
            let exts: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
            write!(f, "; extensions: {}", exts.join(", "))?;
        }
        Ok(())
    }
}

/// Per-file line printed for a dirty file
#[must_use]
pub fn file_line(report: &FileReport, simulate: bool) -> String {
    let mut line = format!("{}: {}", report.display_path, report.record);
    if simulate {
        line.push_str(" (simulated)");
    }
    line
}
