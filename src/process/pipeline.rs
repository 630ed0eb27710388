//! Per-file normalization pipeline
//!
//! Runs the enabled rewrites over one file's lines in a fixed order:
//! - Tab replacement
//! - Indentation inference and rewrite
//! - Documentation block normalization
//!
//! and records which of them changed anything.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{DocBlockError, FatalCause, FatalError};
use crate::format::{infer_indent_width, replace_tabs, rewrite_indent, DocNormalizer};

/// Kind of change applied to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeTag {
    Tabs,
    Indent,
    Docu,
}

impl ChangeTag {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeTag::Tabs => "tabs",
            ChangeTag::Indent => "indent",
            ChangeTag::Docu => "docu",
        }
    }
}

impl fmt::Display for ChangeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of changes made to one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModificationRecord {
    tags: Vec<ChangeTag>,
}

impl ModificationRecord {
    /// Record `tag`; a tag already present is not added twice
    pub fn add(&mut self, tag: ChangeTag) {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[ChangeTag] {
        &self.tags
    }

    #[must_use]
    pub fn contains(&self, tag: ChangeTag) -> bool {
        self.tags.contains(&tag)
    }

    /// A file is dirty once any change has been recorded
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.tags.is_empty()
    }
}

impl fmt::Display for ModificationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Byte order mark some editors put at the start of a file
const BOM: char = '\u{feff}';

/// A file's content as editable lines plus the terminator it was written with
///
/// A leading byte order mark is kept apart from the first line so that line
/// scans see the text, and is written back on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub lines: Vec<String>,
    crlf: bool,
    bom: bool,
}

impl SourceText {
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        let (text, bom) = match contents.strip_prefix(BOM) {
            Some(rest) => (rest, true),
            None => (contents, false),
        };
        Self {
            lines: text.lines().map(str::to_string).collect(),
            crlf: text.contains("\r\n"),
            bom,
        }
    }

    #[must_use]
    pub fn has_bom(&self) -> bool {
        self.bom
    }

    /// Read a file, treating empty content as fatal
    pub fn load(path: &Path) -> Result<Self, FatalCause> {
        let contents = fs::read_to_string(path)?;
        if contents.is_empty() {
            return Err(FatalCause::Empty);
        }
        Ok(Self::parse(&contents))
    }

    #[must_use]
    pub fn line_ending(&self) -> &'static str {
        if self.crlf {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Every line followed by the original line terminator
    #[must_use]
    pub fn render(&self) -> String {
        let eol = self.line_ending();
        let capacity: usize = self.lines.iter().map(|l| l.len() + eol.len()).sum();
        let mut out = String::with_capacity(capacity + BOM.len_utf8());
        if self.bom {
            out.push(BOM);
        }
        for line in &self.lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }

    pub fn persist(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.render())
    }
}

/// Outcome of processing one file
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path relative to the processing root, or verbatim for a single file
    pub display_path: String,
    pub record: ModificationRecord,
    /// Whether the rewritten lines were written back
    pub persisted: bool,
}

impl FileReport {
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.record.is_dirty()
    }

    /// Extension of the file, if it has one
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
    }
}

/// Path shown to the user for `path` found under `root`
#[must_use]
pub fn display_path(root: &Path, path: &Path) -> String {
    if root.is_dir() {
        if let Ok(relative) = path.strip_prefix(root) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

/// Applies the enabled rewrites to files
#[derive(Debug, Clone)]
pub struct Engine {
    indent_width: usize,
    replace_tabs: bool,
    fix_indent: bool,
    fix_docu: bool,
    simulate: bool,
    normalizer: DocNormalizer,
}

impl Engine {
    #[must_use]
    pub fn new(config: &Config, simulate: bool) -> Self {
        Self {
            indent_width: config.indent_width,
            replace_tabs: config.replace_tabs,
            fix_indent: config.fix_indent,
            fix_docu: config.fix_docu,
            simulate,
            normalizer: DocNormalizer::new(config.key_table()),
        }
    }

    /// Run every enabled rewrite over `lines`
    pub fn process_lines(&self, lines: &mut [String]) -> Result<ModificationRecord, DocBlockError> {
        let mut record = ModificationRecord::default();

        if self.replace_tabs && replace_tabs(lines, self.indent_width) {
            record.add(ChangeTag::Tabs);
        }

        if self.fix_indent {
            let source_width = infer_indent_width(&*lines);
            debug!(source_width, target_width = self.indent_width, "indentation inferred");
            if rewrite_indent(lines, source_width, self.indent_width) {
                record.add(ChangeTag::Indent);
            }
        }

        if self.fix_docu && self.normalizer.normalize(lines)? {
            record.add(ChangeTag::Docu);
        }

        Ok(record)
    }

    /// Load, rewrite and (unless simulating) persist one file
    pub fn process_file(&self, path: &Path, display_path: String) -> Result<FileReport, FatalError> {
        debug!(path = %path.display(), "processing");
        let mut text = SourceText::load(path).map_err(|cause| FatalError::new(path, cause))?;

        let record = self
            .process_lines(&mut text.lines)
            .map_err(|cause| FatalError::new(path, cause))?;

        let persisted = record.is_dirty() && !self.simulate;
        if persisted {
            text.persist(path)
                .map_err(|cause| FatalError::new(path, cause))?;
            info!(path = %path.display(), changes = %record, "rewritten");
        }

        Ok(FileReport {
            path: path.to_path_buf(),
            display_path,
            record,
            persisted,
        })
    }
}
