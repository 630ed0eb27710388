//! Documentation block location and normalization
//!
//! A file's documentation block is the first `/* ... */` comment spanning at
//! least three lines. Its edges are replaced by fixed-width asterisk banners and
//! every interior line is rewritten into one of three canonical shapes:
//!
//! ```text
//! /****************************************************************************************************
//! * Title : Two Sum
//! * URL   : https://example.com/two-sum
//! * Date  : 2020-03-03
//! *
//! *   free text continues the previous value
//! ****************************************************************************************************/
//! ```

use std::ops::Range;

use tracing::debug;

use crate::error::DocBlockError;
use crate::format::date::canonicalize_date;
use crate::format::keys::{KeyTable, DATE_KEY};
use crate::parser::{toggles, CommentState, CLOSE_MARKER, OPEN_MARKER};

/// Number of asterisks in the edge banners
pub const BANNER_WIDTH: usize = 100;

/// Column width keys are padded to
pub const KEY_COLUMN_WIDTH: usize = 6;

/// A `:` further into the line than this is not a key separator
pub const MAX_KEY_SCAN: usize = 16;

/// Unchanged interior lines after which a block is taken as already normalized
pub const UNCHANGED_PROBE_LINES: usize = 7;

/// Prefix used for value continuation lines
const CONTINUATION_PREFIX: &str = "*   ";

/// Line range of a located documentation block, edges included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocBlockSpan {
    pub start: usize,
    pub end: usize,
}

impl DocBlockSpan {
    /// Indices of the lines strictly between the two edges
    #[must_use]
    pub fn interior(&self) -> Range<usize> {
        self.start + 1..self.end
    }
}

/// Canonical opening banner: `/` followed by the asterisk run
#[must_use]
pub fn opening_banner() -> String {
    format!("/{}", "*".repeat(BANNER_WIDTH))
}

/// Canonical closing banner: the asterisk run followed by `/`
#[must_use]
pub fn closing_banner() -> String {
    format!("{}/", "*".repeat(BANNER_WIDTH))
}

/// A line opening a block comment: the canonical banner or any `/*` opener
fn is_block_start(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(OPEN_MARKER) && toggles(line, CommentState::Outside)
}

/// A line closing a block comment: the canonical banner or any `*/` closer
fn is_block_end(line: &str) -> bool {
    let line = line.trim_end();
    line.ends_with(CLOSE_MARKER) && toggles(line, CommentState::Inside)
}

/// Find the first block comment with at least one interior line
///
/// An opener/closer pair enclosing nothing is dropped and the search resumes
/// after the closer.
#[must_use]
pub fn locate_doc_block<S: AsRef<str>>(lines: &[S]) -> Option<DocBlockSpan> {
    let mut start: Option<usize> = None;

    for (idx, line) in lines.iter().map(|line| line.as_ref()).enumerate() {
        let span_start = match start {
            Some(s) => s,
            None if is_block_start(line) => {
                start = Some(idx);
                idx
            }
            None => continue,
        };

        if is_block_end(line) {
            if idx - span_start >= 2 {
                return Some(DocBlockSpan {
                    start: span_start,
                    end: idx,
                });
            }
            start = None;
        }
    }

    None
}

/// Parsed shape of one interior line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteriorLine<'a> {
    /// Nothing but the leading asterisk
    Empty,
    /// Free text carried over from the previous key
    Continuation(&'a str),
    /// `key: value`, both trimmed, key not yet resolved
    Entry { key: &'a str, value: &'a str },
}

/// Strip the comment prefix and split an interior line into its parts
///
/// Only a leading `*` or ` *` is removed. Interior lines of an indented block
/// (`   * Title: x`) keep their asterisk, so their keys never resolve.
#[must_use]
pub fn parse_interior_line(line: &str) -> InteriorLine<'_> {
    let stripped = line
        .strip_prefix(" *")
        .or_else(|| line.strip_prefix('*'))
        .unwrap_or(line);
    let text = stripped.trim();
    if text.is_empty() {
        return InteriorLine::Empty;
    }

    match text.find(':') {
        Some(idx) if idx <= MAX_KEY_SCAN && !ends_with_url_scheme(&text[..idx]) => {
            InteriorLine::Entry {
                key: text[..idx].trim(),
                value: text[idx + 1..].trim(),
            }
        }
        _ => InteriorLine::Continuation(text),
    }
}

/// `http:` and `https:` colons belong to a URL, not a key
fn ends_with_url_scheme(text: &str) -> bool {
    text.ends_with("http") || text.ends_with("https")
}

/// Rewrites documentation blocks using a fixed set of key tables
#[derive(Debug, Clone, Default)]
pub struct DocNormalizer {
    keys: KeyTable,
}

impl DocNormalizer {
    #[must_use]
    pub fn new(keys: KeyTable) -> Self {
        Self { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &KeyTable {
        &self.keys
    }

    /// Canonical form of a single interior line
    pub fn normalize_line(&self, line: &str) -> Result<String, DocBlockError> {
        match parse_interior_line(line) {
            InteriorLine::Empty => Ok("*".to_string()),
            InteriorLine::Continuation(text) => Ok(format!("{CONTINUATION_PREFIX}{text}")),
            InteriorLine::Entry { key, value } => {
                let canonical = self
                    .keys
                    .resolve(key)
                    .ok_or_else(|| DocBlockError::UnknownKey {
                        key: key.to_string(),
                    })?;
                let value = if canonical == DATE_KEY {
                    canonicalize_date(value)?
                } else {
                    value.to_string()
                };
                let entry = format!("* {canonical:<width$}: {value}", width = KEY_COLUMN_WIDTH);
                Ok(entry.trim_end().to_string())
            }
        }
    }

    /// Locate and rewrite the documentation block in place
    ///
    /// Returns `true` if any line of the block changed. When the edges are
    /// already canonical and the first [`UNCHANGED_PROBE_LINES`] interior lines
    /// need no change, the rest of the block is left unread.
    pub fn normalize(&self, lines: &mut [String]) -> Result<bool, DocBlockError> {
        let span = locate_doc_block(&*lines).ok_or(DocBlockError::MissingBlock)?;
        debug!(start = span.start, end = span.end, "documentation block located");

        let mut changed = replace_line(&mut lines[span.start], opening_banner());
        changed |= replace_line(&mut lines[span.end], closing_banner());

        let mut unchanged_run = 0;
        for idx in span.interior() {
            let canonical = self.normalize_line(&lines[idx])?;
            if replace_line(&mut lines[idx], canonical) {
                changed = true;
            } else if !changed {
                unchanged_run += 1;
                if unchanged_run >= UNCHANGED_PROBE_LINES {
                    debug!(line = idx, "documentation block already normalized");
                    break;
                }
            }
        }

        Ok(changed)
    }
}

/// Overwrite `line` with `canonical` when they differ
fn replace_line(line: &mut String, canonical: String) -> bool {
    if *line == canonical {
        false
    } else {
        *line = canonical;
        true
    }
}
