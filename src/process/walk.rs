//! Candidate file enumeration
//!
//! Walks a directory depth-first in file-name order, pruning excluded
//! directories and skipping excluded extensions and glob matches.

use std::io;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{Config, CONFIG_FILE_NAMES};
use crate::error::FatalError;

/// Deepest directory level followed
const MAX_WALK_DEPTH: usize = 256;

/// Decides which paths under a root are processed
#[derive(Debug, Clone)]
pub struct FileWalker {
    excluded_dirs: Vec<String>,
    excluded_extensions: Vec<String>,
    patterns: Vec<Pattern>,
}

impl FileWalker {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let patterns = config
            .exclude
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("ignoring invalid exclude pattern `{p}`: {e}");
                    None
                }
            })
            .collect();
        Self {
            excluded_dirs: config.excluded_dirs.clone(),
            excluded_extensions: config
                .excluded_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect(),
            patterns,
        }
    }

    fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|dir| dir == name)
    }

    fn has_excluded_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.excluded_extensions.iter().any(|ex| ex == ext))
    }

    /// Check if a path matches any exclusion pattern
    fn matches_pattern(&self, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();
        self.patterns.iter().any(|pattern| {
            pattern.matches(&path_str)
                || path.components().any(|component| match component {
                    Component::Normal(c) => pattern.matches(&c.to_string_lossy()),
                    _ => false,
                })
        })
    }

    /// Whether a file at `path` should be processed
    ///
    /// Config files are never candidates themselves.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        let is_config = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| CONFIG_FILE_NAMES.contains(&name));
        !is_config && !self.has_excluded_extension(path) && !self.matches_pattern(path)
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        // the root itself is always walked
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !self.is_excluded_dir(&name) && !self.matches_pattern(entry.path())
    }

    /// Collect the files to process under `root`
    ///
    /// A file root yields itself (if accepted); a directory root yields every
    /// accepted file below it, depth-first and sorted by file name. Any entry
    /// that cannot be read fails the whole enumeration.
    pub fn collect(&self, root: &Path) -> Result<Vec<PathBuf>, FatalError> {
        if root.is_file() {
            return Ok(if self.accepts(root) {
                vec![root.to_path_buf()]
            } else {
                debug!(path = %root.display(), "excluded");
                Vec::new()
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .max_depth(MAX_WALK_DEPTH)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(root, e))?;
            let path = entry.path();
            if entry.file_type().is_file() && self.accepts(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }
}

/// Attribute a walk failure to the entry it happened on, or to `root`
fn walk_error(root: &Path, err: walkdir::Error) -> FatalError {
    let path = err.path().unwrap_or(root).to_path_buf();
    FatalError::new(path, io::Error::from(err))
}
