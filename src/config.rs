//! Configuration management for codefmt.
//!
//! This module provides the [`Config`] struct which controls which rewrites run
//! and how. Configuration can be loaded from:
//! - TOML files (`codefmt.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the path
//! being processed up to the filesystem root, plus the user's home directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::format::keys::{KeyTable, DEFAULT_CANONICAL_KEYS, DEFAULT_KEY_ALIASES};

/// Config file names to search for (in order of priority, later overrides earlier)
pub const CONFIG_FILE_NAMES: &[&str] = &["codefmt.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_indent_width() -> usize {
    2
}
fn default_true() -> bool {
    true
}
fn default_excluded_dirs() -> Vec<String> {
    vec![".git".to_string(), "Workspace".to_string()]
}
fn default_excluded_extensions() -> Vec<String> {
    ["csproj", "py", "txt"].iter().map(|s| (*s).to_string()).collect()
}
fn default_key_aliases() -> BTreeMap<String, String> {
    DEFAULT_KEY_ALIASES
        .iter()
        .map(|(alias, key)| ((*alias).to_string(), (*key).to_string()))
        .collect()
}
fn default_canonical_keys() -> Vec<String> {
    DEFAULT_CANONICAL_KEYS
        .iter()
        .map(|key| (*key).to_string())
        .collect()
}

/// Main configuration struct for codefmt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target indentation width in spaces, also the tab width (default: 2)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Replace tab characters (default: true)
    #[serde(default = "default_true")]
    pub replace_tabs: bool,

    /// Rewrite the indentation unit (default: true)
    #[serde(default = "default_true")]
    pub fix_indent: bool,

    /// Normalize the documentation block (default: true)
    #[serde(default = "default_true")]
    pub fix_docu: bool,

    /// Directory names never descended into
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// File extensions (without dot) never processed
    #[serde(default = "default_excluded_extensions")]
    pub excluded_extensions: Vec<String>,

    /// Glob patterns for files/directories to skip
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Legacy documentation key -> canonical key
    #[serde(default = "default_key_aliases")]
    pub key_aliases: BTreeMap<String, String>,

    /// Documentation keys accepted without aliasing
    #[serde(default = "default_canonical_keys")]
    pub canonical_keys: Vec<String>,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent_width: Option<usize>,
    pub replace_tabs: Option<bool>,
    pub fix_indent: Option<bool>,
    pub fix_docu: Option<bool>,
    pub excluded_dirs: Option<Vec<String>>,
    pub excluded_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub key_aliases: BTreeMap<String, String>,
    pub canonical_keys: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent_width: default_indent_width(),
            replace_tabs: true,
            fix_indent: true,
            fix_docu: true,
            excluded_dirs: default_excluded_dirs(),
            excluded_extensions: default_excluded_extensions(),
            exclude: Vec::new(),
            key_aliases: default_key_aliases(),
            canonical_keys: default_canonical_keys(),
        }
    }
}

impl Config {
    /// Maximum reasonable indent width
    const MAX_INDENT_WIDTH: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent_width == 0 {
            return Some("indent_width must be at least 1".to_string());
        }
        if self.indent_width > Self::MAX_INDENT_WIDTH {
            return Some(format!(
                "indent_width {} exceeds maximum of {}",
                self.indent_width,
                Self::MAX_INDENT_WIDTH
            ));
        }
        if self.canonical_keys.is_empty() {
            return Some("canonical_keys must not be empty".to_string());
        }
        if let Some((alias, key)) = self.key_table().dangling_aliases().first() {
            return Some(format!(
                "key alias `{alias}` points at `{key}`, which is not a canonical key"
            ));
        }
        None
    }

    /// Key tables for the documentation normalizer
    #[must_use]
    pub fn key_table(&self) -> KeyTable {
        KeyTable::new(
            self.key_aliases
                .iter()
                .map(|(alias, key)| (alias.clone(), key.clone())),
            self.canonical_keys.iter().cloned(),
        )
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent_width {
            self.indent_width = v;
        }
        if let Some(v) = partial.replace_tabs {
            self.replace_tabs = v;
        }
        if let Some(v) = partial.fix_indent {
            self.fix_indent = v;
        }
        if let Some(v) = partial.fix_docu {
            self.fix_docu = v;
        }
        if let Some(v) = &partial.excluded_dirs {
            self.excluded_dirs.clone_from(v);
        }
        if let Some(v) = &partial.excluded_extensions {
            self.excluded_extensions.clone_from(v);
        }
        if let Some(v) = &partial.canonical_keys {
            self.canonical_keys.clone_from(v);
        }
        // Exclusion patterns accumulate across files
        for pattern in &partial.exclude {
            if !self.exclude.contains(pattern) {
                self.exclude.push(pattern.clone());
            }
        }
        // Merge alias tables (partial values override)
        for (alias, key) in &partial.key_aliases {
            self.key_aliases.insert(alias.clone(), key.clone());
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the path's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            std::env::current_dir().ok()
        };

        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Root first, nearest last
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let mut config = Self::default();
        for path in &Self::discover_config_files(start_path) {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => warn!("failed to parse {}: {e}", path.display()),
                },
                Err(e) => warn!("failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}
