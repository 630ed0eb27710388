//! Documentation block key tables
//!
//! A [`KeyTable`] holds the canonical key names accepted in a documentation
//! block and the legacy spellings that are rewritten to them. Lookups are exact
//! and case-sensitive.

use std::collections::{BTreeMap, BTreeSet};

/// Keys accepted as-is
pub const DEFAULT_CANONICAL_KEYS: &[&str] = &[
    "Title", "URL", "Date", "Author", "Email", "Desc", "Comp", "Status", "Notes", "Ref", "meta",
];

/// Legacy spelling -> canonical key
pub const DEFAULT_KEY_ALIASES: &[(&str, &str)] = &[
    ("Problem Link", "URL"),
    ("Problem URL", "URL"),
    ("Link", "URL"),
    ("Problem", "Title"),
    ("Problem Name", "Title"),
    ("Problem Title", "Title"),
    ("Name", "Title"),
    ("Created", "Date"),
    ("Created On", "Date"),
    ("Complexity", "Comp"),
    ("Time Complexity", "Comp"),
    ("Note", "Notes"),
    ("Remarks", "Notes"),
    ("Description", "Desc"),
    ("Reference", "Ref"),
    ("References", "Ref"),
    ("Tags", "meta"),
    ("Category", "meta"),
    ("Mail", "Email"),
];

/// The key that triggers date reformatting
pub const DATE_KEY: &str = "Date";

/// Immutable alias and canonical key tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTable {
    aliases: BTreeMap<String, String>,
    canonical: BTreeSet<String>,
}

impl Default for KeyTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_KEY_ALIASES
                .iter()
                .map(|(alias, key)| ((*alias).to_string(), (*key).to_string())),
            DEFAULT_CANONICAL_KEYS.iter().map(|key| (*key).to_string()),
        )
    }
}

impl KeyTable {
    #[must_use]
    pub fn new(
        aliases: impl IntoIterator<Item = (String, String)>,
        canonical: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            aliases: aliases.into_iter().collect(),
            canonical: canonical.into_iter().collect(),
        }
    }

    /// Canonical name for `raw_key`, or `None` if the key is unknown
    #[must_use]
    pub fn resolve(&self, raw_key: &str) -> Option<&str> {
        if let Some(key) = self.aliases.get(raw_key) {
            return Some(key.as_str());
        }
        self.canonical.get(raw_key).map(String::as_str)
    }

    #[must_use]
    pub fn is_canonical(&self, key: &str) -> bool {
        self.canonical.contains(key)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, k)| (a.as_str(), k.as_str()))
    }

    /// Aliases whose target is not itself a canonical key
    #[must_use]
    pub fn dangling_aliases(&self) -> Vec<(&str, &str)> {
        self.aliases()
            .filter(|(_, key)| !self.is_canonical(key))
            .collect()
    }
}
