// SPDX-License-Identifier: MPL-2.0
//! In-memory lookup table for one language document.

use crate::domain::{Language, Subgroup};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The atomic unit parsed from a language document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationEntry {
    pub subgroup: Subgroup,
    pub key: String,
    pub value: String,
}

impl LocalizationEntry {
    pub fn new(subgroup: Subgroup, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            subgroup,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Read-only map from `(subgroup, key)` to text, built from one document.
///
/// A missing key is an ordinary miss. Once [`release`](Self::release)d, the
/// table drops its contents and must not be queried again.
#[derive(Debug)]
pub struct LocalizationLookupTable {
    language: Language,
    source: PathBuf,
    entries: HashMap<Subgroup, HashMap<String, String>>,
    released: bool,
}

impl LocalizationLookupTable {
    /// Builds a table from entries in document order; a later duplicate of a
    /// `(subgroup, key)` pair replaces the earlier one.
    pub fn from_entries(
        language: Language,
        source: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = LocalizationEntry>,
    ) -> Self {
        let mut map: HashMap<Subgroup, HashMap<String, String>> = HashMap::new();
        for entry in entries {
            map.entry(entry.subgroup)
                .or_default()
                .insert(entry.key, entry.value);
        }

        Self {
            language,
            source: source.into(),
            entries: map,
            released: false,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Document the table was generated from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Looks up the text stored for `key` in `subgroup`.
    ///
    /// # Panics
    ///
    /// Panics if the table has been released.
    #[must_use]
    pub fn lookup(&self, subgroup: Subgroup, key: &str) -> Option<&str> {
        assert!(
            !self.released,
            "lookup on released {} localization table ({})",
            self.language,
            self.source.display()
        );
        self.entries
            .get(&subgroup)
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Total number of distinct `(subgroup, key)` pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys stored for `subgroup`.
    pub fn subgroup_len(&self, subgroup: Subgroup) -> usize {
        self.entries.get(&subgroup).map_or(0, HashMap::len)
    }

    /// Drops the parsed contents. Calling this more than once is harmless.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.entries = HashMap::new();
        self.released = true;
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
