// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding per-language documents.
//!
//! This module scans a package's content directory for files carrying the
//! package's document extension whose stem is a [`Language`] name, and
//! collects the set of languages the package can be displayed in.

use crate::domain::Language;
use crate::error::Result;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A recognized language document inside a content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    pub language: Language,
    pub path: PathBuf,
}

/// Languages a content package ships documents for.
///
/// Computed once when a session is built and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableLanguages {
    languages: BTreeSet<Language>,
}

impl AvailableLanguages {
    /// Creates an empty set; every request will fall back to the default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a document for `language` was found.
    pub fn contains(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Iterates the languages in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Language> + '_ {
        self.languages.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl FromIterator<Language> for AvailableLanguages {
    fn from_iter<I: IntoIterator<Item = Language>>(iter: I) -> Self {
        Self {
            languages: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a LanguageFile> for AvailableLanguages {
    fn from_iter<I: IntoIterator<Item = &'a LanguageFile>>(iter: I) -> Self {
        iter.into_iter().map(|file| file.language).collect()
    }
}

/// Scans `directory` (non-recursively) for `<Language>.<extension>` files.
///
/// Files with another extension, or whose stem is not exactly a language
/// name, are skipped silently. The result is sorted by path.
///
/// Returns an error if the directory cannot be read.
pub fn scan_language_files(directory: &Path, extension: &str) -> Result<Vec<LanguageFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() || path.extension() != Some(OsStr::new(extension)) {
            continue;
        }

        let Some(language) = path
            .file_stem()
            .and_then(OsStr::to_str)
            .and_then(|stem| stem.parse::<Language>().ok())
        else {
            continue;
        };

        files.push(LanguageFile { language, path });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Scans `directory` and returns the set of languages found there.
pub fn scan_available_languages(directory: &Path, extension: &str) -> Result<AvailableLanguages> {
    let files = scan_language_files(directory, extension)?;
    Ok(files.iter().collect())
}
