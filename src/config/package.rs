// SPDX-License-Identifier: MPL-2.0
//! Per-package manifest.
//!
//! A content package ships a small TOML file describing where its language
//! documents live, which language to fall back to and how the documents are
//! laid out:
//!
//! ```toml
//! name = "GraffitiPack"
//! language_dir = "Languages"
//! default_language = "English"
//! extension = "fods"
//! baseline_font_language = "English"
//! strict_subgroups = false
//!
//! [schema]
//! layout = "columns"
//! subgroup_column = 0
//! key_column = 1
//! value_column = 2
//! header_rows = 1
//! ```

use super::defaults;
use crate::domain::Language;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where a document row takes its subgroup label from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubgroupLayout {
    /// One column of every row holds the label.
    #[default]
    Columns,
    /// The sheet name is the label; every row of a sheet shares it.
    Sheets,
}

/// Column mapping shared by every language document of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSchema {
    pub layout: SubgroupLayout,
    pub subgroup_column: usize,
    pub key_column: usize,
    pub value_column: usize,
    pub header_rows: usize,
}

impl Default for DocumentSchema {
    fn default() -> Self {
        Self {
            layout: SubgroupLayout::Columns,
            subgroup_column: defaults::DEFAULT_SUBGROUP_COLUMN,
            key_column: defaults::DEFAULT_KEY_COLUMN,
            value_column: defaults::DEFAULT_VALUE_COLUMN,
            header_rows: defaults::DEFAULT_HEADER_ROWS,
        }
    }
}

impl DocumentSchema {
    /// Number of leading cells a row must materialize to satisfy the schema.
    #[must_use]
    pub fn columns_needed(&self) -> usize {
        let mut widest = self.key_column.max(self.value_column);
        if self.layout == SubgroupLayout::Columns {
            widest = widest.max(self.subgroup_column);
        }
        widest + 1
    }

    /// Rejects schemas whose columns overlap.
    pub fn validate(&self) -> Result<()> {
        if self.key_column == self.value_column {
            return Err(Error::Config(
                "schema key_column and value_column must differ".into(),
            ));
        }
        if self.layout == SubgroupLayout::Columns
            && (self.subgroup_column == self.key_column
                || self.subgroup_column == self.value_column)
        {
            return Err(Error::Config(
                "schema subgroup_column must differ from key and value columns".into(),
            ));
        }
        Ok(())
    }
}

/// Everything a session needs to know about one content package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Human-readable package name used in diagnostics.
    pub name: String,
    /// Directory holding one document per language.
    pub language_dir: PathBuf,
    pub default_language: Language,
    /// Extension of language documents, without the leading dot.
    pub extension: String,
    /// Language kept by [`FontPolicy::PrimaryOnly`](crate::fonts::FontPolicy::PrimaryOnly).
    pub baseline_font_language: Language,
    /// Fail a whole document when a row names an unknown subgroup.
    pub strict_subgroups: bool,
    pub schema: DocumentSchema,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: defaults::DEFAULT_PACKAGE_NAME.to_string(),
            language_dir: PathBuf::from(defaults::DEFAULT_LANGUAGE_DIR),
            default_language: defaults::DEFAULT_LANGUAGE,
            extension: defaults::DEFAULT_EXTENSION.to_string(),
            baseline_font_language: defaults::DEFAULT_BASELINE_FONT_LANGUAGE,
            strict_subgroups: false,
            schema: DocumentSchema::default(),
        }
    }
}

impl PackageConfig {
    /// Creates a manifest for `name` reading documents from `language_dir`.
    pub fn new(name: impl Into<String>, language_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            language_dir: language_dir.into(),
            ..Self::default()
        }
    }

    /// Parses a manifest from TOML text.
    ///
    /// Relative paths are left untouched; see [`PackageConfig::load_from_path`].
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PackageConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a manifest, resolving a relative `language_dir` against the
    /// manifest's own directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if config.language_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.language_dir = parent.join(&config.language_dir);
            }
        }
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "extension must be non-empty and without a leading dot, got '{}'",
                self.extension
            )));
        }
        self.schema.validate()
    }

    /// Path of the document that would hold `language`.
    #[must_use]
    pub fn language_file_path(&self, language: Language) -> PathBuf {
        self.language_dir
            .join(format!("{}.{}", language.name(), self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_manifest_uses_defaults() {
        let config = PackageConfig::from_toml_str("").expect("empty manifest is valid");
        assert_eq!(config, PackageConfig::default());
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.extension, "fods");
    }

    #[test]
    fn manifest_overrides_fields_and_schema() {
        let config = PackageConfig::from_toml_str(
            r#"
name = "GraffitiPack"
default_language = "German"
strict_subgroups = true

[schema]
layout = "sheets"
key_column = 0
value_column = 1
header_rows = 2
"#,
        )
        .expect("manifest should parse");

        assert_eq!(config.name, "GraffitiPack");
        assert_eq!(config.default_language, Language::German);
        assert!(config.strict_subgroups);
        assert_eq!(config.schema.layout, SubgroupLayout::Sheets);
        assert_eq!(config.schema.header_rows, 2);
        assert_eq!(config.schema.columns_needed(), 2);
    }

    #[test]
    fn unknown_default_language_is_a_config_error() {
        let result = PackageConfig::from_toml_str("default_language = \"Elvish\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn overlapping_columns_are_rejected() {
        let result = PackageConfig::from_toml_str("[schema]\nkey_column = 2\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn sheet_layout_ignores_subgroup_column_overlap() {
        let schema = DocumentSchema {
            layout: SubgroupLayout::Sheets,
            subgroup_column: 0,
            key_column: 0,
            value_column: 1,
            header_rows: 0,
        };
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let result = PackageConfig::from_toml_str("extension = \".fods\"");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_from_path_resolves_language_dir_next_to_manifest() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest = temp_dir.path().join("pack").join("localizer.toml");
        PackageConfig::new("Pack", "Languages")
            .save_to_path(&manifest)
            .expect("failed to save manifest");

        let loaded = PackageConfig::load_from_path(&manifest).expect("failed to load manifest");
        assert_eq!(loaded.language_dir, temp_dir.path().join("pack").join("Languages"));
    }

    #[test]
    fn language_file_path_uses_canonical_name_and_extension() {
        let config = PackageConfig::new("Pack", "/content");
        assert_eq!(
            config.language_file_path(Language::French),
            PathBuf::from("/content/French.fods")
        );
    }
}
