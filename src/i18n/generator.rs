// SPDX-License-Identifier: MPL-2.0
//! Turns a language document into a [`LocalizationLookupTable`].

use super::fods::{self, SheetRow};
use super::table::{LocalizationEntry, LocalizationLookupTable};
use crate::config::{DocumentSchema, PackageConfig, SubgroupLayout};
use crate::domain::{Language, Subgroup};
use crate::error::{Error, Result};
use std::io::BufRead;
use std::path::Path;

/// Parses language documents according to a package's [`DocumentSchema`].
///
/// Rows with an empty key are skipped. Empty values are kept as `""`.
/// Unknown subgroup labels drop the row with a warning, or fail the whole
/// document when the generator is strict.
#[derive(Debug, Clone, Default)]
pub struct LocalizationTableGenerator {
    schema: DocumentSchema,
    strict_subgroups: bool,
}

impl LocalizationTableGenerator {
    pub fn new(schema: DocumentSchema) -> Self {
        Self {
            schema,
            strict_subgroups: false,
        }
    }

    pub fn from_config(config: &PackageConfig) -> Self {
        Self::new(config.schema.clone()).strict(config.strict_subgroups)
    }

    /// Rejects documents containing unknown subgroup labels.
    #[must_use]
    pub fn strict(mut self, strict_subgroups: bool) -> Self {
        self.strict_subgroups = strict_subgroups;
        self
    }

    pub fn schema(&self) -> &DocumentSchema {
        &self.schema
    }

    /// Builds the table for `language` from the document at `path`.
    ///
    /// Never fails loudly: an unreadable or corrupt document is logged and
    /// yields `None`, leaving the fallback decision to the caller.
    pub fn generate(&self, language: Language, path: &Path) -> Option<LocalizationLookupTable> {
        match self.try_generate(language, path) {
            Ok(table) => {
                tracing::debug!(
                    "Generated {} table with {} entries from {}",
                    language,
                    table.len(),
                    path.display()
                );
                Some(table)
            }
            Err(err) => {
                tracing::warn!(
                    "No {} localization produced from {}: {}",
                    language,
                    path.display(),
                    err
                );
                None
            }
        }
    }

    pub fn try_generate(&self, language: Language, path: &Path) -> Result<LocalizationLookupTable> {
        let rows = fods::read_rows_from_path(path, self.schema.columns_needed())?;
        let entries = self.entries_from_rows(rows)?;
        Ok(LocalizationLookupTable::from_entries(language, path, entries))
    }

    /// Same as [`try_generate`](Self::try_generate) for an in-memory document.
    pub fn generate_from_reader<R: BufRead>(
        &self,
        language: Language,
        source: &Path,
        reader: R,
    ) -> Result<LocalizationLookupTable> {
        let rows = fods::read_rows(reader, self.schema.columns_needed())?;
        let entries = self.entries_from_rows(rows)?;
        Ok(LocalizationLookupTable::from_entries(language, source, entries))
    }

    /// Maps raw rows onto entries, keeping document order.
    pub fn entries_from_rows(&self, rows: Vec<SheetRow>) -> Result<Vec<LocalizationEntry>> {
        let mut entries = Vec::with_capacity(rows.len());

        for row in rows {
            if row.index < self.schema.header_rows {
                continue;
            }

            let key = row.cell(self.schema.key_column).trim();
            if key.is_empty() {
                continue;
            }

            let label = match self.schema.layout {
                SubgroupLayout::Columns => row.cell(self.schema.subgroup_column).trim(),
                SubgroupLayout::Sheets => row.sheet.trim(),
            };

            let subgroup = match label.parse::<Subgroup>() {
                Ok(subgroup) => subgroup,
                Err(_) if self.strict_subgroups => {
                    return Err(Error::UnknownSubgroup {
                        label: label.to_string(),
                    });
                }
                Err(_) => {
                    tracing::warn!(
                        "Dropping entry '{}': unknown subgroup '{}' (sheet '{}', row {})",
                        key,
                        label,
                        row.sheet,
                        row.index + 1
                    );
                    continue;
                }
            };

            entries.push(LocalizationEntry::new(
                subgroup,
                key,
                row.cell(self.schema.value_column),
            ));
        }

        Ok(entries)
    }
}
