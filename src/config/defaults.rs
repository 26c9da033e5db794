// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Package**: Content directory and fallback language
//! - **Document**: Column layout of language documents
//! - **Fonts**: Baseline language for primary-only font sets

use crate::domain::Language;

// ==========================================================================
// Package Defaults
// ==========================================================================

/// Extension (without the dot) of recognized language documents.
pub const DEFAULT_EXTENSION: &str = "fods";

/// Language every package falls back to when the requested one fails.
pub const DEFAULT_LANGUAGE: Language = Language::English;

/// Content directory, relative to the package manifest.
pub const DEFAULT_LANGUAGE_DIR: &str = "Languages";

/// Name used in diagnostics when a package does not declare one.
pub const DEFAULT_PACKAGE_NAME: &str = "unnamed";

// ==========================================================================
// Document Defaults
// ==========================================================================

/// Column holding the subgroup label.
pub const DEFAULT_SUBGROUP_COLUMN: usize = 0;

/// Column holding the localization key.
pub const DEFAULT_KEY_COLUMN: usize = 1;

/// Column holding the text value.
pub const DEFAULT_VALUE_COLUMN: usize = 2;

/// Leading rows of every sheet that are not entries.
pub const DEFAULT_HEADER_ROWS: usize = 0;

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Language kept by the primary-only font policy.
pub const DEFAULT_BASELINE_FONT_LANGUAGE: Language = Language::English;
