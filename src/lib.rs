// SPDX-License-Identifier: MPL-2.0
//! `mod_localizer` resolves localized text and fonts for independently
//! shipped content packages.
//!
//! A package is a directory of `<Language>.fods` spreadsheets. Sessions
//! pick the document matching the host's language, fall back to the
//! package default when needed, and trim multi-language font sets down to
//! the languages the package actually supports.

#![doc(html_root_url = "https://docs.rs/mod-localizer/1.0.1")]

pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod fonts;
pub mod i18n;

pub use domain::{FontType, Language, Subgroup};
pub use error::{Error, Result};
pub use i18n::{LocalizationSession, SessionEvent, SessionRegistry};
