// SPDX-License-Identifier: MPL-2.0
//! Per-package localization state.
//!
//! A session starts uninitialized. The host calls
//! [`initialize`](LocalizationSession::initialize) once it knows its own
//! language and [`update_localization`](LocalizationSession::update_localization)
//! whenever the user picks another one. At most one lookup table is live at
//! any time; the old one is released before its replacement is generated.

use super::events::{Listeners, SessionEvent, SubscriptionHandle};
use super::generator::LocalizationTableGenerator;
use super::table::LocalizationLookupTable;
use crate::config::PackageConfig;
use crate::directory_scanner::{self, AvailableLanguages};
use crate::domain::{Language, Subgroup};
use crate::error::{Error, Result};
use crate::fonts::{FontPolicy, FontSet, FontSource, FontVariantFilter};
use std::path::Path;

#[derive(Debug)]
pub struct LocalizationSession {
    config: PackageConfig,
    generator: LocalizationTableGenerator,
    available: AvailableLanguages,
    initialized: bool,
    current_language: Option<Language>,
    current_table: Option<LocalizationLookupTable>,
    listeners: Listeners,
}

impl LocalizationSession {
    /// Creates a session with default document settings.
    ///
    /// Returns an error if `content_dir` cannot be read.
    pub fn new(
        name: impl Into<String>,
        content_dir: impl Into<std::path::PathBuf>,
        default_language: Language,
    ) -> Result<Self> {
        let config = PackageConfig {
            default_language,
            ..PackageConfig::new(name, content_dir)
        };
        Self::with_config(config)
    }

    /// Creates a session for a package manifest and scans its languages.
    pub fn from_config(config: &PackageConfig) -> Result<Self> {
        Self::with_config(config.clone())
    }

    fn with_config(config: PackageConfig) -> Result<Self> {
        config.validate()?;
        let available =
            directory_scanner::scan_available_languages(&config.language_dir, &config.extension)?;
        for language in available.iter() {
            tracing::info!("Found language {} for {}", language, config.name);
        }

        Ok(Self {
            generator: LocalizationTableGenerator::from_config(&config),
            config,
            available,
            initialized: false,
            current_language: None,
            current_table: None,
            listeners: Listeners::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &PackageConfig {
        &self.config
    }

    pub fn content_dir(&self) -> &Path {
        &self.config.language_dir
    }

    pub fn default_language(&self) -> Language {
        self.config.default_language
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Language whose table is active; may differ from the last request
    /// when fallback happened.
    pub fn current_language(&self) -> Option<Language> {
        self.current_language
    }

    pub fn current_table(&self) -> Option<&LocalizationLookupTable> {
        self.current_table.as_ref()
    }

    pub fn available_languages(&self) -> &AvailableLanguages {
        &self.available
    }

    /// Registers a handler for [`SessionEvent`]s.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> bool {
        self.listeners.unsubscribe(handle)
    }

    /// Moves the session to the ready state and resolves its first table.
    ///
    /// `requested` is the host's current language; if the package has no
    /// document for it the default language is used. Subsequent calls are
    /// no-ops. `InitializationFinished` fires before the table is resolved.
    ///
    /// Returns an error only when the default language cannot be loaded.
    pub fn initialize(&mut self, requested: Language) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        self.listeners.emit(SessionEvent::InitializationFinished);

        let language = if self.available.contains(requested) {
            requested
        } else {
            tracing::warn!(
                "{} has no {} localization, using {}",
                self.config.name,
                requested,
                self.config.default_language
            );
            self.config.default_language
        };
        self.update_localization(language)?;

        tracing::info!("Finished initialization for {}", self.config.name);
        Ok(())
    }

    /// Switches to `language`, falling back to the default language once if
    /// the package did not ship it at construction or its document is
    /// malformed.
    ///
    /// Requesting the active language is a no-op. Before initialization the
    /// request is ignored; [`initialize`](Self::initialize) resolves the
    /// first table.
    ///
    /// Returns [`Error::DefaultLanguageUnavailable`] when the default
    /// language itself cannot be loaded; the session is then left without a
    /// table.
    pub fn update_localization(&mut self, language: Language) -> Result<()> {
        if !self.initialized {
            tracing::warn!(
                "Ignoring switch to {} for {}: not initialized yet",
                language,
                self.config.name
            );
            return Ok(());
        }
        if self.current_language == Some(language) {
            tracing::debug!("{} already uses {}", self.config.name, language);
            return Ok(());
        }

        self.release_current_table();

        let generated = if language == self.config.default_language
            || self.available.contains(language)
        {
            self.generate(language)
        } else {
            None
        };

        let (activated, table) = match generated {
            Some(table) => (language, table),
            None => self.generate_default(language)?,
        };

        self.current_language = Some(activated);
        self.current_table = Some(table);
        self.listeners.emit(SessionEvent::LanguageChanged(activated));
        Ok(())
    }

    /// Returns the text for `key`, or `key` itself when the session is not
    /// ready or the key is missing.
    #[must_use]
    pub fn get_text<'a>(&'a self, subgroup: Subgroup, key: &'a str) -> &'a str {
        if !self.initialized {
            tracing::warn!(
                "Localizer with name {} has not been initialized yet!",
                self.config.name
            );
            return key;
        }
        let Some(table) = self.current_table.as_ref() else {
            tracing::error!("{} has no localization table loaded", self.config.name);
            return key;
        };

        match table.lookup(subgroup, key) {
            Some(text) => text,
            None => {
                tracing::warn!(
                    "Missing {} localization for {}/{} in {}",
                    table.language(),
                    subgroup,
                    key,
                    self.config.name
                );
                key
            }
        }
    }

    /// Returns whether the package ships a document for `language`.
    /// Always `false` before initialization.
    pub fn is_language_available(&self, language: Language) -> bool {
        if !self.initialized {
            tracing::warn!(
                "Localizer with name {} has not been initialized yet!",
                self.config.name
            );
            return false;
        }
        self.available.contains(language)
    }

    /// Loads the raw set for `font_type` and trims it with `policy`.
    ///
    /// Before initialization the set is returned unfiltered. Afterwards an
    /// empty result is [`Error::EmptyFontSet`].
    pub fn load_filtered_font_set<S: FontSource>(
        &self,
        source: &S,
        font_type: crate::domain::FontType,
        policy: FontPolicy,
    ) -> Result<FontSet<S::Asset>> {
        let set = source.load_font_set(font_type)?;
        if !self.initialized {
            tracing::warn!(
                "Localizer with name {} has not been initialized yet! Returning unfiltered {}",
                self.config.name,
                font_type
            );
            return Ok(set);
        }

        FontVariantFilter::new(&self.available, self.config.baseline_font_language)
            .apply(&set, policy)
    }

    fn generate(&self, language: Language) -> Option<LocalizationLookupTable> {
        let path = self.config.language_file_path(language);
        self.generator.generate(language, &path)
    }

    fn generate_default(
        &self,
        requested: Language,
    ) -> Result<(Language, LocalizationLookupTable)> {
        let default = self.config.default_language;
        let fallback = if requested == default {
            None
        } else {
            tracing::warn!(
                "Falling back to {} for {} (requested {})",
                default,
                self.config.name,
                requested
            );
            self.generate(default)
        };

        match fallback {
            Some(table) => Ok((default, table)),
            None => {
                tracing::error!(
                    "Default language {} of {} could not be loaded",
                    default,
                    self.config.name
                );
                Err(Error::DefaultLanguageUnavailable {
                    package: self.config.name.clone(),
                    language: default,
                })
            }
        }
    }

    fn release_current_table(&mut self) {
        if let Some(mut table) = self.current_table.take() {
            table.release();
        }
        self.current_language = None;
    }
}
