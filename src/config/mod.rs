// SPDX-License-Identifier: MPL-2.0
//! This module handles configuration: the host's own preferences, stored in a
//! `settings.toml` file, and the per-package manifests in [`package`].
//!
//! # Examples
//!
//! ```no_run
//! use mod_localizer::config::{self, HostSettings};
//! use mod_localizer::domain::Language;
//! use std::path::PathBuf;
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! settings.language = Some(Language::French);
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&settings, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.language, Some(Language::French));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;
pub mod package;

pub use package::{DocumentSchema, PackageConfig, SubgroupLayout};

use crate::domain::Language;
use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ModLocalizer";

/// Preferences of the host running the packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSettings {
    /// Language the user picked; `None` means "follow the OS locale".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<HostSettings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(HostSettings::default())
}

pub fn save(settings: &HostSettings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<HostSettings> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(settings) => Ok(settings),
        Err(err) => {
            tracing::warn!("Ignoring invalid settings file {}: {}", path.display(), err);
            Ok(HostSettings::default())
        }
    }
}

pub fn save_to_path(settings: &HostSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

// Languages are stored by canonical name so files stay hand-editable.
impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
