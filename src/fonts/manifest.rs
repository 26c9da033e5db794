// SPDX-License-Identifier: MPL-2.0
//! Where raw font sets come from.
//!
//! Hosts plug their own asset loader in through [`FontSource`]. For packages
//! that ship loose font files, [`FontManifest`] reads the variants from TOML:
//!
//! ```toml
//! [fonts.DefaultText]
//! variants = [
//!     { language = "English", asset = "fonts/Latin.ttf" },
//!     { language = "Japanese", asset = "fonts/NotoSansJP.ttf" },
//! ]
//! ```

use super::{FontSet, FontVariant};
use crate::domain::{FontType, Language};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads the unfiltered, multi-language set for a font type.
pub trait FontSource {
    /// Opaque reference to a loaded font asset.
    type Asset: Clone;

    fn load_font_set(&self, font_type: FontType) -> Result<FontSet<Self::Asset>>;
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    fonts: BTreeMap<String, ManifestFontType>,
}

#[derive(Debug, Deserialize)]
struct ManifestFontType {
    #[serde(default)]
    variants: Vec<ManifestVariant>,
}

#[derive(Debug, Deserialize)]
struct ManifestVariant {
    language: Language,
    asset: PathBuf,
}

/// Font variants declared in a TOML manifest; assets are file paths.
#[derive(Debug, Clone, Default)]
pub struct FontManifest {
    fonts: HashMap<FontType, Vec<FontVariant<PathBuf>>>,
}

impl FontManifest {
    /// Parses a manifest. Relative asset paths are resolved against `base_dir`.
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let file: ManifestFile = toml::from_str(content)?;
        let mut fonts = HashMap::new();

        for (name, entry) in file.fonts {
            let font_type: FontType = name
                .parse()
                .map_err(|err| Error::Config(format!("font manifest: {err}")))?;
            let variants = entry
                .variants
                .into_iter()
                .map(|variant| {
                    let asset = if variant.asset.is_relative() {
                        base_dir.join(variant.asset)
                    } else {
                        variant.asset
                    };
                    FontVariant::new(variant.language, asset)
                })
                .collect();
            fonts.insert(font_type, variants);
        }

        Ok(Self { fonts })
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_toml_str(&content, base_dir)
    }

    /// Font types declared in the manifest.
    pub fn font_types(&self) -> impl Iterator<Item = FontType> + '_ {
        self.fonts.keys().copied()
    }
}

impl FontSource for FontManifest {
    type Asset = PathBuf;

    fn load_font_set(&self, font_type: FontType) -> Result<FontSet<PathBuf>> {
        self.fonts
            .get(&font_type)
            .map(|variants| FontSet::new(font_type, variants.clone()))
            .ok_or(Error::FontTypeNotFound(font_type))
    }
}
