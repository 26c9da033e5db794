// SPDX-License-Identifier: MPL-2.0
//! Language-tagged font sets and the policies that trim them.
//!
//! A [`FontSet`] holds every variant shipped for one [`FontType`]. Packages
//! usually cover only some languages, so the set is narrowed with a
//! [`FontPolicy`] before it is handed to the renderer:
//!
//! - [`FontPolicy::AvailabilityFiltered`]: keep variants for languages the
//!   package has documents for
//! - [`FontPolicy::PrimaryOnly`]: keep variants for the baseline language
//!
//! An empty result is a content-authoring defect and is reported as
//! [`Error::EmptyFontSet`].

mod manifest;

pub use manifest::{FontManifest, FontSource};

use crate::directory_scanner::AvailableLanguages;
use crate::domain::{FontType, Language};
use crate::error::{Error, Result};

/// One language-specific rendering of a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontVariant<A> {
    pub language: Language,
    pub asset: A,
}

impl<A> FontVariant<A> {
    pub fn new(language: Language, asset: A) -> Self {
        Self { language, asset }
    }
}

/// Ordered variants of one logical font type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet<A> {
    font_type: FontType,
    variants: Vec<FontVariant<A>>,
}

impl<A> FontSet<A> {
    pub fn new(font_type: FontType, variants: Vec<FontVariant<A>>) -> Self {
        Self {
            font_type,
            variants,
        }
    }

    pub fn font_type(&self) -> FontType {
        self.font_type
    }

    pub fn variants(&self) -> &[FontVariant<A>] {
        &self.variants
    }

    pub fn into_variants(self) -> Vec<FontVariant<A>> {
        self.variants
    }

    /// Languages covered, in variant order (duplicates kept).
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.variants.iter().map(|variant| variant.language)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// Which variants of a font set to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontPolicy {
    /// Keep variants whose language the package ships documents for.
    #[default]
    AvailabilityFiltered,
    /// Keep only variants of the baseline language.
    PrimaryOnly,
}

impl std::fmt::Display for FontPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontPolicy::AvailabilityFiltered => write!(f, "AvailabilityFiltered"),
            FontPolicy::PrimaryOnly => write!(f, "PrimaryOnly"),
        }
    }
}

/// Applies a [`FontPolicy`] against one package's languages.
#[derive(Debug, Clone, Copy)]
pub struct FontVariantFilter<'a> {
    available: &'a AvailableLanguages,
    baseline: Language,
}

impl<'a> FontVariantFilter<'a> {
    pub fn new(available: &'a AvailableLanguages, baseline: Language) -> Self {
        Self {
            available,
            baseline,
        }
    }

    /// Returns `true` if a variant in `language` survives `policy`.
    #[must_use]
    pub fn keeps(&self, policy: FontPolicy, language: Language) -> bool {
        match policy {
            FontPolicy::AvailabilityFiltered => self.available.contains(language),
            FontPolicy::PrimaryOnly => language == self.baseline,
        }
    }

    /// Builds a new set holding the variants of `set` that survive `policy`,
    /// in their original order. The input is left untouched.
    pub fn apply<A: Clone>(&self, set: &FontSet<A>, policy: FontPolicy) -> Result<FontSet<A>> {
        let kept: Vec<FontVariant<A>> = set
            .variants()
            .iter()
            .filter(|variant| self.keeps(policy, variant.language))
            .cloned()
            .collect();

        if kept.is_empty() {
            tracing::error!(
                "No valid fonts found for {} with policy {} ({} variants before filtering)",
                set.font_type(),
                policy,
                set.len()
            );
            return Err(Error::EmptyFontSet {
                font_type: set.font_type(),
                policy,
            });
        }

        Ok(FontSet::new(set.font_type(), kept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> FontSet<&'static str> {
        FontSet::new(
            FontType::DefaultText,
            vec![
                FontVariant::new(Language::English, "latin.ttf"),
                FontVariant::new(Language::Japanese, "jp.ttf"),
                FontVariant::new(Language::Russian, "cyrillic.ttf"),
                FontVariant::new(Language::English, "latin-alt.ttf"),
            ],
        )
    }

    #[test]
    fn availability_policy_keeps_available_languages_in_order() {
        let available: AvailableLanguages = [Language::English, Language::Russian].into_iter().collect();
        let filter = FontVariantFilter::new(&available, Language::English);

        let filtered = filter
            .apply(&sample_set(), FontPolicy::AvailabilityFiltered)
            .expect("filter should keep variants");

        let assets: Vec<_> = filtered.variants().iter().map(|v| v.asset).collect();
        assert_eq!(assets, vec!["latin.ttf", "cyrillic.ttf", "latin-alt.ttf"]);
        assert_eq!(filtered.font_type(), FontType::DefaultText);
    }

    #[test]
    fn primary_only_keeps_exactly_the_baseline_variants() {
        let available = AvailableLanguages::new();
        let filter = FontVariantFilter::new(&available, Language::English);

        let filtered = filter
            .apply(&sample_set(), FontPolicy::PrimaryOnly)
            .expect("baseline variants exist");

        assert_eq!(filtered.len(), 2);
        assert!(filtered.languages().all(|l| l == Language::English));
    }

    #[test]
    fn primary_only_without_baseline_variant_fails() {
        let available: AvailableLanguages = [Language::Japanese].into_iter().collect();
        let filter = FontVariantFilter::new(&available, Language::English);
        let set = FontSet::new(
            FontType::LoadingText,
            vec![FontVariant::new(Language::Japanese, "jp.ttf")],
        );

        let result = filter.apply(&set, FontPolicy::PrimaryOnly);

        assert!(matches!(
            result,
            Err(Error::EmptyFontSet {
                font_type: FontType::LoadingText,
                policy: FontPolicy::PrimaryOnly
            })
        ));
    }

    #[test]
    fn availability_policy_with_no_overlap_fails() {
        let available: AvailableLanguages = [Language::Korean].into_iter().collect();
        let filter = FontVariantFilter::new(&available, Language::English);

        let result = filter.apply(&sample_set(), FontPolicy::AvailabilityFiltered);

        assert!(matches!(result, Err(Error::EmptyFontSet { .. })));
    }

    #[test]
    fn filtering_does_not_modify_the_input() {
        let available: AvailableLanguages = [Language::English].into_iter().collect();
        let filter = FontVariantFilter::new(&available, Language::English);
        let original = sample_set();

        let _ = filter.apply(&original, FontPolicy::AvailabilityFiltered);

        assert_eq!(original, sample_set());
    }

    #[test]
    fn policy_display_names() {
        assert_eq!(FontPolicy::PrimaryOnly.to_string(), "PrimaryOnly");
        assert_eq!(
            FontPolicy::AvailabilityFiltered.to_string(),
            "AvailabilityFiltered"
        );
    }
}
