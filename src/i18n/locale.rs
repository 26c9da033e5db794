// SPDX-License-Identifier: MPL-2.0
//! Resolves which language a host without one of its own should request.

use crate::config::HostSettings;
use crate::domain::Language;
use unic_langid::LanguageIdentifier;

impl Language {
    /// Maps a BCP-47 tag such as `fr-CA` or `zh-Hant-TW` onto a language.
    ///
    /// POSIX-style tags (`pt_BR.UTF-8`) are accepted too.
    #[must_use]
    pub fn from_locale(tag: &str) -> Option<Self> {
        let tag = tag.split(['.', '@']).next().unwrap_or(tag).replace('_', "-");
        let langid: LanguageIdentifier = tag.parse().ok()?;

        let language = Language::from_iso639(langid.language.as_str())?;
        if language != Language::Chinese {
            return Some(language);
        }

        let script = langid.script.as_ref().map(|script| script.as_str());
        let region = langid.region.as_ref().map(|region| region.as_str());
        let variant = match (script, region) {
            (Some("Hans"), _) => Language::ChineseSimplified,
            (Some("Hant"), _) => Language::ChineseTraditional,
            (None, Some("CN" | "SG")) => Language::ChineseSimplified,
            (None, Some("TW" | "HK" | "MO")) => Language::ChineseTraditional,
            _ => Language::Chinese,
        };
        Some(variant)
    }
}

/// Picks the language to pass to
/// [`LocalizationSession::initialize`](super::LocalizationSession::initialize).
///
/// Priority: explicit `cli` value, then the host settings file, then the OS
/// locale, then `default`.
pub fn resolve_requested_language(
    cli: Option<Language>,
    settings: &HostSettings,
    default: Language,
) -> Language {
    resolve_with_os_locale(cli, settings, sys_locale::get_locale().as_deref(), default)
}

fn resolve_with_os_locale(
    cli: Option<Language>,
    settings: &HostSettings,
    os_locale: Option<&str>,
    default: Language,
) -> Language {
    if let Some(language) = cli {
        return language;
    }
    if let Some(language) = settings.language {
        return language;
    }
    if let Some(tag) = os_locale {
        match Language::from_locale(tag) {
            Some(language) => return language,
            None => tracing::debug!("OS locale '{}' matches no known language", tag),
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_and_regional_tags() {
        assert_eq!(Language::from_locale("fr"), Some(Language::French));
        assert_eq!(Language::from_locale("en-US"), Some(Language::English));
        assert_eq!(Language::from_locale("pt_BR.UTF-8"), Some(Language::Portuguese));
        assert_eq!(Language::from_locale("nb-NO"), Some(Language::Norwegian));
    }

    #[test]
    fn splits_chinese_by_script_or_region() {
        assert_eq!(Language::from_locale("zh-Hans"), Some(Language::ChineseSimplified));
        assert_eq!(Language::from_locale("zh-Hant-HK"), Some(Language::ChineseTraditional));
        assert_eq!(Language::from_locale("zh-CN"), Some(Language::ChineseSimplified));
        assert_eq!(Language::from_locale("zh-TW"), Some(Language::ChineseTraditional));
        assert_eq!(Language::from_locale("zh"), Some(Language::Chinese));
    }

    #[test]
    fn rejects_unknown_or_invalid_tags() {
        assert_eq!(Language::from_locale("tlh"), None);
        assert_eq!(Language::from_locale("not a tag"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn cli_value_wins() {
        let settings = HostSettings {
            language: Some(Language::German),
        };
        let language = resolve_with_os_locale(
            Some(Language::French),
            &settings,
            Some("ja-JP"),
            Language::English,
        );
        assert_eq!(language, Language::French);
    }

    #[test]
    fn settings_beat_os_locale() {
        let settings = HostSettings {
            language: Some(Language::German),
        };
        let language = resolve_with_os_locale(None, &settings, Some("ja-JP"), Language::English);
        assert_eq!(language, Language::German);
    }

    #[test]
    fn os_locale_is_used_when_nothing_else_is_set() {
        let language =
            resolve_with_os_locale(None, &HostSettings::default(), Some("ja-JP"), Language::English);
        assert_eq!(language, Language::Japanese);
    }

    #[test]
    fn falls_back_to_default() {
        let settings = HostSettings::default();
        assert_eq!(
            resolve_with_os_locale(None, &settings, None, Language::Spanish),
            Language::Spanish
        );
        assert_eq!(
            resolve_with_os_locale(None, &settings, Some("xx-invalid-tag-!"), Language::Spanish),
            Language::Spanish
        );
    }

    #[test]
    fn public_resolver_returns_cli_value() {
        let language =
            resolve_requested_language(Some(Language::Korean), &HostSettings::default(), Language::English);
        assert_eq!(language, Language::Korean);
    }
}
