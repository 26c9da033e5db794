// SPDX-License-Identifier: MPL-2.0
//! Human languages known to the host.
//!
//! The set is closed: a language data file is only recognized when its
//! filename stem is exactly one of these names (e.g. `English.fods`).

use super::named_enum;

named_enum! {
    /// A human language the host can display.
    pub enum Language {
        Afrikaans,
        Arabic,
        Basque,
        Belarusian,
        Bulgarian,
        Catalan,
        Chinese,
        Czech,
        Danish,
        Dutch,
        English,
        Estonian,
        Faroese,
        Finnish,
        French,
        German,
        Greek,
        Hebrew,
        Hungarian,
        Icelandic,
        Indonesian,
        Italian,
        Japanese,
        Korean,
        Latvian,
        Lithuanian,
        Norwegian,
        Polish,
        Portuguese,
        Romanian,
        Russian,
        SerboCroatian,
        Slovak,
        Slovenian,
        Spanish,
        Swedish,
        Thai,
        Turkish,
        Ukrainian,
        Vietnamese,
        ChineseSimplified,
        ChineseTraditional,
        Hindi,
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl Language {
    /// Maps an ISO 639-1 primary language subtag onto a language.
    ///
    /// Chinese maps to the script-neutral [`Language::Chinese`]; callers that
    /// know the script pick the simplified or traditional variant themselves.
    #[must_use]
    pub fn from_iso639(code: &str) -> Option<Self> {
        let language = match code.to_ascii_lowercase().as_str() {
            "af" => Language::Afrikaans,
            "ar" => Language::Arabic,
            "eu" => Language::Basque,
            "be" => Language::Belarusian,
            "bg" => Language::Bulgarian,
            "ca" => Language::Catalan,
            "zh" => Language::Chinese,
            "cs" => Language::Czech,
            "da" => Language::Danish,
            "nl" => Language::Dutch,
            "en" => Language::English,
            "et" => Language::Estonian,
            "fo" => Language::Faroese,
            "fi" => Language::Finnish,
            "fr" => Language::French,
            "de" => Language::German,
            "el" => Language::Greek,
            "he" | "iw" => Language::Hebrew,
            "hu" => Language::Hungarian,
            "is" => Language::Icelandic,
            "id" | "in" => Language::Indonesian,
            "it" => Language::Italian,
            "ja" => Language::Japanese,
            "ko" => Language::Korean,
            "lv" => Language::Latvian,
            "lt" => Language::Lithuanian,
            "no" | "nb" | "nn" => Language::Norwegian,
            "pl" => Language::Polish,
            "pt" => Language::Portuguese,
            "ro" => Language::Romanian,
            "ru" => Language::Russian,
            "sh" | "sr" | "hr" | "bs" => Language::SerboCroatian,
            "sk" => Language::Slovak,
            "sl" => Language::Slovenian,
            "es" => Language::Spanish,
            "sv" => Language::Swedish,
            "th" => Language::Thai,
            "tr" => Language::Turkish,
            "uk" => Language::Ukrainian,
            "vi" => Language::Vietnamese,
            "hi" => Language::Hindi,
            _ => return None,
        };
        Some(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_exact_canonical_names() {
        assert_eq!(Language::from_str("English"), Ok(Language::English));
        assert_eq!(
            Language::from_str("SerboCroatian"),
            Ok(Language::SerboCroatian)
        );
    }

    #[test]
    fn parsing_is_case_sensitive_and_does_not_trim() {
        assert!(Language::from_str("english").is_err());
        assert!(Language::from_str("ENGLISH").is_err());
        assert!(Language::from_str(" English").is_err());
        assert!(Language::from_str("").is_err());
    }

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for language in Language::ALL {
            assert_eq!(Language::from_str(language.name()), Ok(*language));
            assert_eq!(language.to_string(), language.name());
        }
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = Language::from_str("Klingon").unwrap_err();
        assert_eq!(err.kind, "Language");
        assert_eq!(err.to_string(), "unknown Language: 'Klingon'");
    }

    #[test]
    fn iso639_codes_map_to_languages() {
        assert_eq!(Language::from_iso639("fr"), Some(Language::French));
        assert_eq!(Language::from_iso639("EN"), Some(Language::English));
        assert_eq!(Language::from_iso639("nb"), Some(Language::Norwegian));
        assert_eq!(Language::from_iso639("zh"), Some(Language::Chinese));
        assert_eq!(Language::from_iso639("tlh"), None);
    }
}
