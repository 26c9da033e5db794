// SPDX-License-Identifier: MPL-2.0
use crate::domain::{FontType, Language};
use crate::fonts::FontPolicy;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A language document is not a readable spreadsheet.
    #[error("Parse Error: {0}")]
    Parse(String),

    /// A document row names a subgroup that does not exist (strict mode only).
    #[error("Unknown subgroup '{label}'")]
    UnknownSubgroup { label: String },

    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// The package's own default language could not be loaded. There is no
    /// further fallback, so this is a packaging defect.
    #[error("Default language {language} of package '{package}' could not be loaded")]
    DefaultLanguageUnavailable { package: String, language: Language },

    /// Filtering a font set left no usable variant.
    #[error("No valid fonts found for font type {font_type} with policy {policy}")]
    EmptyFontSet {
        font_type: FontType,
        policy: FontPolicy,
    },

    #[error("Font type {0} is not defined")]
    FontTypeNotFound(FontType),
}

impl Error {
    /// Returns `true` for packaging defects that must stop the host.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::DefaultLanguageUnavailable { .. } | Error::EmptyFontSet { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn only_packaging_defects_are_fatal() {
        let default_missing = Error::DefaultLanguageUnavailable {
            package: "Demo".into(),
            language: Language::English,
        };
        let empty_fonts = Error::EmptyFontSet {
            font_type: FontType::DefaultText,
            policy: FontPolicy::PrimaryOnly,
        };
        assert!(default_missing.is_fatal());
        assert!(empty_fonts.is_fatal());
        assert!(!Error::Parse("bad".into()).is_fatal());
    }

    #[test]
    fn default_language_error_names_package_and_language() {
        let err = Error::DefaultLanguageUnavailable {
            package: "Demo".into(),
            language: Language::English,
        };
        assert_eq!(
            err.to_string(),
            "Default language English of package 'Demo' could not be loaded"
        );
    }
}
