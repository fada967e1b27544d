// SPDX-License-Identifier: MPL-2.0
//! Supported UI languages and their display metadata.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported UI language.
///
/// The set is closed: adding a language means adding a variant, a
/// [`LanguageDescriptor`] and an `assets/i18n/<code>.ftl` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Sw,
    Fr,
    Ar,
    Es,
    Pt,
}

impl LanguageCode {
    /// Base language every other dictionary falls back to.
    pub const BASE: LanguageCode = LanguageCode::En;

    /// All languages, in display order.
    pub const ALL: [LanguageCode; 6] = [
        LanguageCode::En,
        LanguageCode::Sw,
        LanguageCode::Fr,
        LanguageCode::Ar,
        LanguageCode::Es,
        LanguageCode::Pt,
    ];

    /// ISO 639-1 code, also the persisted form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Sw => "sw",
            LanguageCode::Fr => "fr",
            LanguageCode::Ar => "ar",
            LanguageCode::Es => "es",
            LanguageCode::Pt => "pt",
        }
    }

    /// Whether text in this language is laid out right-to-left.
    #[must_use]
    pub const fn is_right_to_left(self) -> bool {
        matches!(self, LanguageCode::Ar)
    }

    #[must_use]
    pub fn descriptor(self) -> &'static LanguageDescriptor {
        // LANGUAGES is indexed in the same order as ALL.
        &LANGUAGES[self as usize]
    }

    /// Locale identifier handed to Fluent for plural rules.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        self.as_str().parse().unwrap_or_default()
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    /// Accepts a bare code (`"sw"`) or any BCP-47 tag whose language subtag
    /// is supported (`"fr-CA"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let language = trimmed
            .parse::<LanguageIdentifier>()
            .map(|id| id.language.as_str().to_ascii_lowercase())
            .map_err(|_| Error::UnsupportedLanguage(trimmed.to_string()))?;

        LanguageCode::ALL
            .into_iter()
            .find(|code| code.as_str() == language)
            .ok_or_else(|| Error::UnsupportedLanguage(trimmed.to_string()))
    }
}

/// Display metadata for the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDescriptor {
    pub code: LanguageCode,
    /// English name, e.g. "Swahili".
    pub name: &'static str,
    /// Name in the language itself, e.g. "Kiswahili".
    pub native_name: &'static str,
    pub flag: &'static str,
    /// Region the flag stands for.
    pub region: &'static str,
}

/// Curated display order, not alphabetical.
pub static LANGUAGES: [LanguageDescriptor; 6] = [
    LanguageDescriptor {
        code: LanguageCode::En,
        name: "English",
        native_name: "English",
        flag: "🇬🇧",
        region: "GB",
    },
    LanguageDescriptor {
        code: LanguageCode::Sw,
        name: "Swahili",
        native_name: "Kiswahili",
        flag: "🇰🇪",
        region: "KE",
    },
    LanguageDescriptor {
        code: LanguageCode::Fr,
        name: "French",
        native_name: "Français",
        flag: "🇫🇷",
        region: "FR",
    },
    LanguageDescriptor {
        code: LanguageCode::Ar,
        name: "Arabic",
        native_name: "العربية",
        flag: "🇸🇦",
        region: "SA",
    },
    LanguageDescriptor {
        code: LanguageCode::Es,
        name: "Spanish",
        native_name: "Español",
        flag: "🇪🇸",
        region: "ES",
    },
    LanguageDescriptor {
        code: LanguageCode::Pt,
        name: "Portuguese",
        native_name: "Português",
        flag: "🇵🇹",
        region: "PT",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_line_up_with_codes() {
        for code in LanguageCode::ALL {
            assert_eq!(code.descriptor().code, code);
        }
    }

    #[test]
    fn display_order_is_curated() {
        let order: Vec<_> = LANGUAGES.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(order, ["en", "sw", "fr", "ar", "es", "pt"]);
    }

    #[test]
    fn parses_bare_codes_and_tags() {
        assert_eq!("sw".parse::<LanguageCode>().unwrap(), LanguageCode::Sw);
        assert_eq!("FR".parse::<LanguageCode>().unwrap(), LanguageCode::Fr);
        assert_eq!("pt-BR".parse::<LanguageCode>().unwrap(), LanguageCode::Pt);
        assert_eq!(" ar ".parse::<LanguageCode>().unwrap(), LanguageCode::Ar);
    }

    #[test]
    fn rejects_unsupported_codes() {
        for raw in ["xx", "de", "", "not a tag"] {
            assert!(
                matches!(raw.parse::<LanguageCode>(), Err(Error::UnsupportedLanguage(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        for code in LanguageCode::ALL {
            assert_eq!(code.is_right_to_left(), code == LanguageCode::Ar);
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for code in LanguageCode::ALL {
            assert_eq!(code.to_string().parse::<LanguageCode>().unwrap(), code);
        }
    }

    #[test]
    fn default_is_base_language() {
        assert_eq!(LanguageCode::default(), LanguageCode::BASE);
    }
}
