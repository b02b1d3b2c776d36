//! Supported languages and how the active one is chosen.

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// The three languages the storefront is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Two-letter code, also the value persisted as the preference.
    pub fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse a stored code or a locale tag (`pt`, `pt-BR`, `es_ES`, `EN`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Folder name of this language's Fluent bundle under `i18n/`.
    pub fn fluent_tag(self) -> &'static str {
        match self {
            Self::Pt => "pt-BR",
            Self::En => "en-US",
            Self::Es => "es-ES",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.fluent_tag()
            .parse()
            .expect("static language tags are valid identifiers")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Language to use when the current path does not decide it: stored
/// preference first, then the browser/OS locale, then Portuguese.
pub fn detect(stored: Option<&str>, locale: Option<&str>) -> Language {
    stored
        .and_then(Language::from_tag)
        .or_else(|| locale.and_then(Language::from_tag))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_locale_tags() {
        assert_eq!(Language::from_tag("pt"), Some(Language::Pt));
        assert_eq!(Language::from_tag("en-US"), Some(Language::En));
        assert_eq!(Language::from_tag("es_AR"), Some(Language::Es));
        assert_eq!(Language::from_tag("EN"), Some(Language::En));
        assert_eq!(Language::from_tag("fr-FR"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn stored_preference_wins_over_locale() {
        assert_eq!(detect(Some("es"), Some("en-US")), Language::Es);
    }

    #[test]
    fn falls_back_to_locale_then_portuguese() {
        assert_eq!(detect(None, Some("en-GB")), Language::En);
        assert_eq!(detect(Some("zz"), Some("de-DE")), Language::Pt);
        assert_eq!(detect(None, None), Language::Pt);
    }

    #[test]
    fn fluent_tags_parse() {
        for lang in Language::ALL {
            assert_eq!(lang.langid().language.as_str(), lang.code());
        }
    }
}
