//! Locale type: a locale code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated locale.
///
/// Only codes present in the [`LocaleRegistry`] can be turned into a `Locale`,
/// so every value of this type names a supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const FRENCH: Locale = Locale { code: "fr" };
    pub const GERMAN: Locale = Locale { code: "de" };
    pub const VIETNAMESE: Locale = Locale { code: "vi" };

    /// Create a Locale from a locale code string.
    ///
    /// # Arguments
    /// * `code` - A registered locale code (e.g., "fr", "vi")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let french = Locale::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) => Ok(Locale { code: config.code }),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The canonical locale, used as the source when none is configured.
    ///
    /// # Returns
    /// The canonical Locale (English).
    pub fn canonical() -> Locale {
        Locale {
            code: LocaleRegistry::get().canonical().code,
        }
    }

    /// Every locale in the registry, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this locale.
    ///
    /// # Returns
    /// A reference to the `LocaleConfig` for this locale.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Locale` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English name of the locale (e.g. "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale.
    ///
    /// # Returns
    /// The locale name in its own language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether DeepL can translate into this locale.
    pub fn deepl_supported(&self) -> bool {
        self.config().deepl_target.is_some()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s.trim())
    }
}

/// Parse a comma-separated list of locale codes, ignoring blanks and duplicates.
pub fn parse_locale_list(value: &str) -> Result<Vec<Locale>> {
    let mut locales = Vec::new();
    for code in value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let locale = Locale::from_code(code)?;
        if !locales.contains(&locale) {
            locales.push(locale);
        }
    }
    Ok(locales)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_registered() {
        for locale in [
            Locale::ENGLISH,
            Locale::SPANISH,
            Locale::FRENCH,
            Locale::GERMAN,
            Locale::VIETNAMESE,
        ] {
            assert!(Locale::from_code(locale.code()).is_ok());
        }
    }

    #[test]
    fn test_from_code_french() {
        let locale = Locale::from_code("fr").expect("Should succeed");
        assert_eq!(locale, Locale::FRENCH);
        assert_eq!(locale.name(), "French");
        assert_eq!(locale.native_name(), "Français");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Locale::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_canonical_is_english() {
        assert_eq!(Locale::canonical(), Locale::ENGLISH);
        assert!(Locale::ENGLISH.config().is_canonical);
        assert!(!Locale::FRENCH.config().is_canonical);
    }

    #[test]
    fn test_deepl_supported() {
        assert!(Locale::FRENCH.deepl_supported());
        assert!(!Locale::VIETNAMESE.deepl_supported());
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Locale::GERMAN.to_string(), "de");
        let parsed: Locale = " es ".parse().expect("Should parse");
        assert_eq!(parsed, Locale::SPANISH);
    }

    #[test]
    fn test_all_starts_with_canonical() {
        let all = Locale::all();
        assert_eq!(all.first(), Some(&Locale::ENGLISH));
        assert!(all.contains(&Locale::VIETNAMESE));
    }

    #[test]
    fn test_parse_locale_list() {
        let locales = parse_locale_list("fr, de,,fr ,vi").expect("Should parse");
        assert_eq!(
            locales,
            vec![Locale::FRENCH, Locale::GERMAN, Locale::VIETNAMESE]
        );
    }

    #[test]
    fn test_parse_locale_list_rejects_unknown() {
        let err = parse_locale_list("fr,klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }

    #[test]
    fn test_parse_locale_list_empty() {
        assert!(parse_locale_list("").expect("Should parse").is_empty());
    }
}
