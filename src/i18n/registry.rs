//! Locale registry: the closed set of locales this tool can translate into.
//!
//! The registry is a lazily-initialised singleton (`OnceLock`). Which of these
//! locales a run actually processes, and which are routed to OpenAI, is
//! decided by configuration (`crate::config::LocaleSettings`), not here.

use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code, also the file stem of the locale's JSON document (e.g. "fr")
    pub code: &'static str,

    /// English name, used in translation prompts (e.g. "French")
    pub name: &'static str,

    /// Native name (e.g. "Français")
    pub native_name: &'static str,

    /// DeepL `target_lang` value, `None` when DeepL cannot translate into it
    pub deepl_target: Option<&'static str>,

    /// Whether this is the default source locale (exactly one should be true)
    pub is_canonical: bool,
}

impl LocaleConfig {
    /// DeepL `source_lang` value: the upper-cased base code, if DeepL supports it.
    pub fn deepl_source(&self) -> Option<String> {
        self.deepl_target.map(|_| self.code.to_ascii_uppercase())
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Look up a locale by its code.
    ///
    /// # Arguments
    /// * `code` - The locale code, which is also the file stem (e.g., "en", "fr")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale is registered
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Locales DeepL cannot serve. These must always be routed to OpenAI.
    ///
    /// # Returns
    /// The registry entries whose `deepl_target` is `None`, in registry order.
    pub fn list_deepl_unsupported(&self) -> Vec<&LocaleConfig> {
        self.locales
            .iter()
            .filter(|locale| locale.deepl_target.is_none())
            .collect()
    }

    /// Get the canonical (default source) locale.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one canonical locale.
    pub fn canonical(&self) -> &LocaleConfig {
        let canonical: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_canonical)
            .collect();

        match canonical.len() {
            0 => panic!("No canonical locale found in registry"),
            1 => canonical[0],
            _ => panic!("Multiple canonical locales found in registry"),
        }
    }
}

fn locale(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    deepl_target: Option<&'static str>,
) -> LocaleConfig {
    LocaleConfig {
        code,
        name,
        native_name,
        deepl_target,
        is_canonical: false,
    }
}

/// Default locale set. English is the canonical source.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            is_canonical: true,
            ..locale("en", "English", "English", Some("EN-US"))
        },
        locale("es", "Spanish", "Español", Some("ES")),
        locale("fr", "French", "Français", Some("FR")),
        locale("de", "German", "Deutsch", Some("DE")),
        locale("it", "Italian", "Italiano", Some("IT")),
        locale("pt", "Portuguese", "Português", Some("PT-BR")),
        locale("nl", "Dutch", "Nederlands", Some("NL")),
        locale("pl", "Polish", "Polski", Some("PL")),
        locale("ru", "Russian", "Русский", Some("RU")),
        locale("uk", "Ukrainian", "Українська", Some("UK")),
        locale("tr", "Turkish", "Türkçe", Some("TR")),
        locale("ja", "Japanese", "日本語", Some("JA")),
        locale("ko", "Korean", "한국어", Some("KO")),
        locale("zh", "Chinese (Simplified)", "简体中文", Some("ZH-HANS")),
        locale("ar", "Arabic", "العربية", Some("AR")),
        locale("hi", "Hindi", "हिन्दी", None),
        locale("th", "Thai", "ไทย", None),
        locale("vi", "Vietnamese", "Tiếng Việt", None),
    ]
}
