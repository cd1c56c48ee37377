use crate::deepl;
use crate::i18n::{parse_locale_list, Locale, LocaleRegistry};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Which locales a run processes and how they are routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    /// Target locales, processed in this order
    pub locales: Vec<Locale>,

    /// Targets translated by OpenAI; every other target goes to DeepL first
    pub openai_locales: Vec<Locale>,

    /// Skip translating a label into its own source locale
    pub skip_source_locale: bool,
}

impl LocaleSettings {
    /// Build settings, refusing targets DeepL cannot serve unless routed to OpenAI.
    pub fn new(
        locales: Vec<Locale>,
        openai_locales: Vec<Locale>,
        skip_source_locale: bool,
    ) -> Result<Self> {
        let unroutable: Vec<_> = locales
            .iter()
            .filter(|l| !l.deepl_supported() && !openai_locales.contains(*l))
            .map(|l| l.code())
            .collect();
        if !unroutable.is_empty() {
            bail!(
                "DeepL does not support {}; add them to OPENAI_LOCALES",
                unroutable.join(", ")
            );
        }

        Ok(Self {
            locales,
            openai_locales,
            skip_source_locale,
        })
    }

    /// All registry locales, with DeepL-unsupported ones routed to OpenAI.
    pub fn registry_defaults() -> Self {
        Self {
            locales: Locale::all(),
            openai_locales: default_openai_locales(),
            skip_source_locale: true,
        }
    }
}

fn default_openai_locales() -> Vec<Locale> {
    LocaleRegistry::get()
        .list_deepl_unsupported()
        .iter()
        .filter_map(|config| Locale::from_code(config.code).ok())
        .collect()
}

/// Settings needed by every command.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `<code>.json` locale documents
    pub locales_dir: PathBuf,

    /// Locale labels are translated from
    pub source_locale: Locale,

    pub locale_settings: LocaleSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = LocaleSettings::registry_defaults();

        let source_locale = match lookup("SOURCE_LOCALE") {
            Some(code) => Locale::from_code(code.trim()).context("Invalid SOURCE_LOCALE")?,
            None => Locale::canonical(),
        };

        let locales = match lookup("LOCALES") {
            Some(value) => parse_locale_list(&value).context("Invalid LOCALES")?,
            None => defaults.locales,
        };
        if locales.is_empty() {
            bail!("LOCALES must name at least one locale");
        }

        let openai_locales = match lookup("OPENAI_LOCALES") {
            Some(value) => parse_locale_list(&value).context("Invalid OPENAI_LOCALES")?,
            None => defaults.openai_locales,
        };

        let skip_source_locale = match lookup("SKIP_SOURCE_LOCALE") {
            Some(value) => parse_bool(&value).context("Invalid SKIP_SOURCE_LOCALE")?,
            None => defaults.skip_source_locale,
        };

        Ok(Self {
            locales_dir: lookup("LOCALES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("locales")),
            source_locale,
            locale_settings: LocaleSettings::new(locales, openai_locales, skip_source_locale)?,
        })
    }
}

/// Settings for the translation providers, only needed when translating.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    // OpenAI
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_url: String,
    pub openai_temperature: f32,

    // DeepL
    pub deepl_api_key: String,
    pub deepl_api_url: String,

    // HTTP
    pub request_timeout_secs: u64,
}

impl ProviderConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let deepl_api_key = lookup("DEEPL_API_KEY").context("DEEPL_API_KEY not set")?;
        let deepl_api_url = lookup("DEEPL_API_URL")
            .unwrap_or_else(|| deepl::default_api_url(&deepl_api_key).to_string());

        Ok(Self {
            openai_api_key: lookup("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string()),
            openai_api_url: lookup("OPENAI_API_URL")
                .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string()),
            openai_temperature: lookup("OPENAI_TEMPERATURE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.3),
            deepl_api_key,
            deepl_api_url,
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
