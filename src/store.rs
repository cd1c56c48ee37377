//! Per-locale JSON dictionaries on disk.
//!
//! Each locale lives in `<dir>/<code>.json`:
//!
//! ```json
//! {
//! 	"locale": "fr",
//! 	"translations": {
//! 		"greeting": "Bonjour {$name}"
//! 	}
//! }
//! ```
//!
//! Files are read whole and rewritten whole. Writes are not atomic.

use crate::error::StoreError;
use crate::i18n::Locale;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The translations of one locale.
///
/// Labels keep the order they had on disk; new labels are appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDocument {
    pub locale: Locale,
    pub translations: IndexMap<String, String>,
}

impl LocaleDocument {
    /// Empty document for a locale.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            translations: IndexMap::new(),
        }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.translations.get(label).map(String::as_str)
    }
}

/// On-disk schema. Unknown fields and non-string translations are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLocaleDocument {
    locale: String,
    translations: IndexMap<String, String>,
}

#[derive(Debug, Serialize)]
struct SerializedLocaleDocument<'a> {
    locale: &'a str,
    translations: &'a IndexMap<String, String>,
}

/// Directory of locale documents.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    dir: PathBuf,
}

impl LocaleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a locale's document: `<dir>/<code>.json`.
    pub fn path_for(&self, locale: Locale) -> PathBuf {
        self.dir.join(format!("{}.json", locale.code()))
    }

    /// Read and validate a locale's document.
    pub fn load(&self, locale: Locale) -> Result<LocaleDocument, StoreError> {
        let path = self.path_for(locale);
        debug!("Loading {}", path.display());

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let raw: RawLocaleDocument =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;

        if raw.locale != locale.code() {
            return Err(StoreError::LocaleMismatch {
                path,
                expected: locale,
                found: raw.locale,
            });
        }

        Ok(LocaleDocument {
            locale,
            translations: raw.translations,
        })
    }

    /// Overwrite a locale's document, tab-indented with a trailing newline.
    pub fn save(&self, document: &LocaleDocument) -> Result<(), StoreError> {
        let path = self.path_for(document.locale);
        debug!("Saving {}", path.display());

        let serialized = SerializedLocaleDocument {
            locale: document.locale.code(),
            translations: &document.translations,
        };

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        serialized
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Write {
                path: path.clone(),
                source: e.into(),
            })?;
        buf.push(b'\n');

        std::fs::write(&path, buf).map_err(|source| StoreError::Write { path, source })
    }
}
