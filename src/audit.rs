//! Read-only consistency report of locale files against the source file.

use crate::i18n::{Locale, TranslationValidator};
use crate::store::{LocaleDocument, LocaleStore};
use serde::Serialize;
use tracing::error;

/// Problems found in one locale's document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleAudit {
    pub locale: Locale,

    /// Source labels absent from this locale
    pub missing: Vec<String>,

    /// Labels whose placeholders differ from the source
    pub mismatched: Vec<String>,

    /// Labels whose text is identical to the source text
    pub untranslated: Vec<String>,
}

impl LocaleAudit {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty() && self.untranslated.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.mismatched.len() + self.untranslated.len()
    }
}

/// Compare one target document against the source document.
///
/// Labels only present in the target are ignored.
pub fn audit_locale(source: &LocaleDocument, target: &LocaleDocument) -> LocaleAudit {
    let mut audit = LocaleAudit {
        locale: target.locale,
        missing: Vec::new(),
        mismatched: Vec::new(),
        untranslated: Vec::new(),
    };

    for (label, source_text) in &source.translations {
        match target.get(label) {
            None => audit.missing.push(label.clone()),
            Some(text) => {
                if TranslationValidator::placeholders(source_text)
                    != TranslationValidator::placeholders(text)
                {
                    audit.mismatched.push(label.clone());
                }
                if text == source_text.as_str() {
                    audit.untranslated.push(label.clone());
                }
            }
        }
    }

    audit
}

/// Audit every locale in `locales` except the source's own.
///
/// Locales whose file cannot be loaded are logged and left out of the result.
pub fn audit_locales(
    store: &LocaleStore,
    source: &LocaleDocument,
    locales: &[Locale],
) -> Vec<LocaleAudit> {
    locales
        .iter()
        .filter(|&&locale| locale != source.locale)
        .filter_map(|&locale| match store.load(locale) {
            Ok(target) => Some(audit_locale(source, &target)),
            Err(e) => {
                error!("Skipping {} in audit: {}", locale, e);
                None
            }
        })
        .collect()
}
