//! Translate one label into every configured locale.

use crate::config::LocaleSettings;
use crate::error::LocaleError;
use crate::i18n::{Locale, MetricsReport, TranslationMetrics, TranslationValidator};
use crate::router::TranslationRouter;
use crate::store::{LocaleDocument, LocaleStore};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What happened to one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocaleOutcome {
    Saved,
    Rejected,
}

pub struct Orchestrator {
    store: LocaleStore,
    router: TranslationRouter,
    locales: Vec<Locale>,
    skip_source_locale: bool,
}

impl Orchestrator {
    pub fn new(
        store: LocaleStore,
        router: TranslationRouter,
        locales: Vec<Locale>,
        skip_source_locale: bool,
    ) -> Self {
        Self {
            store,
            router,
            locales,
            skip_source_locale,
        }
    }

    /// Build from configured locale settings.
    pub fn from_settings(
        store: LocaleStore,
        router: TranslationRouter,
        settings: &LocaleSettings,
    ) -> Self {
        Self::new(
            store,
            router,
            settings.locales.clone(),
            settings.skip_source_locale,
        )
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn metrics(&self) -> &Arc<TranslationMetrics> {
        self.router.metrics()
    }

    /// Translate `label` from `source` into every configured locale.
    ///
    /// A label absent from the source, or with empty source text, is a logged
    /// no-op. Failures for one locale are logged and the remaining locales
    /// still run. Unacceptable translations are not written.
    ///
    /// # Returns
    /// The counters for this label alone
    pub async fn translate_label(&self, source: &LocaleDocument, label: &str) -> MetricsReport {
        let before = self.metrics().report();

        let Some(text) = source.get(label).filter(|t| !t.is_empty()) else {
            warn!("Non-existent or empty label provided: '{}'", label);
            return self.metrics().report().since(&before);
        };

        info!("Translating '{}' for all locales", label);

        for &locale in &self.locales {
            if self.skip_source_locale && locale == source.locale {
                debug!("Skipping source locale {}", locale);
                continue;
            }

            info!("Translating to {}", locale);

            match self.translate_into(text, source.locale, locale, label).await {
                Ok(LocaleOutcome::Saved) => self.metrics().record_saved(),
                Ok(LocaleOutcome::Rejected) => self.metrics().record_rejected(),
                Err(e) => {
                    error!("Error translating '{}' to {}: {}", label, locale, e);
                    self.metrics().record_failed();
                }
            }
        }

        let report = self.metrics().report().since(&before);
        info!(
            label,
            saved = report.saved,
            rejected = report.rejected,
            failed = report.failed,
            fallbacks = report.fallbacks,
            provider_calls = report.provider_calls,
            "Done translating label"
        );

        report
    }

    /// Translate several labels, one after another.
    pub async fn translate_labels(&self, source: &LocaleDocument, labels: &[String]) {
        for label in labels {
            self.translate_label(source, label).await;
        }
    }

    async fn translate_into(
        &self,
        text: &str,
        source_locale: Locale,
        target: Locale,
        label: &str,
    ) -> Result<LocaleOutcome, LocaleError> {
        let mut document = self.store.load(target)?;

        let translated = self.router.translate(text, source_locale, target).await?;

        let report = TranslationValidator::validate(text, translated.as_deref());
        if !report.is_acceptable() {
            debug!("Rejected translation for {}: {:?}", target, report.errors);
            return Ok(LocaleOutcome::Rejected);
        }
        if report.has_warnings() {
            warn!("Translation warnings for {}: {:?}", target, report.warnings);
        }

        if let Some(translated) = translated {
            document.translations.insert(label.to_string(), translated);
            self.store.save(&document)?;
        }

        Ok(LocaleOutcome::Saved)
    }
}
