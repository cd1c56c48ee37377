//! Provider selection with a single fallback.
//!
//! Targets in the OpenAI set go to OpenAI. Everything else goes to DeepL; if
//! DeepL's answer is not acceptable, OpenAI is asked once more without a
//! source locale and its answer is returned as-is.

use crate::error::ProviderError;
use crate::i18n::{Locale, TranslationMetrics, TranslationValidator};
use crate::provider::{ProviderKind, TranslationProvider};
use std::sync::Arc;
use tracing::{debug, info};

pub struct TranslationRouter {
    openai: Arc<dyn TranslationProvider>,
    deepl: Arc<dyn TranslationProvider>,
    openai_locales: Vec<Locale>,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationRouter {
    pub fn new(
        openai: Arc<dyn TranslationProvider>,
        deepl: Arc<dyn TranslationProvider>,
        openai_locales: Vec<Locale>,
    ) -> Self {
        Self {
            openai,
            deepl,
            openai_locales,
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    /// Share an existing metrics instance instead of a private one.
    pub fn with_metrics(mut self, metrics: Arc<TranslationMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<TranslationMetrics> {
        &self.metrics
    }

    /// Provider a target locale is sent to first.
    pub fn route(&self, target: Locale) -> ProviderKind {
        if self.openai_locales.contains(&target) {
            ProviderKind::OpenAi
        } else {
            ProviderKind::DeepL
        }
    }

    fn provider(&self, kind: ProviderKind) -> &dyn TranslationProvider {
        match kind {
            ProviderKind::OpenAi => self.openai.as_ref(),
            ProviderKind::DeepL => self.deepl.as_ref(),
        }
    }

    /// Translate `text` from `source` into `target`.
    ///
    /// The result is not guaranteed to be acceptable; callers validate it.
    /// Provider errors are returned without attempting the fallback.
    pub async fn translate(
        &self,
        text: &str,
        source: Locale,
        target: Locale,
    ) -> Result<Option<String>, ProviderError> {
        let kind = self.route(target);
        let provider = self.provider(kind);
        debug!("Routing {} to {}", target, provider.name());

        self.metrics.record_provider_call();
        let translated = provider.translate(text, target, Some(source)).await?;

        if kind == ProviderKind::DeepL
            && !TranslationValidator::is_acceptable(text, translated.as_deref())
        {
            info!(
                "{} result for {} rejected, falling back to {}",
                provider.name(),
                target,
                self.openai.name()
            );
            self.metrics.record_fallback();
            self.metrics.record_provider_call();
            return self.openai.translate(text, target, None).await;
        }

        Ok(translated)
    }
}
