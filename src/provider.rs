use crate::error::ProviderError;
use crate::i18n::Locale;
use async_trait::async_trait;

/// A translation service.
///
/// Implemented by [`crate::openai::OpenAiTranslator`] and
/// [`crate::deepl::DeeplTranslator`]; the router picks one per target locale.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Human-readable provider name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Translate `text` into `target`.
    ///
    /// `source` is `None` when the provider should detect the source language
    /// itself. `Ok(None)` means the service answered but produced no text.
    async fn translate(
        &self,
        text: &str,
        target: Locale,
        source: Option<Locale>,
    ) -> Result<Option<String>, ProviderError>;
}

/// Which provider a target locale is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    DeepL,
}
