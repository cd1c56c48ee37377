//! Test doubles shared by unit tests.

use crate::error::ProviderError;
use crate::i18n::Locale;
use crate::provider::TranslationProvider;
use async_trait::async_trait;
use std::sync::Mutex;

/// One recorded `translate` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub text: String,
    pub target: Locale,
    pub source: Option<Locale>,
}

type Responder = Box<dyn Fn(&str, Locale) -> Result<Option<String>, ProviderError> + Send + Sync>;

/// Provider answering from a closure and recording every call.
pub(crate) struct FakeProvider {
    name: &'static str,
    respond: Responder,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvider {
    pub fn new(
        name: &'static str,
        respond: impl Fn(&str, Locale) -> Result<Option<String>, ProviderError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            respond: Box::new(respond),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with the same text.
    pub fn constant(name: &'static str, answer: &str) -> Self {
        let answer = answer.to_string();
        Self::new(name, move |_, _| Ok(Some(answer.clone())))
    }

    /// Always fails with an API error.
    pub fn failing(name: &'static str) -> Self {
        Self::new(name, move |_, _| {
            Err(ProviderError::Api {
                provider: name,
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            })
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranslationProvider for FakeProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn translate(
        &self,
        text: &str,
        target: Locale,
        source: Option<Locale>,
    ) -> Result<Option<String>, ProviderError> {
        self.calls.lock().unwrap().push(Call {
            text: text.to_string(),
            target,
            source,
        });
        (self.respond)(text, target)
    }
}
