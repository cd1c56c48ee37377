use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::i18n::Locale;
use crate::provider::TranslationProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PROVIDER: &str = "OpenAI";

/// Completion budget for regular models; labels are short.
const MAX_COMPLETION_TOKENS: u32 = 1000;

/// Reasoning models spend tokens before answering.
const REASONING_MAX_COMPLETION_TOKENS: u32 = 4000;

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Build the system prompt for translating a label.
///
/// Without a source locale the model is asked to detect the source language.
fn build_translation_system_prompt(target: Locale, source: Option<Locale>) -> String {
    let task = match source {
        Some(source) => format!(
            "Translate the text provided by the user from {} into {}.",
            source.name(),
            target.name()
        ),
        None => format!(
            "Detect the language of the text provided by the user and translate it into {}.",
            target.name()
        ),
    };

    format!(
        r#"You are a professional translator for software user interface labels. {}

## Rules
- Preserve every placeholder of the form {{$name}} exactly as written and in the same order.
- Never translate, rename, add or remove placeholders.
- Keep punctuation and capitalization style close to the original.
- Keep the translation about as short as the original.
- Reply with the translated text only, without quotes, notes or explanations."#,
        task
    )
}

/// Provider A: a chat-completion model used as a general-purpose translator.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
    temperature: f32,
}

impl OpenAiTranslator {
    pub fn new(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.openai_api_key.clone(),
            api_url: config.openai_api_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
        }
    }

    fn build_request(&self, text: &str, target: Locale, source: Option<Locale>) -> TranslationRequest {
        // Reasoning models don't support temperature - use reasoning_effort instead
        let is_reasoning = is_reasoning_model(&self.model);

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(target, source),
                },
                Message {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            max_completion_tokens: if is_reasoning {
                REASONING_MAX_COMPLETION_TOKENS
            } else {
                MAX_COMPLETION_TOKENS
            },
            temperature: if is_reasoning {
                None
            } else {
                Some(self.temperature)
            },
            reasoning_effort: if is_reasoning {
                Some("low".to_string())
            } else {
                None
            },
        }
    }
}

#[async_trait]
impl TranslationProvider for OpenAiTranslator {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn translate(
        &self,
        text: &str,
        target: Locale,
        source: Option<Locale>,
    ) -> Result<Option<String>, ProviderError> {
        let request = self.build_request(text, target, source);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(ProviderError::Api {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let chat_response: ChatResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Response {
                    provider: PROVIDER,
                    source,
                })?;

        let translated = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|content| content.trim().to_string());

        if translated.is_none() {
            debug!("OpenAI returned no content for {}", target);
        }

        Ok(translated)
    }
}
