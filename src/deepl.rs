use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::i18n::Locale;
use crate::provider::TranslationProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PROVIDER: &str = "DeepL";

/// DeepL `/v2/translate` request
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: Vec<&'a str>,
    target_lang: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Provider B: the DeepL translation API.
pub struct DeeplTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeeplTranslator {
    pub fn new(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            api_key: config.deepl_api_key.clone(),
            api_url: config.deepl_api_url.clone(),
        }
    }
}

#[async_trait]
impl TranslationProvider for DeeplTranslator {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn translate(
        &self,
        text: &str,
        target: Locale,
        source: Option<Locale>,
    ) -> Result<Option<String>, ProviderError> {
        let target_lang =
            target
                .config()
                .deepl_target
                .ok_or(ProviderError::UnsupportedLocale {
                    provider: PROVIDER,
                    locale: target,
                })?;

        // Sources DeepL doesn't know are left to its auto-detection
        let request = TranslateRequest {
            text: vec![text],
            target_lang,
            source_lang: source.and_then(|s| s.config().deepl_source()),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
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

        let translate_response: TranslateResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::Response {
                    provider: PROVIDER,
                    source,
                })?;

        let translated = translate_response
            .translations
            .into_iter()
            .next()
            .map(|t| t.text);

        if translated.is_none() {
            debug!("DeepL returned no translations for {}", target);
        }

        Ok(translated)
    }
}

/// Default endpoint for a DeepL key. Free-plan keys end in `:fx`.
pub fn default_api_url(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        "https://api-free.deepl.com/v2/translate"
    } else {
        "https://api.deepl.com/v2/translate"
    }
}
