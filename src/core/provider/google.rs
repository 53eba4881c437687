use reqwest::blocking::Client;
use serde_json::Value;

use super::{ProviderError, TranslateProvider};

/// Public Google Translate endpoint used by the `gtx` web client.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate over its public web endpoint.
pub struct GoogleTranslate {
    endpoint: String,
    client: Client,
}

impl GoogleTranslate {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

impl Default for GoogleTranslate {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl TranslateProvider for GoogleTranslate {
    fn translate(
        &self,
        source_language: &str,
        target_language: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        let source = language_code(source_language);
        let target = language_code(target_language);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json()?;
        parse_response(&body)
    }
}

/// Locale codes like `pt_BR` are spelled `pt-BR` by the service.
fn language_code(language: &str) -> String {
    language.replace('_', "-")
}

/// Join the translated chunks of a `translate_a/single` response.
///
/// The body looks like `[[["Bonjour", "Hello", null, null, 10], ...], null, "en"]`.
fn parse_response(body: &Value) -> Result<String, ProviderError> {
    let chunks = body.get(0).and_then(Value::as_array).ok_or_else(|| {
        ProviderError::UnexpectedResponse(format!("missing translation chunks in {}", body))
    })?;

    Ok(chunks
        .iter()
        .filter_map(|chunk| chunk.get(0).and_then(Value::as_str))
        .collect())
}
