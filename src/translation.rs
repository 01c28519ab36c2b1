use crate::config::Config;
use crate::error::Error;
use serde_json::Value;
use std::future::Future;
use tracing::debug;

/// Translates a single piece of source text into a target language.
///
/// The pipeline is generic over this trait so tests can substitute a
/// deterministic implementation for the network client.
pub trait Translator {
    fn translate(
        &self,
        text: &str,
        target_code: &str,
    ) -> impl Future<Output = Result<String, Error>> + Send;
}

/// Client for the public Google Translate `translate_a/single` endpoint.
///
/// One GET per call, no batching, caching or retry. The timeout is fixed on
/// the underlying `reqwest::Client` when the translator is built.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
    source_language: String,
}

impl GoogleTranslator {
    /// Build a translator with its own HTTP client using the configured timeout.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a translator around an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.translate_api_url.clone(),
            source_language: config.source_language.clone(),
        }
    }
}

impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, Error> {
        debug!("Requesting {} translation ({} chars)", target_code, text.len());

        let transport = |source| Error::Transport {
            target: target_code.to_string(),
            source,
        };

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_language.as_str()),
                ("tl", target_code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(Error::Status {
                target: target_code.to_string(),
                status,
                body,
            });
        }

        let body = response.text().await.map_err(transport)?;
        let data: Value = serde_json::from_str(&body).map_err(|e| Error::ResponseShape {
            target: target_code.to_string(),
            detail: format!("body is not JSON: {}", e),
        })?;

        extract_translation(&data).ok_or_else(|| Error::ResponseShape {
            target: target_code.to_string(),
            detail: "expected a string at [0][0][0]".to_string(),
        })
    }
}

/// Pull the translated text out of the first segment of the response.
///
/// The endpoint answers with nested arrays: `[[["<translated>", "<source>", ...], ...], ...]`.
fn extract_translation(data: &Value) -> Option<String> {
    data.get(0)?
        .get(0)?
        .get(0)?
        .as_str()
        .map(str::to_string)
}
