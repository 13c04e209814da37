use anyhow::Result;
use reqwest::StatusCode;
use tracing::{debug, instrument, trace, warn};

use crate::ai::common::{build_items_request, items_from_completion, upstream_detail};
use crate::ai::config::AiConfig;
use crate::ai::prompts::SET_EXPANSION_PROMPT;
use crate::error::ResolveError;

/// Chat-completion client that expands a prompt into a list of items.
///
/// Holds one `reqwest::Client` with the configured timeout so connections are
/// reused across requests.
#[derive(Clone, Debug)]
pub struct GptClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl GptClient {
    pub fn new(config: AiConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a single chat completion request and classify any failure.
    #[instrument(level = "trace", skip(self), fields(model = %self.config.model))]
    pub async fn expand_set(&self, prompt: &str) -> Result<Vec<String>, ResolveError> {
        let body = build_items_request(&self.config.model, SET_EXPANSION_PROMPT, prompt);
        let url = self.config.chat_url.as_str();

        debug!(url, "sending chat completion request");

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ResolveError::Unreachable)?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!(%status, "OpenAI API rejected credentials");
            return Err(ResolveError::CredentialRejected);
        }
        if !status.is_success() {
            let err_text = match resp.text().await {
                Ok(text) => text,
                Err(err) => {
                    warn!(%status, error = %err, "Failed to read OpenAI error body");
                    String::new()
                }
            };
            warn!(%status, "OpenAI API error");
            return Err(ResolveError::Upstream {
                status: status.as_u16(),
                detail: upstream_detail(&err_text),
            });
        }

        let raw = resp.text().await.map_err(ResolveError::Unreachable)?;
        let snippet: String = raw.chars().take(200).collect();
        debug!(snippet = %snippet, "chat response body");
        trace!(raw = %raw, "chat response");

        let items = items_from_completion(&raw)?;
        debug!(count = items.len(), "parsed items from chat response");
        Ok(items)
    }
}
