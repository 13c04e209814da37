use std::env;
use std::fmt;
use std::time::Duration;

use crate::ai::common::OPENAI_CHAT_URL;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub chat_url: String,
    pub timeout: Duration,
}

impl AiConfig {
    /// Returns `None` when no usable API key is set, which selects the local
    /// heuristics instead of the language model.
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k.trim().to_string(),
            _ => return None,
        };
        Some(Self {
            api_key,
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            chat_url: env::var("OPENAI_API_URL").unwrap_or_else(|_| OPENAI_CHAT_URL.to_string()),
            timeout: timeout_from_env(),
        })
    }

    pub fn new(api_key: impl Into<String>, chat_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            chat_url: chat_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("chat_url", &self.chat_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn timeout_from_env() -> Duration {
    let secs = match env::var("OPENAI_TIMEOUT_SECS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                tracing::warn!(value = %raw, "Invalid OPENAI_TIMEOUT_SECS, using default");
                DEFAULT_TIMEOUT_SECS
            }
        },
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}
