use tracing::{debug, instrument};

use crate::ai::config::AiConfig;
use crate::ai::gpt::GptClient;
use crate::error::ResolveError;
use crate::presets::{find_preset, PLACEHOLDER_ITEMS};
use crate::text_utils::{normalize_items, trim_item};

/// Turns a prompt into a set of items.
///
/// The variant is picked once at startup: a configured API key selects the
/// language model, otherwise the local heuristics are used.
#[derive(Clone, Debug)]
pub enum Resolver {
    Remote(GptClient),
    Local,
}

impl Resolver {
    pub fn from_config(ai: Option<AiConfig>) -> anyhow::Result<Self> {
        match ai {
            Some(config) => Ok(Self::Remote(GptClient::new(config)?)),
            None => Ok(Self::Local),
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Local => "local",
        }
    }

    pub async fn resolve(&self, prompt: &str) -> Result<Vec<String>, ResolveError> {
        match self {
            Self::Remote(client) => client.expand_set(prompt).await,
            Self::Local => Ok(build_local_items(prompt)),
        }
    }
}

/// Build items without a language model.
///
/// A matching preset wins; otherwise the prompt is split on commas and
/// newlines; if that leaves nothing, a placeholder list is returned.
#[instrument(level = "trace")]
pub fn build_local_items(prompt: &str) -> Vec<String> {
    if let Some((keyword, items)) = find_preset(prompt) {
        debug!(keyword, "Prompt matched preset");
        return normalize_items(items);
    }

    let derived: Vec<&str> = split_candidates(prompt)
        .into_iter()
        .map(trim_item)
        .filter(|value| !value.is_empty())
        .collect();
    if !derived.is_empty() {
        debug!(count = derived.len(), "Derived items from prompt");
        return normalize_items(derived);
    }

    debug!("Falling back to placeholder items");
    normalize_items(PLACEHOLDER_ITEMS)
}

/// Split on `,` and `\n`; a prompt without delimiters is one candidate.
pub fn split_candidates(prompt: &str) -> Vec<&str> {
    let parts: Vec<&str> = prompt.split([',', '\n']).collect();
    if parts.len() > 1 {
        parts
    } else {
        vec![prompt]
    }
}
