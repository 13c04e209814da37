use thiserror::Error;

use crate::messages;

/// Everything that can go wrong while resolving a prompt through the
/// language model. The `Display` text is what API callers see.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{}", messages::CREDENTIAL_REJECTED)]
    CredentialRejected,

    #[error("Language model request failed with status {status}: {detail}")]
    Upstream { status: u16, detail: String },

    #[error("{}", messages::SERVICE_UNREACHABLE)]
    Unreachable(#[source] reqwest::Error),

    #[error("{}", messages::EMPTY_RESPONSE)]
    EmptyResponse,

    #[error("{}", messages::INVALID_JSON)]
    InvalidJson(#[source] Option<serde_json::Error>),

    #[error("{}", messages::MISSING_ITEMS)]
    MissingItems,

    #[error("{}", unexpected_message(.0))]
    Unexpected(String),
}

impl ResolveError {
    /// Short machine-friendly tag, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CredentialRejected => "credential_rejected",
            Self::Upstream { .. } => "upstream_error",
            Self::Unreachable(_) => "service_unreachable",
            Self::EmptyResponse => "empty_response",
            Self::InvalidJson(_) => "invalid_json",
            Self::MissingItems => "missing_items",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

fn unexpected_message(message: &str) -> &str {
    if message.trim().is_empty() {
        messages::GENERATION_FAILED
    } else {
        message
    }
}
