//! User-facing strings returned by the API.
//!
//! Keep them here so the HTTP layer and the error type agree on wording.

pub const PROMPT_REQUIRED: &str = "A prompt describing the set is required.";

pub const CREDENTIAL_REJECTED: &str =
    "The language model rejected the request. Check your API key and permissions.";
pub const SERVICE_UNREACHABLE: &str =
    "Could not reach the language model service. Check your network connection and try again.";
pub const EMPTY_RESPONSE: &str = "Language model returned an empty response.";
pub const INVALID_JSON: &str = "Language model response was not valid JSON.";
pub const MISSING_ITEMS: &str = "Language model response did not include any items.";
pub const GENERATION_FAILED: &str = "Failed to generate set items.";
pub const UNKNOWN_UPSTREAM_ERROR: &str = "unknown error";
