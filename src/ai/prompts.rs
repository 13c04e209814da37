//! System prompts sent to the chat-completion API.

/// Instructs the model to expand a short description into a full item list.
pub const SET_EXPANSION_PROMPT: &str = "You expand short descriptions of kits or collections into exhaustive lists. Always respond with JSON in the shape {\"items\": [ ... ]}. Include only plain strings.";
