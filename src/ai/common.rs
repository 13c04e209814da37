use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::error::ResolveError;
use crate::messages;
use crate::text_utils::normalize_values;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Build a chat completion body that asks for a JSON object reply.
pub fn build_items_request(model: &str, system_prompt: &str, user_text: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_text }
        ],
        "response_format": { "type": "json_object" }
    })
}

/// Pull the item list out of a successful chat completion body.
///
/// Expects `choices[0].message.content` to hold a JSON document with a
/// non-empty `items` array. The array is normalized before returning.
pub fn items_from_completion(raw: &str) -> Result<Vec<String>, ResolveError> {
    let envelope: Value = serde_json::from_str(raw).map_err(|err| {
        ResolveError::Unexpected(format!("Language model response could not be decoded: {err}"))
    })?;

    let content = match envelope.pointer("/choices/0/message/content") {
        None | Some(Value::Null) => return Err(ResolveError::EmptyResponse),
        Some(Value::String(s)) if s.is_empty() => return Err(ResolveError::EmptyResponse),
        Some(Value::String(s)) => s,
        Some(other) => {
            debug!(content = %other, "chat content is not a string");
            return Err(ResolveError::InvalidJson(None));
        }
    };
    trace!(content = %content, "chat content");

    let parsed: Value =
        serde_json::from_str(content).map_err(|err| ResolveError::InvalidJson(Some(err)))?;

    let items = parsed
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(ResolveError::MissingItems)?;

    Ok(normalize_values(items))
}

/// Best-effort error detail from a failed upstream response body.
///
/// Looks at `error` (string, or object with `message`) and then `message`.
/// Falls back to the raw body text when it is not JSON.
pub fn upstream_detail(body: &str) -> String {
    let detail = match serde_json::from_str::<Value>(body) {
        Ok(json) => detail_from_json(&json),
        Err(_) => Some(body.trim().to_string()).filter(|text| !text.is_empty()),
    };
    detail.unwrap_or_else(|| messages::UNKNOWN_UPSTREAM_ERROR.to_string())
}

fn detail_from_json(json: &Value) -> Option<String> {
    let field_text = |value: &Value| match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => Some(value.to_string()),
        },
        other => Some(other.to_string()),
    };

    json.get("error")
        .and_then(field_text)
        .or_else(|| json.get("message").and_then(field_text))
}
