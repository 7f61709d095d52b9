/*
[INPUT]:  API response payloads
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;

/// Error body returned by the API on non-success statuses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Pull `message` out of a raw body; non-JSON bodies yield `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }
}

/// Successful create response
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTask {
    pub status: u16,
    /// Parsed body when the server returned JSON
    pub body: Option<serde_json::Value>,
}
