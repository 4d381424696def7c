//! Gemini API Data Transfer Objects
//!
//! Request and response shapes for `models/{model}:generateContent`.
//! DO NOT use these types outside the gemini module - convert to domain types.
//!
//! Example response:
//! ```json
//! {
//!   "candidates": [{
//!     "content": {"parts": [{"text": "2 // ashtrays, smoky haze"}], "role": "model"},
//!     "finishReason": "STOP"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Request body for generateContent
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

/// A single conversation turn
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A piece of content: text or inline binary data
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
    /// Any other part kind the model may answer with
    Other(serde_json::Value),
}

/// Base64-encoded binary payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Blob {
    pub mime_type: String,
    pub data: String,
}

/// Response body for generateContent
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Missing when the candidate was blocked
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

/// Error envelope returned with non-success HTTP statuses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    /// e.g. "INVALID_ARGUMENT", "PERMISSION_DENIED"
    pub status: Option<String>,
}
