//! Gemini API integration
//!
//! Sends venue photos plus a prompt to a Gemini vision model and returns the
//! model's free-text answer. Requires a Gemini API key.
//!
//! API docs: https://ai.google.dev/api/generate-content

pub mod dto;
mod adapter;
mod client;

pub use adapter::{build_request, response_text};
pub use client::{DEFAULT_MODEL, GeminiClient};
