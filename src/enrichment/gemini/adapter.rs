//! Adapter layer: domain photos in, Gemini DTOs out, and back to text
//!
//! This is the ONLY place where Gemini DTO types meet domain types.

use base64::{Engine, engine::general_purpose::STANDARD};

use super::dto;
use crate::enrichment::domain::{EnrichedPhoto, EnrichmentError};

/// Answer used when the model returns no text at all
pub const EMPTY_RESPONSE_TEXT: &str = "No response generated";

/// Build a request with the prompt first, then one inline part per photo.
///
/// Photos whose format can't be recognised are skipped. Fails with
/// [`EnrichmentError::NoImages`] when nothing usable remains.
pub fn build_request(
    prompt: &str,
    photos: &[EnrichedPhoto],
) -> Result<dto::GenerateRequest, EnrichmentError> {
    let mut parts = Vec::with_capacity(photos.len() + 1);
    parts.push(dto::Part::Text {
        text: prompt.to_string(),
    });

    for (index, photo) in photos.iter().enumerate() {
        match image::guess_format(photo.data()) {
            Ok(format) => parts.push(dto::Part::InlineData {
                inline_data: dto::Blob {
                    mime_type: format.to_mime_type().to_string(),
                    data: STANDARD.encode(photo.data()),
                },
            }),
            Err(e) => tracing::warn!("Skipping photo {} for analysis: {}", index + 1, e),
        }
    }

    if parts.len() == 1 {
        return Err(EnrichmentError::NoImages);
    }

    Ok(dto::GenerateRequest {
        contents: vec![dto::Content { parts, role: None }],
    })
}

/// Concatenate the text parts of the first candidate.
pub fn response_text(response: &dto::GenerateResponse) -> String {
    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|part| match part {
                    dto::Part::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        EMPTY_RESPONSE_TEXT.to_string()
    } else {
        text
    }
}
