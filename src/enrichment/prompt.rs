//! Analysis prompt loading.
//!
//! The prompt lives in an editable text file so it can be tuned without a
//! rebuild. When the file is missing or unreadable we fall back to a
//! built-in prompt rather than failing the analysis.

use std::path::Path;

/// Prompt used when no prompt file is available
pub const FALLBACK_PROMPT: &str = "Analyze these bar/pub images and describe the atmosphere, style, and vibe of this establishment.";

/// Load the analysis prompt from `path`, falling back to [`FALLBACK_PROMPT`].
pub fn load(path: Option<&Path>) -> String {
    let Some(path) = path else {
        tracing::debug!("No prompt file configured, using built-in prompt");
        return FALLBACK_PROMPT.to_string();
    };

    match std::fs::read_to_string(path) {
        Ok(contents) if !contents.trim().is_empty() => {
            tracing::info!("Loaded analysis prompt from {:?}", path);
            contents
        }
        Ok(_) => {
            tracing::warn!("Prompt file {:?} is empty, using built-in prompt", path);
            FALLBACK_PROMPT.to_string()
        }
        Err(e) => {
            tracing::warn!("Error reading prompt file {:?}: {}", path, e);
            FALLBACK_PROMPT.to_string()
        }
    }
}
