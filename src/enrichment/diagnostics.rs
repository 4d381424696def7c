//! Per-photo diagnostics hook.
//!
//! Photo loading prefers partial success: a photo that can't be fetched is
//! dropped from the set, and one that can't be downscaled is kept as-is.
//! Neither case changes the result, so callers that want to know which
//! reference misbehaved plug in a [`PhotoDiagnostics`] implementation.

use super::domain::{EnrichmentError, PhotoRef};

/// Receives reports about individual photos during a photo load.
///
/// `index` is the photo's position among the venue's photo references.
pub trait PhotoDiagnostics: Send + Sync {
    /// The photo was dropped from the loaded set.
    fn photo_failed(&self, venue_id: &str, index: usize, photo: &PhotoRef, error: &EnrichmentError);

    /// The photo was kept with its original bytes because downscaling failed.
    fn photo_not_downscaled(
        &self,
        _venue_id: &str,
        _index: usize,
        _photo: &PhotoRef,
        _error: &EnrichmentError,
    ) {
    }
}

/// Default hook: reports through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl PhotoDiagnostics for TracingDiagnostics {
    fn photo_failed(&self, venue_id: &str, index: usize, photo: &PhotoRef, error: &EnrichmentError) {
        tracing::warn!(
            venue_id,
            index,
            reference = %photo.reference,
            "Dropping photo: {}",
            error
        );
    }

    fn photo_not_downscaled(
        &self,
        venue_id: &str,
        index: usize,
        photo: &PhotoRef,
        error: &EnrichmentError,
    ) {
        tracing::debug!(
            venue_id,
            index,
            reference = %photo.reference,
            "Keeping original photo bytes: {}",
            error
        );
    }
}
