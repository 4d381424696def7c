//! Enrichment service - the stateless venue enrichment pipeline
//!
//! This is the high-level API over the external services:
//! 1. Search venues by text
//! 2. Fetch a venue's detail record
//! 3. Fetch up to [`MAX_PHOTOS`] photos and downscale them
//! 4. Analyze the photos and parse a policy score from the answer
//!
//! Clients are injected as trait objects so the same service runs against
//! the real Places/Gemini clients or test mocks.

use std::sync::Arc;

use futures::future::join_all;

use crate::enrichment::{
    diagnostics::{PhotoDiagnostics, TracingDiagnostics},
    domain::{AnalysisResult, EnrichedPhoto, EnrichmentError, PhotoRef, VenueDetail, VenueSummary},
    downscale::{DownscaleOptions, Downscaled, downscale},
    gemini::GeminiClient,
    places::PlacesClient,
    score,
    traits::{AnalysisApi, PhotoFetchApi, VenueDetailApi, VenueSearchApi},
};

/// Maximum number of photos loaded per venue
pub const MAX_PHOTOS: usize = 5;

/// The external services the pipeline talks to
#[derive(Clone)]
pub struct Clients {
    pub search: Arc<dyn VenueSearchApi>,
    pub detail: Arc<dyn VenueDetailApi>,
    pub photos: Arc<dyn PhotoFetchApi>,
    pub analysis: Arc<dyn AnalysisApi>,
}

impl Clients {
    /// Wire up the production clients: Places for venues and photos,
    /// Gemini for analysis.
    pub fn new(places: PlacesClient, gemini: GeminiClient) -> Self {
        let places = Arc::new(places);
        Self {
            search: places.clone(),
            detail: places.clone(),
            photos: places,
            analysis: Arc::new(gemini),
        }
    }
}

/// A venue's detail record with its loaded photos
#[derive(Debug, Clone)]
pub struct LoadedPhotos {
    pub detail: VenueDetail,
    /// Downscaled photos in photo-reference order, failed ones omitted
    pub photos: Vec<EnrichedPhoto>,
}

/// Service for enriching venues from external sources
pub struct EnrichmentService {
    clients: Clients,
    downscale: DownscaleOptions,
    diagnostics: Arc<dyn PhotoDiagnostics>,
}

impl EnrichmentService {
    /// Create a new service over the given clients
    pub fn new(clients: Clients, downscale: DownscaleOptions) -> Self {
        Self {
            clients,
            downscale,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Replace the per-photo diagnostics hook
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn PhotoDiagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn downscale_options(&self) -> DownscaleOptions {
        self.downscale
    }

    /// Search venues by free text
    pub async fn search(&self, query: &str) -> Result<Vec<VenueSummary>, EnrichmentError> {
        self.clients.search.search(query).await
    }

    /// Fetch a venue's detail record
    pub async fn detail(&self, venue_id: &str) -> Result<VenueDetail, EnrichmentError> {
        self.clients.detail.get_detail(venue_id).await
    }

    /// Load and downscale a venue's leading photos.
    ///
    /// Fails only when the detail lookup fails. Individual photos that can't
    /// be fetched are reported to the diagnostics hook and left out; the
    /// rest keep their photo-reference order.
    pub async fn load_photos(&self, venue_id: &str) -> Result<LoadedPhotos, EnrichmentError> {
        let detail = self.detail(venue_id).await?;
        let refs = detail.leading_photos(MAX_PHOTOS);

        // Fetches run concurrently; join_all yields results in input order
        let loads = refs
            .iter()
            .enumerate()
            .map(|(index, photo)| self.load_photo(venue_id, index, photo));
        let photos: Vec<EnrichedPhoto> = join_all(loads).await.into_iter().flatten().collect();

        tracing::info!(
            "Loaded {}/{} photos for {}",
            photos.len(),
            refs.len(),
            detail.summary.name
        );

        Ok(LoadedPhotos { detail, photos })
    }

    /// Analyze photos and parse the answer into a score.
    pub async fn analyze(
        &self,
        photos: &[EnrichedPhoto],
        prompt: &str,
    ) -> Result<AnalysisResult, EnrichmentError> {
        if photos.is_empty() {
            return Err(EnrichmentError::NoImages);
        }

        let text = self.clients.analysis.analyze(photos, prompt).await?;
        let result = score::parse_result(&text);

        tracing::info!("Analysis scored {} ({})", result.score, result.label);
        Ok(result)
    }

    async fn load_photo(
        &self,
        venue_id: &str,
        index: usize,
        photo: &PhotoRef,
    ) -> Option<EnrichedPhoto> {
        let raw = match self.clients.photos.fetch_photo(photo).await {
            Ok(raw) => raw,
            Err(e) => {
                self.diagnostics.photo_failed(venue_id, index, photo, &e);
                return None;
            }
        };

        // Decoding and resizing is CPU-bound; keep it off the async workers
        let options = self.downscale;
        let downscaled = match tokio::task::spawn_blocking(move || downscale(raw, options)).await
        {
            Ok(downscaled) => downscaled,
            Err(e) => {
                let error = EnrichmentError::Decode(format!("downscale task failed: {}", e));
                self.diagnostics.photo_failed(venue_id, index, photo, &error);
                return None;
            }
        };

        if let Downscaled::Fallback { ref error, .. } = downscaled {
            self.diagnostics
                .photo_not_downscaled(venue_id, index, photo, error);
        }

        Some(EnrichedPhoto::new(downscaled.into_data()))
    }
}
