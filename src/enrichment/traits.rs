//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use smokescreen::enrichment::traits::VenueSearchApi;
//!
//! // In production code:
//! async fn first_hit(client: &dyn VenueSearchApi) -> Option<VenueSummary> {
//!     client.search("Kumpelnest").await.ok()?.into_iter().next()
//! }
//!
//! // In tests:
//! struct MockSearch { ... }
//! impl VenueSearchApi for MockSearch { ... }
//! ```

use async_trait::async_trait;

use super::domain::{EnrichedPhoto, EnrichmentError, PhotoRef, VenueDetail, VenueSummary};

/// Trait for venue text search.
///
/// Implementations make a single attempt per call and return venues in
/// upstream order.
#[async_trait]
pub trait VenueSearchApi: Send + Sync {
    /// Search venues by free text. Blank queries fail with `InvalidInput`.
    async fn search(&self, query: &str) -> Result<Vec<VenueSummary>, EnrichmentError>;
}

/// Trait for venue detail lookup.
#[async_trait]
pub trait VenueDetailApi: Send + Sync {
    /// Fetch the detail record, including photo references.
    async fn get_detail(&self, venue_id: &str) -> Result<VenueDetail, EnrichmentError>;
}

/// Trait for photo download.
#[async_trait]
pub trait PhotoFetchApi: Send + Sync {
    /// Fetch the raw bytes of one photo.
    async fn fetch_photo(&self, photo: &PhotoRef) -> Result<Vec<u8>, EnrichmentError>;
}

/// Trait for image analysis.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Analyze an ordered set of images with a prompt, returning free text.
    async fn analyze(
        &self,
        photos: &[EnrichedPhoto],
        prompt: &str,
    ) -> Result<String, EnrichmentError>;
}

// Implement traits for real clients

#[async_trait]
impl VenueSearchApi for super::places::PlacesClient {
    async fn search(&self, query: &str) -> Result<Vec<VenueSummary>, EnrichmentError> {
        self.search(query).await
    }
}

#[async_trait]
impl VenueDetailApi for super::places::PlacesClient {
    async fn get_detail(&self, venue_id: &str) -> Result<VenueDetail, EnrichmentError> {
        self.get_detail(venue_id).await
    }
}

#[async_trait]
impl PhotoFetchApi for super::places::PlacesClient {
    async fn fetch_photo(&self, photo: &PhotoRef) -> Result<Vec<u8>, EnrichmentError> {
        self.fetch_photo(photo).await
    }
}

#[async_trait]
impl AnalysisApi for super::gemini::GeminiClient {
    async fn analyze(
        &self,
        photos: &[EnrichedPhoto],
        prompt: &str,
    ) -> Result<String, EnrichmentError> {
        self.analyze(photos, prompt).await
    }
}
