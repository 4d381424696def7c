//! Venue enrichment module - finds venues and scores them from their photos.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`places/dto.rs`, `gemini/dto.rs`) - Exact API request/response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for external APIs
//! - **Downscale / Score** - Pure photo shrinking and answer parsing
//! - **Service** - High-level orchestration of the enrichment flow
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. We can swap providers without changing business logic
//!
//! # Usage
//!
//! ```ignore
//! use enrichment::{Clients, EnrichmentService, GeminiClient, PlacesClient};
//!
//! let clients = Clients::new(
//!     PlacesClient::new("places-key"),
//!     GeminiClient::new("gemini-key", DEFAULT_MODEL),
//! );
//! let service = EnrichmentService::new(clients, DownscaleOptions::default());
//!
//! let venues = service.search("Kumpelnest").await?;
//! let loaded = service.load_photos(&venues[0].id).await?;
//! let result = service.analyze(&loaded.photos, &prompt::load(None)).await?;
//! println!("{}: {}", result.label, result.rationale);
//! ```

pub mod diagnostics;
pub mod domain;
pub mod downscale;
pub mod gemini;
pub mod places;
pub mod prompt;
pub mod score;
pub mod service;
pub mod traits;

pub use domain::{
    AnalysisResult, EnrichedPhoto, EnrichmentError, GeoPoint, PhotoRef, PolicyLabel, PolicyScore,
    VenueDetail, VenueSummary,
};
pub use downscale::DownscaleOptions;
pub use gemini::GeminiClient;
pub use places::PlacesClient;
pub use service::{Clients, EnrichmentService, LoadedPhotos, MAX_PHOTOS};
