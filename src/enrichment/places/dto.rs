//! Places API Data Transfer Objects
//!
//! These types match EXACTLY what the Places web service returns.
//! DO NOT use these types outside the places module - convert to domain types.
//!
//! API Reference: https://developers.google.com/maps/documentation/places/web-service/search-text
//!
//! Example text search response:
//! ```json
//! {
//!   "status": "OK",
//!   "results": [{
//!     "place_id": "ChIJ...",
//!     "name": "Kumpelnest 3000",
//!     "vicinity": "Lützowstraße 23, Berlin",
//!     "rating": 4.1,
//!     "price_level": 2,
//!     "types": ["bar", "point_of_interest"],
//!     "geometry": {"location": {"lat": 52.50, "lng": 13.36}},
//!     "opening_hours": {"open_now": true}
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level text search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// "OK" on success, otherwise e.g. "ZERO_RESULTS", "REQUEST_DENIED"
    pub status: String,
    #[serde(default)]
    pub results: Vec<Place>,
    /// Token for the next results page (unused, single page only)
    pub next_page_token: Option<String>,
    /// Human-readable detail when status != "OK"
    pub error_message: Option<String>,
}

/// A single search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    pub geometry: Geometry,
    pub opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Geometry {
    pub location: Location,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
}

/// Top-level place details response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailsResponse {
    pub status: String,
    /// Absent when status != "OK"
    pub result: Option<PlaceDetails>,
    pub error_message: Option<String>,
}

/// Place details, limited to the requested field mask
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaceDetails {
    pub place_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub opening_hours: Option<OpeningHours>,
    pub geometry: Geometry,
}

/// Photo metadata attached to a place
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Photo {
    pub photo_reference: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
