//! Places HTTP client
//!
//! Handles communication with the Google Places web service.
//! See: https://developers.google.com/maps/documentation/places/web-service
//!
//! Each call is a single attempt. Retry policy belongs to callers.
//!
//! ## Search scope
//! Searches are pinned to central Berlin and the bar/night-club categories.
//! The user's query is suffixed with [`QUERY_SUFFIX`] so that plain venue
//! names still resolve to bars.

use serde::de::DeserializeOwned;

use super::{adapter, dto};
use crate::enrichment::domain::{
    EnrichmentError, PhotoRef, VenueDetail, VenueSummary, normalize_query,
};

/// Search centre as "lat,lng"
pub const SEARCH_CENTER: &str = "52.5200,13.4050";
/// Search radius in metres
pub const SEARCH_RADIUS_M: u32 = 15_000;
/// Category filter for text search
pub const CATEGORY_FILTER: &str = "bar|night_club";
/// Appended to every user query
pub const QUERY_SUFFIX: &str = "bar pub Berlin";
/// Fields requested from the details endpoint
pub const DETAIL_FIELDS: &str =
    "place_id,name,formatted_address,rating,price_level,photos,opening_hours,geometry";
/// Default width bound for photo downloads
pub const DEFAULT_PHOTO_MAX_WIDTH: u32 = 800;

/// Places API client
pub struct PlacesClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    photo_max_width: u32,
}

impl PlacesClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            api_key: api_key.into(),
            http_client,
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            photo_max_width: DEFAULT_PHOTO_MAX_WIDTH,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            photo_max_width: DEFAULT_PHOTO_MAX_WIDTH,
        }
    }

    /// Set the width bound sent with photo requests
    pub fn with_photo_max_width(mut self, max_width: u32) -> Self {
        self.photo_max_width = max_width.max(1);
        self
    }

    /// Search for venues matching `query`, in upstream ranking order
    pub async fn search(&self, query: &str) -> Result<Vec<VenueSummary>, EnrichmentError> {
        let query = normalize_query(query)?;
        tracing::debug!("Searching places for {:?}", query);

        let response: dto::SearchResponse = self.get_json(&self.search_url(query)).await?;
        let venues = adapter::to_venues(response)?;

        tracing::debug!("Search for {:?} returned {} venues", query, venues.len());
        Ok(venues)
    }

    /// Fetch the detail record for a venue
    pub async fn get_detail(&self, venue_id: &str) -> Result<VenueDetail, EnrichmentError> {
        tracing::debug!("Fetching details for place {}", venue_id);
        let response: dto::DetailsResponse = self.get_json(&self.detail_url(venue_id)).await?;
        adapter::to_detail(response)
    }

    /// Download a single photo's raw bytes
    pub async fn fetch_photo(&self, photo: &PhotoRef) -> Result<Vec<u8>, EnrichmentError> {
        // The photo endpoint answers with a redirect to the image host,
        // which reqwest follows by default.
        let response = self
            .http_client
            .get(self.photo_url(&photo.reference))
            .send()
            .await
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::http(status));
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?
            .to_vec();

        if data.is_empty() {
            return Err(EnrichmentError::Decode("empty photo payload".to_string()));
        }

        Ok(data)
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/place/textsearch/json?query={}&location={}&radius={}&type={}&key={}",
            self.base_url,
            urlencoding::encode(&format!("{} {}", query, QUERY_SUFFIX)),
            SEARCH_CENTER,
            SEARCH_RADIUS_M,
            urlencoding::encode(CATEGORY_FILTER),
            urlencoding::encode(&self.api_key)
        )
    }

    fn detail_url(&self, venue_id: &str) -> String {
        format!(
            "{}/place/details/json?place_id={}&fields={}&key={}",
            self.base_url,
            urlencoding::encode(venue_id),
            DETAIL_FIELDS,
            urlencoding::encode(&self.api_key)
        )
    }

    fn photo_url(&self, reference: &str) -> String {
        format!(
            "{}/place/photo?photo_reference={}&maxwidth={}&key={}",
            self.base_url,
            urlencoding::encode(reference),
            self.photo_max_width,
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send a GET request and parse the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, EnrichmentError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::http(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }
}
