//! Internal domain models for venue search and enrichment.
//!
//! These types are OUR types - they don't change when the Places or Gemini
//! APIs change. All external API responses get converted into these types
//! via adapters.

use std::fmt;

/// Geographic coordinate of a venue
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A venue as returned by a search, in upstream ranking order
#[derive(Debug, Clone, PartialEq)]
pub struct VenueSummary {
    /// Opaque, unique venue identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short address (neighbourhood / street)
    pub address: Option<String>,
    /// Average rating (0.0 to 5.0)
    pub rating: Option<f64>,
    /// Price tier, 0 = free .. 4 = very expensive
    pub price_tier: Option<u8>,
    /// Whether the venue reports being open right now
    pub open_now: Option<bool>,
    pub location: GeoPoint,
}

/// Reference to a retrievable photo, not the image itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    /// Opaque photo token
    pub reference: String,
    /// Declared width in pixels
    pub width: u32,
    /// Declared height in pixels
    pub height: u32,
}

/// Full record for a single venue
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDetail {
    pub summary: VenueSummary,
    /// Full postal address
    pub formatted_address: Option<String>,
    /// Photo references in upstream order
    pub photos: Vec<PhotoRef>,
}

impl VenueDetail {
    /// The first `limit` photo references, in upstream order.
    pub fn leading_photos(&self, limit: usize) -> &[PhotoRef] {
        &self.photos[..self.photos.len().min(limit)]
    }
}

/// A fetched, downscaled photo payload.
///
/// Photos have no identity beyond their position in the loaded sequence.
#[derive(Clone, PartialEq, Eq)]
pub struct EnrichedPhoto {
    data: Vec<u8>,
}

impl EnrichedPhoto {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Compressed image bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

// Payloads are binary; print the size instead of the bytes.
impl fmt::Debug for EnrichedPhoto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrichedPhoto")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Smoking policy score, always within `0..=3`.
///
/// 0 is the most favourable outcome (no smoking), 3 the least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PolicyScore(u8);

impl PolicyScore {
    pub const MIN: PolicyScore = PolicyScore(0);
    pub const MAX: PolicyScore = PolicyScore(3);

    /// Build a score from any integer, clamping into range.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> PolicyLabel {
        match self.0 {
            0 => PolicyLabel::NoSmoking,
            1 => PolicyLabel::ProbablyNoSmoking,
            2 => PolicyLabel::PossiblySmoking,
            _ => PolicyLabel::SmokingAllowed,
        }
    }
}

impl fmt::Display for PolicyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX.0)
    }
}

/// Fixed categories derived from a [`PolicyScore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyLabel {
    NoSmoking,
    ProbablyNoSmoking,
    PossiblySmoking,
    SmokingAllowed,
}

impl PolicyLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyLabel::NoSmoking => "No Smoking",
            PolicyLabel::ProbablyNoSmoking => "Probably No Smoking",
            PolicyLabel::PossiblySmoking => "Possibly Smoking",
            PolicyLabel::SmokingAllowed => "Smoking Allowed",
        }
    }
}

impl fmt::Display for PolicyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of analysing a venue's photos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub score: PolicyScore,
    /// Free-text rationale, possibly empty
    pub rationale: String,
    pub label: PolicyLabel,
}

impl AnalysisResult {
    pub fn new(score: PolicyScore, rationale: impl Into<String>) -> Self {
        Self {
            score,
            rationale: rationale.into(),
            label: score.label(),
        }
    }
}

/// Errors that can occur during enrichment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrichmentError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("API Error: {status}")]
    Upstream { status: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("No images provided")]
    NoImages,
}

impl EnrichmentError {
    /// Create an upstream error from a status string or code.
    pub fn upstream(status: impl Into<String>) -> Self {
        Self::Upstream {
            status: status.into(),
        }
    }

    /// Create an upstream error from a non-success HTTP status.
    pub fn http(status: reqwest::StatusCode) -> Self {
        Self::upstream(format!("HTTP {}", status.as_u16()))
    }
}

/// Trim a search query, rejecting blank input.
pub fn normalize_query(query: &str) -> Result<&str, EnrichmentError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(EnrichmentError::InvalidInput(
            "search query is blank".to_string(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_into_range() {
        assert_eq!(PolicyScore::clamped(-4).value(), 0);
        assert_eq!(PolicyScore::clamped(2).value(), 2);
        assert_eq!(PolicyScore::clamped(5).value(), 3);
        assert_eq!(PolicyScore::clamped(i64::MAX).value(), 3);
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(PolicyScore::clamped(0).label(), PolicyLabel::NoSmoking);
        assert_eq!(PolicyScore::clamped(1).label(), PolicyLabel::ProbablyNoSmoking);
        assert_eq!(PolicyScore::clamped(2).label(), PolicyLabel::PossiblySmoking);
        assert_eq!(PolicyScore::clamped(3).label(), PolicyLabel::SmokingAllowed);
        assert_eq!(PolicyLabel::SmokingAllowed.to_string(), "Smoking Allowed");
    }

    #[test]
    fn test_analysis_result_derives_label() {
        let result = AnalysisResult::new(PolicyScore::clamped(2), "ashtrays");
        assert_eq!(result.label, PolicyLabel::PossiblySmoking);
        assert_eq!(result.score.to_string(), "2/3");
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Kumpelnest  ").unwrap(), "Kumpelnest");
        assert!(matches!(
            normalize_query(" \t\n "),
            Err(EnrichmentError::InvalidInput(_))
        ));
        assert!(matches!(normalize_query(""), Err(EnrichmentError::InvalidInput(_))));
    }

    #[test]
    fn test_leading_photos_caps_at_limit() {
        let photo = |r: &str| PhotoRef {
            reference: r.to_string(),
            width: 100,
            height: 100,
        };
        let detail = VenueDetail {
            summary: VenueSummary {
                id: "id".to_string(),
                name: "Bar".to_string(),
                address: None,
                rating: None,
                price_tier: None,
                open_now: None,
                location: GeoPoint::default(),
            },
            formatted_address: None,
            photos: vec![photo("a"), photo("b"), photo("c")],
        };
        assert_eq!(detail.leading_photos(2).len(), 2);
        assert_eq!(detail.leading_photos(2)[1].reference, "b");
        assert_eq!(detail.leading_photos(5).len(), 3);
    }

    #[test]
    fn test_upstream_error_message() {
        let err = EnrichmentError::upstream("ZERO_RESULTS");
        assert_eq!(err.to_string(), "API Error: ZERO_RESULTS");
        let err = EnrichmentError::http(reqwest::StatusCode::FORBIDDEN);
        assert_eq!(err.to_string(), "API Error: HTTP 403");
    }
}
