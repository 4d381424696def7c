//! Adapter layer: Convert Places DTOs to domain models
//!
//! This is the ONLY place where Places DTO types are converted to domain
//! types. Upstream ordering is preserved; no re-ranking happens here.

use super::dto;
use crate::enrichment::domain::{EnrichmentError, GeoPoint, PhotoRef, VenueDetail, VenueSummary};

/// The status string the Places API uses for success
pub const SUCCESS_STATUS: &str = "OK";

/// Convert a text search response into venues, in upstream order.
///
/// Any status other than `OK` (including `ZERO_RESULTS`) is a failure.
pub fn to_venues(response: dto::SearchResponse) -> Result<Vec<VenueSummary>, EnrichmentError> {
    check_status(&response.status, response.error_message.as_deref())?;
    Ok(response.results.into_iter().map(to_summary).collect())
}

/// Convert a details response into a venue detail record.
pub fn to_detail(response: dto::DetailsResponse) -> Result<VenueDetail, EnrichmentError> {
    check_status(&response.status, response.error_message.as_deref())?;

    let details = response.result.ok_or_else(|| {
        EnrichmentError::Parse("details response is missing its result".to_string())
    })?;

    let summary = VenueSummary {
        id: details.place_id,
        name: details.name,
        address: details
            .vicinity
            .or_else(|| details.formatted_address.clone()),
        rating: details.rating,
        price_tier: details.price_level,
        open_now: details.opening_hours.and_then(|h| h.open_now),
        location: to_point(&details.geometry),
    };

    let photos = details
        .photos
        .into_iter()
        .map(|photo| PhotoRef {
            reference: photo.photo_reference,
            width: photo.width,
            height: photo.height,
        })
        .collect();

    Ok(VenueDetail {
        summary,
        formatted_address: details.formatted_address,
        photos,
    })
}

fn to_summary(place: dto::Place) -> VenueSummary {
    VenueSummary {
        location: to_point(&place.geometry),
        id: place.place_id,
        name: place.name,
        // Nearby search fills vicinity, text search fills formatted_address
        address: place.vicinity.or(place.formatted_address),
        rating: place.rating,
        price_tier: place.price_level,
        open_now: place.opening_hours.and_then(|h| h.open_now),
    }
}

fn to_point(geometry: &dto::Geometry) -> GeoPoint {
    GeoPoint {
        lat: geometry.location.lat,
        lng: geometry.location.lng,
    }
}

fn check_status(status: &str, message: Option<&str>) -> Result<(), EnrichmentError> {
    if status == SUCCESS_STATUS {
        return Ok(());
    }
    if let Some(message) = message {
        tracing::debug!("Places API returned {}: {}", status, message);
    }
    Err(EnrichmentError::upstream(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_place(id: &str, name: &str) -> dto::Place {
        dto::Place {
            place_id: id.to_string(),
            name: name.to_string(),
            vicinity: None,
            formatted_address: None,
            rating: None,
            price_level: None,
            types: vec!["bar".to_string()],
            geometry: dto::Geometry {
                location: dto::Location { lat: 52.5, lng: 13.4 },
            },
            opening_hours: None,
        }
    }

    fn make_search(status: &str, results: Vec<dto::Place>) -> dto::SearchResponse {
        dto::SearchResponse {
            status: status.to_string(),
            results,
            next_page_token: None,
            error_message: None,
        }
    }

    fn make_details(photos: &[&str]) -> dto::PlaceDetails {
        dto::PlaceDetails {
            place_id: "place-1".to_string(),
            name: "Bar One".to_string(),
            formatted_address: Some("Street 1, Berlin".to_string()),
            vicinity: None,
            rating: Some(0.0),
            price_level: Some(0),
            photos: photos
                .iter()
                .map(|r| dto::Photo {
                    photo_reference: r.to_string(),
                    width: 1024,
                    height: 768,
                    html_attributions: vec![],
                })
                .collect(),
            opening_hours: Some(dto::OpeningHours { open_now: None }),
            geometry: dto::Geometry {
                location: dto::Location { lat: 1.5, lng: -2.5 },
            },
        }
    }

    #[test]
    fn test_search_preserves_upstream_order() {
        let response = make_search(
            "OK",
            vec![make_place("c", "Third"), make_place("a", "First"), make_place("b", "Second")],
        );

        let venues = to_venues(response).unwrap();
        let ids: Vec<_> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_search_non_ok_status_fails() {
        let result = to_venues(make_search("ZERO_RESULTS", vec![]));
        assert_eq!(result, Err(EnrichmentError::upstream("ZERO_RESULTS")));

        let result = to_venues(make_search("OVER_QUERY_LIMIT", vec![make_place("a", "A")]));
        assert!(matches!(result, Err(EnrichmentError::Upstream { .. })));
    }

    #[test]
    fn test_search_address_prefers_vicinity() {
        let place = dto::Place {
            vicinity: Some("Kreuzberg".to_string()),
            formatted_address: Some("Full Address".to_string()),
            ..make_place("a", "A")
        };
        let venues = to_venues(make_search("OK", vec![place])).unwrap();
        assert_eq!(venues[0].address.as_deref(), Some("Kreuzberg"));

        let place = dto::Place {
            formatted_address: Some("Full Address".to_string()),
            ..make_place("b", "B")
        };
        let venues = to_venues(make_search("OK", vec![place])).unwrap();
        assert_eq!(venues[0].address.as_deref(), Some("Full Address"));
    }

    #[test]
    fn test_detail_conversion() {
        let response = dto::DetailsResponse {
            status: "OK".to_string(),
            result: Some(make_details(&["p1", "p2"])),
            error_message: None,
        };

        let detail = to_detail(response).unwrap();
        assert_eq!(detail.summary.id, "place-1");
        assert_eq!(detail.formatted_address.as_deref(), Some("Street 1, Berlin"));
        assert_eq!(detail.summary.location, GeoPoint { lat: 1.5, lng: -2.5 });
        let refs: Vec<_> = detail.photos.iter().map(|p| p.reference.as_str()).collect();
        assert_eq!(refs, vec!["p1", "p2"]);
        assert_eq!(detail.photos[0].width, 1024);
    }

    #[test]
    fn test_zero_values_are_present_not_absent() {
        let response = dto::DetailsResponse {
            status: "OK".to_string(),
            result: Some(make_details(&[])),
            error_message: None,
        };

        let detail = to_detail(response).unwrap();
        assert_eq!(detail.summary.rating, Some(0.0));
        assert_eq!(detail.summary.price_tier, Some(0));
        assert_eq!(detail.summary.open_now, None);
    }

    #[test]
    fn test_detail_error_status() {
        let response = dto::DetailsResponse {
            status: "INVALID_REQUEST".to_string(),
            result: None,
            error_message: Some("Invalid 'placeid' parameter".to_string()),
        };
        assert_eq!(
            to_detail(response),
            Err(EnrichmentError::upstream("INVALID_REQUEST"))
        );
    }

    #[test]
    fn test_detail_ok_without_result_is_parse_error() {
        let response = dto::DetailsResponse {
            status: "OK".to_string(),
            result: None,
            error_message: None,
        };
        assert!(matches!(to_detail(response), Err(EnrichmentError::Parse(_))));
    }
}
