//! Test utilities and fixtures for smokescreen tests.
//!
//! This module provides image payload generators and venue factories to
//! reduce boilerplate in tests.
//!
//! # Example
//!
//! ```ignore
//! use smokescreen::test_utils::{jpeg_fixture, mock_venue};
//!
//! #[test]
//! fn test_something() {
//!     let photo = jpeg_fixture(800, 600);
//!     let venue = mock_venue("bar-1", "Test Bar");
//!     // ... test logic
//! }
//! ```

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};

use crate::enrichment::domain::{GeoPoint, PhotoRef, VenueDetail, VenueSummary};

/// Encodes a gradient JPEG of the given size.
///
/// Different sizes produce different bytes, so fixtures can be told apart
/// by comparing payloads.
pub fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, 90)
        .encode_image(&image)
        .expect("Failed to encode JPEG fixture");
    out
}

/// Encodes a semi-transparent PNG of the given size.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, 64, (y % 256) as u8, 128])
    });
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    out.into_inner()
}

/// Creates a VenueSummary with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let venue = VenueSummary {
///     rating: None,
///     ..mock_venue("bar-1", "Test Bar")
/// };
/// ```
pub fn mock_venue(id: &str, name: &str) -> VenueSummary {
    VenueSummary {
        id: id.to_string(),
        name: name.to_string(),
        address: Some("Oranienstraße 1".to_string()),
        rating: Some(4.3),
        price_tier: Some(2),
        open_now: Some(true),
        location: GeoPoint {
            lat: 52.5,
            lng: 13.42,
        },
    }
}

/// Creates a VenueDetail for `summary` with one photo reference per entry
/// in `references`.
pub fn mock_detail(summary: VenueSummary, references: &[&str]) -> VenueDetail {
    VenueDetail {
        formatted_address: Some("Oranienstraße 1, 10999 Berlin, Germany".to_string()),
        photos: references
            .iter()
            .map(|reference| PhotoRef {
                reference: reference.to_string(),
                width: 800,
                height: 600,
            })
            .collect(),
        summary,
    }
}
