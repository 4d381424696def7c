//! Google Places API integration
//!
//! Provides venue text search, venue details and photo downloads.
//! Requires a Places API key.
//!
//! API docs: https://developers.google.com/maps/documentation/places/web-service

pub mod dto;
mod adapter;
mod client;

pub use adapter::{to_detail, to_venues};
pub use client::{DEFAULT_PHOTO_MAX_WIDTH, PlacesClient};
