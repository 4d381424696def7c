//! SmokeScreen - find bars and pubs and score their smoking policy from photos.
//!
//! The library holds the whole pipeline: venue search, photo loading and
//! downscaling, image analysis and score parsing. The `smokescreen` binary
//! is a thin command-line driver over it.

pub mod config;
pub mod enrichment;
pub mod error;
pub mod pipeline;
#[cfg(test)]
pub mod test_utils;
