//! Best-effort photo downscaling.
//!
//! Photos arrive from the Places API at up to `fetch_max_width` pixels wide,
//! far larger than anything we display or send for analysis. This shrinks
//! them into a bounding box and re-encodes them as JPEG.
//!
//! The algorithm mirrors a two-stage subsampling decoder:
//!
//! 1. Read only the image header for its dimensions.
//! 2. Pick the largest power-of-two subsample factor that keeps the image at
//!    least as large as the box.
//! 3. Reduce by that factor, then resize by a single uniform scale so both
//!    dimensions fit the box.
//! 4. Re-encode at the requested JPEG quality.
//!
//! Downscaling never fails. Images already inside the box are returned
//! byte-for-byte, and anything that can't be decoded or encoded falls back
//! to the original bytes.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};

use super::domain::EnrichmentError;

/// Target bounding box and encoder quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownscaleOptions {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl DownscaleOptions {
    /// Build options, clamping the box to at least 1x1 and quality to 1-100.
    pub fn new(max_width: u32, max_height: u32, quality: u8) -> Self {
        Self {
            max_width: max_width.max(1),
            max_height: max_height.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        width <= self.max_width && height <= self.max_height
    }
}

impl Default for DownscaleOptions {
    fn default() -> Self {
        Self::new(200, 200, 85)
    }
}

/// Outcome of a downscale attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Downscaled {
    /// Re-encoded to fit the box
    Resized { data: Vec<u8>, width: u32, height: u32 },
    /// Already fit the box; returned untouched
    WithinBounds(Vec<u8>),
    /// Could not be processed; original bytes returned
    Fallback { data: Vec<u8>, error: EnrichmentError },
}

impl Downscaled {
    /// The bytes to use, whichever way the attempt went.
    pub fn into_data(self) -> Vec<u8> {
        match self {
            Downscaled::Resized { data, .. }
            | Downscaled::WithinBounds(data)
            | Downscaled::Fallback { data, .. } => data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Downscaled::Fallback { .. })
    }
}

/// Shrink an encoded image into the options' bounding box.
pub fn downscale(data: Vec<u8>, options: DownscaleOptions) -> Downscaled {
    let (width, height) = match read_dimensions(&data) {
        Ok(dims) => dims,
        Err(error) => return Downscaled::Fallback { data, error },
    };

    if options.fits(width, height) {
        return Downscaled::WithinBounds(data);
    }

    match shrink(&data, width, height, options) {
        Ok((encoded, width, height)) => Downscaled::Resized {
            data: encoded,
            width,
            height,
        },
        Err(error) => Downscaled::Fallback { data, error },
    }
}

/// Read image dimensions from the header without decoding pixels.
pub fn read_dimensions(data: &[u8]) -> Result<(u32, u32), EnrichmentError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| EnrichmentError::Decode(e.to_string()))?
        .into_dimensions()
        .map_err(|e| EnrichmentError::Decode(e.to_string()))
}

/// Largest power-of-two reduction that keeps the image at least as large
/// as the box in both dimensions.
pub fn subsample_factor(width: u32, height: u32, max_width: u32, max_height: u32) -> u32 {
    let max_width = max_width.max(1);
    let max_height = max_height.max(1);
    let mut factor = 1;

    if height > max_height || width > max_width {
        let half_height = height / 2;
        let half_width = width / 2;

        while half_height / factor >= max_height && half_width / factor >= max_width {
            factor *= 2;
        }
    }

    factor
}

/// Dimensions after a single uniform scale into the box.
///
/// Returns the input unchanged when it already fits. Never returns a zero
/// dimension.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    // scale = min(max_width / width, max_height / height), applied in exact
    // integer arithmetic so the limiting side lands exactly on the box edge
    let (w, h, max_w, max_h) = (
        width as u64,
        height as u64,
        max_width as u64,
        max_height as u64,
    );
    let (new_w, new_h) = if max_w * h <= max_h * w {
        (max_w, h * max_w / w)
    } else {
        (w * max_h / h, max_h)
    };

    ((new_w as u32).max(1), (new_h as u32).max(1))
}

fn shrink(
    data: &[u8],
    width: u32,
    height: u32,
    options: DownscaleOptions,
) -> Result<(Vec<u8>, u32, u32), EnrichmentError> {
    let image = decode(data)?;

    let factor = subsample_factor(width, height, options.max_width, options.max_height);
    let image = if factor > 1 {
        let (w, h) = ((width / factor).max(1), (height / factor).max(1));
        image.resize_exact(w, h, FilterType::Triangle)
    } else {
        image
    };

    let (w, h) = fit_within(
        image.width(),
        image.height(),
        options.max_width,
        options.max_height,
    );
    let image = if (w, h) != (image.width(), image.height()) {
        image.resize_exact(w, h, FilterType::Triangle)
    } else {
        image
    };

    let encoded = encode_jpeg(&image, options.quality)?;
    Ok((encoded, w, h))
}

fn decode(data: &[u8]) -> Result<DynamicImage, EnrichmentError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| EnrichmentError::Decode(e.to_string()))?
        .decode()
        .map_err(|e| EnrichmentError::Decode(e.to_string()))
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>, EnrichmentError> {
    // JPEG has no alpha channel
    let rgb = image.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode_image(&rgb)
        .map_err(|e| EnrichmentError::Decode(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{jpeg_fixture, png_fixture};

    #[test]
    fn test_subsample_factor() {
        assert_eq!(subsample_factor(100, 100, 200, 200), 1);
        assert_eq!(subsample_factor(300, 300, 200, 200), 1);
        assert_eq!(subsample_factor(800, 600, 200, 200), 2);
        assert_eq!(subsample_factor(1600, 1600, 200, 200), 8);
        // Narrow side limits the reduction
        assert_eq!(subsample_factor(3200, 250, 200, 200), 1);
    }

    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within(200, 200, 200, 200), (200, 200));
        assert_eq!(fit_within(400, 300, 200, 200), (200, 150));
        assert_eq!(fit_within(201, 50, 200, 200), (200, 49));
        // Extreme aspect ratios never collapse to zero
        assert_eq!(fit_within(10_000, 1, 200, 200), (200, 1));
    }

    #[test]
    fn test_within_bounds_returns_identical_bytes() {
        let input = jpeg_fixture(200, 120);
        let result = downscale(input.clone(), DownscaleOptions::default());
        assert_eq!(result, Downscaled::WithinBounds(input));
    }

    #[test]
    fn test_large_image_fits_box() {
        let input = jpeg_fixture(800, 600);
        let result = downscale(input, DownscaleOptions::default());

        let Downscaled::Resized { data, width, height } = result else {
            panic!("expected a resized image, got {:?}", result);
        };
        assert_eq!((width, height), (200, 150));
        assert_eq!(read_dimensions(&data).unwrap(), (200, 150));
    }

    #[test]
    fn test_png_input_is_reencoded_as_jpeg() {
        let input = png_fixture(640, 320);
        let data = downscale(input, DownscaleOptions::default()).into_data();
        assert_eq!(image::guess_format(&data).unwrap(), image::ImageFormat::Jpeg);
        assert_eq!(read_dimensions(&data).unwrap(), (200, 100));
    }

    #[test]
    fn test_only_one_side_too_large() {
        let input = jpeg_fixture(201, 50);
        let data = downscale(input, DownscaleOptions::default()).into_data();
        assert_eq!(read_dimensions(&data).unwrap(), (200, 49));
    }

    #[test]
    fn test_garbage_falls_back_to_original() {
        let input = b"definitely not an image".to_vec();
        let result = downscale(input.clone(), DownscaleOptions::default());
        assert!(result.is_fallback());
        assert!(matches!(
            result,
            Downscaled::Fallback { error: EnrichmentError::Decode(_), .. }
        ));
        assert_eq!(result.into_data(), input);
    }

    #[test]
    fn test_options_are_clamped() {
        let options = DownscaleOptions::new(0, 0, 0);
        assert_eq!(options.max_width, 1);
        assert_eq!(options.max_height, 1);
        assert_eq!(options.quality, 1);
        assert_eq!(DownscaleOptions::new(10, 10, 255).quality, 100);
    }
}
