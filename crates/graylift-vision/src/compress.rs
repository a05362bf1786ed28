// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Adaptive image compressor — grayscale conversion, contrast boost, and a
// size-targeted downscale, re-encoded in the format the upload arrived in.
//
// The size control is a one-shot heuristic: the image is encoded once at
// full resolution to measure a baseline, and both dimensions are scaled by
// sqrt(target / baseline) on the assumption that encoded size grows
// quadratically with linear dimension. The result approximates the target;
// it is not a hard bound, and no re-measurement happens after the resize.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{GrayImage, ImageFormat};
use imageproc::map::map_subpixels;
use tracing::{debug, info, instrument};

use graylift_core::config::CompressionConfig;
use graylift_core::error::{GrayliftError, Result};
use graylift_core::types::ImageEncoding;

/// JPEG re-encode quality. Stands in for the "optimize size" hint of the
/// original host library, which the JPEG encoder has no direct equivalent of.
const JPEG_QUALITY: u8 = 75;

/// Result of a compression run.
///
/// The bytes are re-encoded in the same format the input was detected as,
/// single-channel grayscale, contrast-boosted, and downscaled towards the
/// configured size target.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// Re-encoded image bytes.
    pub bytes: Vec<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// The encoding detected on input and preserved through compression.
    pub encoding: ImageEncoding,
}

/// Compress raw image bytes towards `config.max_size_kb`.
///
/// The grayscale conversion and contrast boost are applied unconditionally —
/// they are part of the OCR preparation, not a size-driven optimisation.
/// The scale factor is clamped at 1.0: an image whose baseline already fits
/// the target is returned at its original dimensions, never upscaled.
///
/// # Errors
///
/// - [`GrayliftError::InvalidArgument`] if `max_size_kb` is not positive.
/// - [`GrayliftError::Decode`] if the bytes are not a decodable image.
/// - [`GrayliftError::Encode`] if the detected format is not one the
///   compressor re-encodes (PNG and JPEG are supported).
#[instrument(skip(image_bytes, config), fields(data_len = image_bytes.len()))]
pub fn compress(image_bytes: &[u8], config: &CompressionConfig) -> Result<CompressedImage> {
    if !(config.max_size_kb > 0.0) {
        return Err(GrayliftError::InvalidArgument(format!(
            "max_size_kb must be positive, got {}",
            config.max_size_kb
        )));
    }

    let encoding = detect_encoding(image_bytes)?;
    let decoded = image::load_from_memory_with_format(image_bytes, image_format(encoding))
        .map_err(|err| GrayliftError::Decode(format!("failed to decode image: {err}")))?;
    info!(
        width = decoded.width(),
        height = decoded.height(),
        format = encoding.extension(),
        "upload decoded"
    );

    // Luminance-only conversion followed by the fixed contrast boost.
    let gray = decoded.to_luma8();
    let boosted = boost_contrast(&gray, config.contrast);

    // Encode once at full resolution to measure the baseline size.
    let baseline = encode_optimized(&boosted, encoding)?;
    let raw_scale = scale_factor(baseline.len(), config.max_size_kb);
    let scale = raw_scale.min(1.0);
    debug!(
        baseline_bytes = baseline.len(),
        raw_scale, scale, "baseline measured"
    );

    if scale >= 1.0 {
        // Already within budget — keep the baseline encode as-is.
        let (width, height) = boosted.dimensions();
        info!(width, height, bytes = baseline.len(), "image already under size target");
        return Ok(CompressedImage {
            bytes: baseline,
            width,
            height,
            encoding,
        });
    }

    let (new_width, new_height) = scaled_dimensions(boosted.width(), boosted.height(), scale);
    let resized = image::imageops::resize(
        &boosted,
        new_width,
        new_height,
        image::imageops::FilterType::Lanczos3,
    );
    let bytes = encode_optimized(&resized, encoding)?;
    info!(
        new_width,
        new_height,
        bytes = bytes.len(),
        "image compressed for upload"
    );

    Ok(CompressedImage {
        bytes,
        width: new_width,
        height: new_height,
        encoding,
    })
}

/// Detect the upload's encoding from its byte signature.
fn detect_encoding(bytes: &[u8]) -> Result<ImageEncoding> {
    let format = image::guess_format(bytes)
        .map_err(|err| GrayliftError::Decode(format!("unrecognised image data: {err}")))?;
    match format {
        ImageFormat::Png => Ok(ImageEncoding::Png),
        ImageFormat::Jpeg => Ok(ImageEncoding::Jpeg),
        other => Err(GrayliftError::Encode(format!(
            "cannot re-encode {other:?} uploads; use PNG or JPEG"
        ))),
    }
}

fn image_format(encoding: ImageEncoding) -> ImageFormat {
    match encoding {
        ImageEncoding::Png => ImageFormat::Png,
        ImageEncoding::Jpeg => ImageFormat::Jpeg,
    }
}

/// Multiply every pixel's distance from mid-gray by `factor`.
fn boost_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    map_subpixels(gray, |value: u8| {
        (factor * (value as f32 - 128.0) + 128.0).clamp(0.0, 255.0) as u8
    })
}

/// Linear dimension multiplier that would bring `baseline_bytes` down to the
/// target, assuming encoded size scales quadratically with dimension.
///
/// Returned unclamped; values above 1.0 mean the baseline already fits.
fn scale_factor(baseline_bytes: usize, max_size_kb: f32) -> f32 {
    (max_size_kb * 1024.0 / baseline_bytes as f32).sqrt()
}

/// Scale both dimensions, truncating each to an integer with a floor of 1px.
fn scaled_dimensions(width: u32, height: u32, scale: f32) -> (u32, u32) {
    let w = ((width as f32 * scale) as u32).max(1);
    let h = ((height as f32 * scale) as u32).max(1);
    (w, h)
}

/// Encode a grayscale image in the given format with size-optimised settings.
fn encode_optimized(gray: &GrayImage, encoding: ImageEncoding) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match encoding {
        ImageEncoding::Png => {
            let encoder = PngEncoder::new_with_quality(
                &mut buffer,
                CompressionType::Best,
                PngFilter::Adaptive,
            );
            gray.write_with_encoder(encoder)
        }
        ImageEncoding::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            gray.write_with_encoder(encoder)
        }
    }
    .map_err(|err| {
        GrayliftError::Encode(format!("{} encoding failed: {err}", encoding.extension()))
    })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::io::Cursor;

    /// Encode a synthetic colour image with a pseudo-noise pattern (poorly
    /// compressible, so baselines stay well above trivial sizes).
    fn noisy_image_bytes(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            let v = ((x * 31 + y * 17) % 256) as u8;
            Rgb([v, v.wrapping_add(80), v.wrapping_mul(3)])
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), format)
            .unwrap();
        buffer
    }

    #[test]
    fn output_is_single_channel_grayscale() {
        for format in [ImageFormat::Png, ImageFormat::Jpeg] {
            let input = noisy_image_bytes(64, 48, format);
            let result = compress(&input, &CompressionConfig::default()).unwrap();
            let decoded = image::load_from_memory(&result.bytes).unwrap();
            assert!(
                matches!(decoded.color(), image::ColorType::L8),
                "expected L8 output for {format:?}, got {:?}",
                decoded.color()
            );
        }
    }

    #[test]
    fn output_format_matches_input_format() {
        let png = compress(
            &noisy_image_bytes(32, 32, ImageFormat::Png),
            &CompressionConfig::default(),
        )
        .unwrap();
        assert_eq!(png.encoding, ImageEncoding::Png);
        assert_eq!(image::guess_format(&png.bytes).unwrap(), ImageFormat::Png);

        let jpeg = compress(
            &noisy_image_bytes(32, 32, ImageFormat::Jpeg),
            &CompressionConfig::default(),
        )
        .unwrap();
        assert_eq!(jpeg.encoding, ImageEncoding::Jpeg);
        assert_eq!(image::guess_format(&jpeg.bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn oversized_image_is_downscaled() {
        // A noisy 200x200 grayscale PNG encodes to tens of kilobytes; a 1 KB
        // target forces a scale well below 1.
        let input = noisy_image_bytes(200, 200, ImageFormat::Png);
        let config = CompressionConfig::with_max_size_kb(1.0);
        let result = compress(&input, &config).unwrap();
        assert!(result.width < 200, "width {} not reduced", result.width);
        assert!(result.height < 200, "height {} not reduced", result.height);
    }

    #[test]
    fn small_image_is_not_upscaled() {
        let input = noisy_image_bytes(10, 10, ImageFormat::Png);
        let result = compress(&input, &CompressionConfig::default()).unwrap();
        assert_eq!((result.width, result.height), (10, 10));
    }

    #[test]
    fn dimensions_never_exceed_input() {
        for target_kb in [0.5f32, 5.0, 200.0, 10_000.0] {
            let input = noisy_image_bytes(60, 90, ImageFormat::Jpeg);
            let config = CompressionConfig::with_max_size_kb(target_kb);
            let result = compress(&input, &config).unwrap();
            assert!(result.width <= 60 && result.height <= 90);
        }
    }

    #[test]
    fn invalid_bytes_fail_with_decode_error() {
        let result = compress(b"definitely not an image", &CompressionConfig::default());
        assert!(matches!(result, Err(GrayliftError::Decode(_))));
    }

    #[test]
    fn truncated_png_fails_with_decode_error() {
        let mut input = noisy_image_bytes(32, 32, ImageFormat::Png);
        input.truncate(20);
        let result = compress(&input, &CompressionConfig::default());
        assert!(matches!(result, Err(GrayliftError::Decode(_))));
    }

    #[test]
    fn unsupported_format_fails_with_encode_error() {
        let input = noisy_image_bytes(16, 16, ImageFormat::Bmp);
        let result = compress(&input, &CompressionConfig::default());
        assert!(matches!(result, Err(GrayliftError::Encode(_))));
    }

    #[test]
    fn non_positive_target_rejected() {
        let input = noisy_image_bytes(16, 16, ImageFormat::Png);
        for bad in [0.0f32, -1.0, -200.0] {
            let result = compress(&input, &CompressionConfig::with_max_size_kb(bad));
            assert!(
                matches!(result, Err(GrayliftError::InvalidArgument(_))),
                "target {bad} should be rejected"
            );
        }
    }

    #[test]
    fn scale_factor_halves_dimensions_for_quarter_target() {
        // 800 KB baseline, 200 KB target: sqrt(200/800) = 0.5.
        let scale = scale_factor(800 * 1024, 200.0);
        assert!((scale - 0.5).abs() < 1e-3, "expected ~0.5, got {scale}");
    }

    #[test]
    fn scaled_dimensions_truncate_independently() {
        assert_eq!(scaled_dimensions(500, 500, 0.5), (250, 250));
        // 101 * 0.33 = 33.33 → 33; 7 * 0.33 = 2.31 → 2.
        assert_eq!(scaled_dimensions(101, 7, 0.33), (33, 2));
        // Floor of one pixel.
        assert_eq!(scaled_dimensions(3, 3, 0.01), (1, 1));
    }

    #[test]
    fn contrast_boost_pushes_values_apart() {
        let gray = GrayImage::from_fn(2, 1, |x, _| image::Luma([if x == 0 { 100 } else { 156 }]));
        let boosted = boost_contrast(&gray, 2.0);
        // 2.0 * (100 - 128) + 128 = 72; 2.0 * (156 - 128) + 128 = 184.
        assert_eq!(boosted.get_pixel(0, 0).0[0], 72);
        assert_eq!(boosted.get_pixel(1, 0).0[0], 184);
    }

    #[test]
    fn contrast_boost_clamps_to_byte_range() {
        let gray = GrayImage::from_fn(2, 1, |x, _| image::Luma([if x == 0 { 0 } else { 255 }]));
        let boosted = boost_contrast(&gray, 2.0);
        assert_eq!(boosted.get_pixel(0, 0).0[0], 0);
        assert_eq!(boosted.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn recompression_is_not_idempotent() {
        // Repeated runs keep shrinking the image; the routine is a one-way
        // transform, not a fixed point.
        let input = noisy_image_bytes(200, 200, ImageFormat::Png);
        let config = CompressionConfig::with_max_size_kb(2.0);
        let once = compress(&input, &config).unwrap();
        let twice = compress(&once.bytes, &config).unwrap();
        assert!(twice.width <= once.width);
        assert!(twice.height <= once.height);
    }
}
