// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// graylift-vision — Image preparation and OCR submission for Graylift.
//
// Provides the adaptive image compressor (grayscale, contrast boost, size-
// targeted downscale), the blocking HTTP client for the remote OCR service,
// and the single-call pipeline that chains the two for one upload event.

pub mod compress;
pub mod ocr;
pub mod pipeline;

// Re-export the primary entry points so callers can use `graylift_vision::compress` etc.
pub use compress::{CompressedImage, compress};
pub use ocr::OcrClient;
pub use pipeline::{Recognition, recognize_image};
