// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Single-call pipeline for one upload event: compress, then submit for OCR.

use tracing::{info, instrument};

use graylift_core::config::CompressionConfig;
use graylift_core::error::Result;
use graylift_core::types::{ImageEncoding, Language};

use crate::compress::compress;
use crate::ocr::OcrClient;

/// Outcome of one recognition cycle, with the compressed-upload stats the
/// page shell displays alongside the text.
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Text recognised by the OCR service.
    pub text: String,
    /// Size of the bytes actually uploaded.
    pub uploaded_bytes: usize,
    /// Dimensions of the uploaded image.
    pub width: u32,
    /// Dimensions of the uploaded image.
    pub height: u32,
    /// Encoding the upload was sent in.
    pub encoding: ImageEncoding,
}

/// Run one full request cycle: compress the raw upload, post it to the OCR
/// service, and return the recognised text.
///
/// Pure function of its inputs — no state is shared across invocations, so
/// parallel upload events do not interfere.
#[instrument(skip(client, image_bytes, language, compression), fields(
    data_len = image_bytes.len(),
    lang = %language,
))]
pub fn recognize_image(
    client: &OcrClient,
    filename: &str,
    image_bytes: &[u8],
    language: Language,
    compression: &CompressionConfig,
) -> Result<Recognition> {
    let compressed = compress(image_bytes, compression)?;
    let (uploaded_bytes, width, height, encoding) = (
        compressed.bytes.len(),
        compressed.width,
        compressed.height,
        compressed.encoding,
    );
    info!(
        uploaded_bytes,
        width, height, "compressed upload ready, submitting"
    );

    let text = client.recognize(filename, compressed, language)?;
    info!(chars = text.len(), "recognition complete");

    Ok(Recognition {
        text,
        uploaded_bytes,
        width,
        height,
        encoding,
    })
}
