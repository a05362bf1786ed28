// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Explicit configuration objects. Nothing here is read from the process
// environment or from globals — callers construct these and pass them in.

use serde::{Deserialize, Serialize};

/// Parameters for the remote OCR service call.
///
/// All values are sent as query parameters on the POST. The defaults match
/// the deployed tesseract-server endpoint: plain string output, page
/// segmentation mode 12 (sparse text with orientation detection), normal
/// priority, and a zero timeout the server interprets as "no timeout".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrServiceConfig {
    /// Endpoint URL the compressed image is posted to.
    pub endpoint: String,
    /// Response shape requested from the service (`output_type`).
    pub output_type: String,
    /// Engine configuration flags (`config`).
    pub engine_config: String,
    /// Scheduling priority on the server (`nice`).
    pub nice: i32,
    /// Server-side timeout in seconds; 0 means unlimited (`timeout`).
    pub timeout_secs: u32,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ocr.lafsolutions.net/tesseract".into(),
            output_type: "string".into(),
            engine_config: "--psm 12".into(),
            nice: 0,
            timeout_secs: 0,
        }
    }
}

impl OcrServiceConfig {
    /// Config pointing at a specific endpoint, with default parameters.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Parameters for the adaptive image compressor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    /// Target maximum encoded size in kilobytes. Approximate, not a bound.
    pub max_size_kb: f32,
    /// Contrast multiplier applied before size measurement.
    pub contrast: f32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            max_size_kb: 200.0,
            contrast: 2.0,
        }
    }
}

impl CompressionConfig {
    /// Config targeting a specific size, with the default contrast boost.
    pub fn with_max_size_kb(max_size_kb: f32) -> Self {
        Self {
            max_size_kb,
            ..Self::default()
        }
    }
}
