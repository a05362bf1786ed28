// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// OCR submission client.
//
// Posts compressed image bytes to the remote OCR service as multipart form
// data and extracts the recognised text from the JSON response. One
// synchronous call per upload: no retry, no client-side timeout, no partial
// results. The server-side `timeout=0` query parameter means "no timeout"
// to the remote service.

use tracing::{debug, info, instrument};

use graylift_core::config::OcrServiceConfig;
use graylift_core::error::{GrayliftError, Result};
use graylift_core::types::Language;

use crate::compress::CompressedImage;

/// Blocking client for the remote OCR service.
///
/// Construction builds the underlying HTTP client once; the client can then
/// be reused for many uploads. Holds no per-request state, so concurrent
/// invocations do not interfere.
pub struct OcrClient {
    http: reqwest::blocking::Client,
    config: OcrServiceConfig,
}

impl OcrClient {
    /// Create a client for the given service configuration.
    ///
    /// The HTTP client is built without a request timeout — the upload blocks
    /// until the service answers or the transport fails, matching the
    /// service-side `timeout=0` contract.
    pub fn new(config: OcrServiceConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|err| GrayliftError::Network(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, config })
    }

    /// Client pointing at the default deployed endpoint.
    pub fn with_defaults() -> Result<Self> {
        Self::new(OcrServiceConfig::default())
    }

    /// Submit a compressed image for recognition and return the text.
    ///
    /// The image is sent as a single `files` multipart part named `filename`;
    /// the response maps that filename back to the recognised string.
    ///
    /// # Errors
    ///
    /// - [`GrayliftError::Network`] if the transport fails or the service
    ///   answers with a non-success status.
    /// - [`GrayliftError::ResponseFormat`] if the response body is not JSON
    ///   of the expected shape or lacks an entry for `filename`.
    #[instrument(skip(self, image, language), fields(
        endpoint = %self.config.endpoint,
        bytes = image.bytes.len(),
        lang = %language,
    ))]
    pub fn recognize(
        &self,
        filename: &str,
        image: CompressedImage,
        language: Language,
    ) -> Result<String> {
        info!(filename, "submitting image for OCR");

        let mime = image.encoding.mime_type();
        let part = reqwest::blocking::multipart::Part::bytes(image.bytes)
            .file_name(filename.to_string())
            .mime_str(mime)
            .map_err(|err| GrayliftError::Network(format!("invalid MIME type {mime}: {err}")))?;
        let form = reqwest::blocking::multipart::Form::new().part("files", part);

        let query = [
            ("output_type", self.config.output_type.clone()),
            ("lang", language.code().to_string()),
            ("config", self.config.engine_config.clone()),
            ("nice", self.config.nice.to_string()),
            ("timeout", self.config.timeout_secs.to_string()),
        ];

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&query)
            .multipart(form)
            .send()
            .map_err(|err| GrayliftError::Network(format!("OCR request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GrayliftError::Network(format!(
                "OCR service answered with status {status}"
            )));
        }

        let payload: serde_json::Value = response.json().map_err(|err| {
            GrayliftError::ResponseFormat(format!("response body is not valid JSON: {err}"))
        })?;
        debug!("OCR response received");

        extract_text(&payload, filename)
    }
}

/// Pull the recognised text for `filename` out of the service response.
///
/// Expected shape: `{"results": {"<filename>": "<text>"}}`.
fn extract_text(payload: &serde_json::Value, filename: &str) -> Result<String> {
    let results = payload
        .get("results")
        .and_then(|v| v.as_object())
        .ok_or_else(|| {
            GrayliftError::ResponseFormat("response is missing the `results` object".into())
        })?;

    let text = results.get(filename).and_then(|v| v.as_str()).ok_or_else(|| {
        GrayliftError::ResponseFormat(format!("no result entry for `{filename}`"))
    })?;

    Ok(text.to_string())
}
