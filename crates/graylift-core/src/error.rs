// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Graylift.

use thiserror::Error;

/// Top-level error type for all Graylift operations.
///
/// Nothing in this taxonomy is recovered locally — no retry, no fallback
/// format, no degraded mode. Every failure surfaces to the caller and from
/// there to the user.
#[derive(Debug, Error)]
pub enum GrayliftError {
    // -- Compression errors --
    #[error("image decoding failed: {0}")]
    Decode(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- OCR submission errors --
    #[error("OCR request failed: {0}")]
    Network(String),

    #[error("unexpected OCR response: {0}")]
    ResponseFormat(String),

    // -- Ambient --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, GrayliftError>;
