// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Graylift.

use serde::{Deserialize, Serialize};

/// Recognition language offered on the upload page.
///
/// The remote OCR service accepts a small enumerated set of language codes;
/// the site exposes exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Portuguese,
}

impl Language {
    /// Language code string passed to the OCR service (`lang` parameter).
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "eng",
            Self::Portuguese => "por",
        }
    }

    /// Human-readable label for the language selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Portuguese => "Portuguese",
        }
    }

    /// All selectable languages, in display order.
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Portuguese]
    }
}

impl std::str::FromStr for Language {
    type Err = crate::error::GrayliftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eng" => Ok(Self::English),
            "por" => Ok(Self::Portuguese),
            other => Err(crate::error::GrayliftError::InvalidArgument(format!(
                "unknown language code: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Image encodings accepted by the upload page and preserved through
/// compression: the compressor re-encodes in the same format it detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageEncoding {
    Png,
    Jpeg,
}

impl ImageEncoding {
    /// MIME type string for the multipart upload part.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Canonical file extension (no dot).
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Infer encoding from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_str(lang.code()).unwrap(), *lang);
        }
    }

    #[test]
    fn unknown_language_code_rejected() {
        assert!(Language::from_str("deu").is_err());
    }

    #[test]
    fn encoding_from_extension_is_case_insensitive() {
        assert_eq!(ImageEncoding::from_extension("JPEG"), Some(ImageEncoding::Jpeg));
        assert_eq!(ImageEncoding::from_extension("png"), Some(ImageEncoding::Png));
        assert_eq!(ImageEncoding::from_extension("gif"), None);
    }
}
