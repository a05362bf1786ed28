// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the upload page.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity levels drive presentation in the page shell.

use crate::error::GrayliftError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Network blip — trying again later may work.
    Transient,
    /// User must do something (pick a different file, shrink the target).
    ActionRequired,
    /// Cannot be fixed by retrying or user action.
    Permanent,
}

/// A human-readable error with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in the page shell).
    pub severity: Severity,
}

/// Convert a `GrayliftError` into a `HumanError` for on-page display.
pub fn humanize_error(err: &GrayliftError) -> HumanError {
    match err {
        GrayliftError::Decode(detail) => HumanError {
            message: "We couldn't read that image.".into(),
            suggestion: format!(
                "Make sure the file is a PNG or JPEG photo and isn't damaged, then upload it again. ({detail})"
            ),
            severity: Severity::ActionRequired,
        },

        GrayliftError::Encode(detail) => HumanError {
            message: "We couldn't prepare the image for upload.".into(),
            suggestion: format!(
                "Try saving the picture as a PNG or JPEG and uploading that instead. ({detail})"
            ),
            severity: Severity::Permanent,
        },

        GrayliftError::InvalidArgument(detail) => HumanError {
            message: "One of the settings isn't valid.".into(),
            suggestion: format!("Check the size target and language choice. ({detail})"),
            severity: Severity::ActionRequired,
        },

        GrayliftError::Network(detail) => HumanError {
            message: "We couldn't reach the text-recognition service.".into(),
            suggestion: format!(
                "Check your internet connection and try again in a moment. ({detail})"
            ),
            severity: Severity::Transient,
        },

        GrayliftError::ResponseFormat(detail) => HumanError {
            message: "The text-recognition service sent back something unexpected.".into(),
            suggestion: format!(
                "This is usually temporary. Try again; if it keeps happening, let us know. ({detail})"
            ),
            severity: Severity::Transient,
        },

        GrayliftError::Io(detail) => HumanError {
            message: "A file couldn't be read.".into(),
            suggestion: format!("Check that the file exists and is readable. ({detail})"),
            severity: Severity::ActionRequired,
        },

        GrayliftError::Serialization(detail) => HumanError {
            message: "The service response couldn't be understood.".into(),
            suggestion: format!("Try again; if it keeps happening, let us know. ({detail})"),
            severity: Severity::Transient,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_are_transient() {
        let err = GrayliftError::Network("connection refused".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.suggestion.contains("connection refused"));
    }

    #[test]
    fn decode_errors_ask_for_user_action() {
        let err = GrayliftError::Decode("not an image".into());
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(!human.message.is_empty());
    }

    #[test]
    fn every_variant_has_nonempty_suggestion() {
        let errors = [
            GrayliftError::Decode("d".into()),
            GrayliftError::Encode("e".into()),
            GrayliftError::InvalidArgument("i".into()),
            GrayliftError::Network("n".into()),
            GrayliftError::ResponseFormat("r".into()),
        ];
        for err in &errors {
            let human = humanize_error(err);
            assert!(!human.message.is_empty());
            assert!(!human.suggestion.is_empty());
        }
    }
}
