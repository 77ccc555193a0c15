//! Error types for the docask library.
//!
//! One enum, two failure classes:
//!
//! * **Input errors** — the request cannot proceed at all (no API key, no
//!   file, unsupported extension, unparseable document). These halt
//!   processing before any network call and surface as a UI error block.
//!
//! * **Completion errors** — the document was read fine but the completion
//!   API call failed (transport, non-2xx status, malformed body). These are
//!   caught and rendered inline where the answer would have appeared, via
//!   [`crate::ask::render_error`].
//!
//! [`DocAskError::is_completion_failure`] is the single place that draws the
//! line between the two classes; the web handler keys its status code and
//! rendering policy off it.

use thiserror::Error;

/// All errors returned by the docask library.
#[derive(Debug, Error)]
pub enum DocAskError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// No API key was supplied.
    #[error("No API key provided. Enter your API key to continue.")]
    MissingApiKey,

    /// No file was uploaded, or the uploaded file was empty.
    #[error("No document uploaded. Choose a .pdf or .docx file.")]
    MissingFile,

    /// The filename extension maps to no known reader.
    #[error("Unsupported file format: '{extension}'. Upload a .pdf or .docx file.")]
    UnsupportedFormat { extension: String },

    /// The bytes claimed to be a PDF but could not be parsed.
    #[error("Failed to read PDF: {detail}")]
    PdfParse { detail: String },

    /// The bytes claimed to be a DOCX but could not be parsed.
    #[error("Failed to read DOCX: {detail}")]
    DocxParse { detail: String },

    /// The document parsed but yielded no text to ask about.
    #[error("The document contains no extractable text.")]
    EmptyDocument,

    // ── Completion errors ─────────────────────────────────────────────────
    /// Transport-level failure reaching the completion API.
    #[error("Completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The completion API answered with a non-success status.
    #[error("Completion API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The completion API answered 2xx but the body was not usable.
    #[error("Malformed completion response: {detail}")]
    MalformedResponse { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DocAskError {
    /// True for errors that occur once the completion request is in flight.
    ///
    /// Input errors halt processing; completion errors are rendered inline
    /// as a prefixed string in place of the answer.
    pub fn is_completion_failure(&self) -> bool {
        matches!(
            self,
            DocAskError::Http(_)
                | DocAskError::Api { .. }
                | DocAskError::MalformedResponse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display_names_extension() {
        let e = DocAskError::UnsupportedFormat {
            extension: ".txt".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains(".txt"), "got: {msg}");
        assert!(msg.contains(".docx"), "got: {msg}");
    }

    #[test]
    fn api_error_display() {
        let e = DocAskError::Api {
            status: 401,
            message: "invalid api key".into(),
        };
        assert!(e.to_string().contains("401"));
        assert!(e.to_string().contains("invalid api key"));
    }

    #[test]
    fn completion_failure_classification() {
        assert!(DocAskError::Api {
            status: 500,
            message: "boom".into()
        }
        .is_completion_failure());
        assert!(DocAskError::MalformedResponse {
            detail: "no choices".into()
        }
        .is_completion_failure());

        assert!(!DocAskError::MissingApiKey.is_completion_failure());
        assert!(!DocAskError::UnsupportedFormat {
            extension: ".txt".into()
        }
        .is_completion_failure());
        assert!(!DocAskError::EmptyDocument.is_completion_failure());
    }
}
