//! Text extraction: turn uploaded document bytes into plain text.
//!
//! Each submodule wraps exactly one format-specific reader. The reader is
//! chosen from the filename extension alone — uploads arrive as in-memory
//! bytes, so content sniffing would still need the extension to pick the
//! paragraph/page semantics anyway.
//!
//! ```text
//! bytes + filename ──▶ DocumentFormat ──▶ pdf | docx ──▶ String
//! ```
//!
//! An extension that maps to no reader is a fatal
//! [`DocAskError::UnsupportedFormat`]: nothing is extracted and no
//! completion call is made.

pub mod docx;
pub mod pdf;

use crate::error::DocAskError;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Paginated format; extracted page by page.
    Pdf,
    /// Flow format; extracted paragraph by paragraph.
    Docx,
}

impl DocumentFormat {
    /// Resolve the format from a filename, case-insensitively.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Resolve the format from a bare extension ("pdf", ".DOCX", ...).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            _ => None,
        }
    }
}

/// Extract plain text from uploaded bytes, selecting the reader by the
/// filename extension.
///
/// PDF pages that yield no text are skipped; DOCX paragraphs are kept as-is
/// (an empty paragraph is part of the document text). Both readers join
/// their units with `"\n"`.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, DocAskError> {
    let format =
        DocumentFormat::from_filename(filename).ok_or_else(|| DocAskError::UnsupportedFormat {
            extension: extension_of(filename),
        })?;

    match format {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
    }
}

/// The displayable extension of a filename, for error messages.
///
/// "report.txt" → ".txt"; a name with no dot is returned whole.
fn extension_of(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) => format!(".{ext}"),
        None => filename.to_string(),
    }
}
