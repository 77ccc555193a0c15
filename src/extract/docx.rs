//! DOCX text extraction via `docx-rust`.
//!
//! A DOCX body is a sequence of block-level elements; only paragraphs carry
//! the running text this tool cares about. Every paragraph's text is kept in
//! document order — including empty paragraphs, which are deliberate blank
//! lines in the source document — and the list is joined with `"\n"`.

use crate::error::DocAskError;
use docx_rust::document::BodyContent;
use docx_rust::DocxFile;
use std::io::Cursor;
use tracing::debug;

/// Extract every paragraph's text, joined by newlines.
pub fn extract(bytes: &[u8]) -> Result<String, DocAskError> {
    let file = DocxFile::from_reader(Cursor::new(bytes)).map_err(|e| DocAskError::DocxParse {
        detail: e.to_string(),
    })?;
    let docx = file.parse().map_err(|e| DocAskError::DocxParse {
        detail: e.to_string(),
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for content in &docx.document.body.content {
        if let BodyContent::Paragraph(paragraph) = content {
            let mut text = String::new();
            for run_text in paragraph.iter_text() {
                text.push_str(run_text);
            }
            paragraphs.push(text);
        }
    }

    debug!(paragraphs = paragraphs.len(), "DOCX text extracted");
    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rust::document::Paragraph;
    use docx_rust::Docx;

    /// Build an in-memory DOCX with one paragraph per entry.
    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::default();
        for text in paragraphs {
            docx.document.push(Paragraph::default().push_text(*text));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.write(&mut buf).expect("serialise DOCX");
        buf.into_inner()
    }

    #[test]
    fn joins_paragraphs_with_newlines() {
        let bytes = build_docx(&["p1", "p2", "p3"]);
        assert_eq!(extract(&bytes).unwrap(), "p1\np2\np3");
    }

    #[test]
    fn empty_paragraphs_are_kept() {
        let bytes = build_docx(&["before", "", "after"]);
        assert_eq!(extract(&bytes).unwrap(), "before\n\nafter");
    }

    #[test]
    fn single_paragraph_has_no_trailing_newline() {
        let bytes = build_docx(&["only"]);
        assert_eq!(extract(&bytes).unwrap(), "only");
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = extract(b"not a zip archive").unwrap_err();
        assert!(matches!(err, DocAskError::DocxParse { .. }), "got {err:?}");
    }
}
