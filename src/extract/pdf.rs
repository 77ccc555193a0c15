//! PDF text extraction via `lopdf`.
//!
//! The reader walks pages in document order and extracts each page's text
//! individually. Pages that yield nothing (scanned images, decorative
//! covers, blank separators) are skipped so the prompt is not padded with
//! empty lines; surviving page texts are joined with `"\n"`.

use crate::error::DocAskError;
use lopdf::Document;
use tracing::debug;

/// Extract the text of every page that yields non-empty text, joined by
/// newlines.
pub fn extract(bytes: &[u8]) -> Result<String, DocAskError> {
    let doc = Document::load_mem(bytes).map_err(|e| DocAskError::PdfParse {
        detail: e.to_string(),
    })?;

    let pages = doc.get_pages();
    let total = pages.len();
    let mut page_texts: Vec<String> = Vec::with_capacity(total);

    for (page_num, _object_id) in pages {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| DocAskError::PdfParse {
                detail: format!("page {page_num}: {e}"),
            })?;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!(page = page_num, "skipping page with no extractable text");
            continue;
        }
        page_texts.push(trimmed.to_string());
    }

    debug!(
        pages = total,
        with_text = page_texts.len(),
        "PDF text extracted"
    );
    Ok(page_texts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build an in-memory PDF with one page per entry in `page_texts`.
    /// An empty entry produces a page with an empty content stream.
    fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content stream"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("serialise PDF");
        buf
    }

    #[test]
    fn joins_pages_with_newlines() {
        let bytes = build_pdf(&["Alpha", "Bravo", "Charlie"]);
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Alpha\nBravo\nCharlie");
    }

    #[test]
    fn skips_pages_without_text() {
        let bytes = build_pdf(&["First page", "", "Third page"]);
        let text = extract(&bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["First page", "Third page"]);
        assert!(!text.contains("\n\n"), "empty page must not leave a gap");
    }

    #[test]
    fn all_empty_pages_yield_empty_string() {
        let bytes = build_pdf(&["", ""]);
        assert_eq!(extract(&bytes).unwrap(), "");
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, DocAskError::PdfParse { .. }), "got {err:?}");
    }
}
