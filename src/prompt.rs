//! Prompt composition.
//!
//! Centralising the prompt shape here keeps it in exactly one place and lets
//! unit tests inspect the outbound text without a live API.
//!
//! The composed prompt is the user's instruction followed by a truncated
//! excerpt of the document:
//!
//! ```text
//! {instruction}
//!
//! Document:
//! {first max_chars characters of text}
//! ```
//!
//! The truncation bounds request size only — it is counted in characters,
//! never bytes, so it can never split a multi-byte UTF-8 sequence.

/// Header inserted between the instruction and the document excerpt.
pub const DOCUMENT_HEADER: &str = "\n\nDocument:\n";

/// Compose the single-turn prompt from an instruction and the extracted
/// document text, keeping at most `max_chars` characters of the text.
pub fn compose(instruction: &str, document_text: &str, max_chars: usize) -> String {
    let excerpt = truncate_chars(document_text, max_chars);
    format!("{instruction}{DOCUMENT_HEADER}{excerpt}")
}

/// The longest prefix of `s` holding at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
