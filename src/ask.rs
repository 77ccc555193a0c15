//! Top-level orchestration: extract, compose, complete.
//!
//! [`ask`] is the library's primary entry point and the whole data flow of
//! the tool in one function:
//!
//! ```text
//! bytes + filename ──▶ extract ──▶ prompt ──▶ completion ──▶ AskOutput
//! ```
//!
//! Everything before the completion call is fatal on failure (the UI shows
//! an error block and stops); the completion call itself is the one step
//! whose failure is rendered inline, via [`render_error`].

use crate::completion::{ChatMessage, CompletionClient, TokenUsage};
use crate::config::AskConfig;
use crate::error::DocAskError;
use crate::{extract, prompt};
use std::time::Instant;
use tracing::{debug, info};

/// Prefix applied to completion failures rendered in place of an answer.
pub const ERROR_PREFIX: &str = "❌ Error: ";

/// One question about one uploaded document.
#[derive(Debug)]
pub struct AskRequest<'a> {
    /// Uploaded filename; only the extension is consulted.
    pub filename: &'a str,
    /// Raw uploaded bytes.
    pub bytes: &'a [u8],
    /// Free-text instruction; blank falls back to the configured default.
    pub instruction: &'a str,
    /// User-supplied API key, held only for this request.
    pub api_key: &'a str,
}

/// The result of a successful exchange.
#[derive(Debug)]
pub struct AskOutput {
    /// The model's answer text.
    pub answer: String,
    /// Characters of text extracted from the document.
    pub document_chars: usize,
    /// Characters in the composed prompt (after truncation).
    pub prompt_chars: usize,
    /// Token usage reported by the API, when available.
    pub usage: Option<TokenUsage>,
    /// Wall-clock duration of the whole exchange.
    pub duration_ms: u64,
}

/// Extract the document, compose the prompt, and ask the model.
///
/// # Errors
///
/// Input errors (`MissingApiKey`, `MissingFile`, `UnsupportedFormat`,
/// parse failures, `EmptyDocument`) mean nothing was sent to the API.
/// Completion errors (`Http`, `Api`, `MalformedResponse`) mean the document
/// was read but the exchange failed; render those with [`render_error`].
pub async fn ask(request: &AskRequest<'_>, config: &AskConfig) -> Result<AskOutput, DocAskError> {
    let start = Instant::now();

    if request.api_key.trim().is_empty() {
        return Err(DocAskError::MissingApiKey);
    }
    if request.filename.is_empty() || request.bytes.is_empty() {
        return Err(DocAskError::MissingFile);
    }

    let text = extract::extract_text(request.bytes, request.filename)?;
    if text.trim().is_empty() {
        return Err(DocAskError::EmptyDocument);
    }
    let document_chars = text.chars().count();
    info!(file = request.filename, chars = document_chars, "document read");

    let instruction = if request.instruction.trim().is_empty() {
        config.default_instruction.as_str()
    } else {
        request.instruction
    };
    let prompt = prompt::compose(instruction, &text, config.max_document_chars);
    let prompt_chars = prompt.chars().count();
    debug!(prompt_chars, "prompt composed");

    let client = CompletionClient::new(request.api_key, config)?;
    let messages = [ChatMessage::user(prompt)];
    let completion = client.complete(&messages, config).await?;

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(duration_ms, "completion received");

    Ok(AskOutput {
        answer: completion.content,
        document_chars,
        prompt_chars,
        usage: completion.usage,
        duration_ms,
    })
}

/// Render an error as the string shown in place of an answer.
pub fn render_error(error: &DocAskError) -> String {
    format!("{ERROR_PREFIX}{error}")
}
