//! # docask
//!
//! Ask a language model to extract anything from an uploaded PDF or DOCX.
//!
//! A single-user interactive tool: the browser form collects an API key, a
//! document, and a free-text instruction; the server extracts the document's
//! text, prepends the instruction to a truncated excerpt, issues one
//! chat-completion request, and renders the answer (or an inline error).
//! Nothing is persisted — no files, no results, no sessions.
//!
//! ## Pipeline Overview
//!
//! ```text
//! upload (bytes + filename)
//!  │
//!  ├─ 1. Extract   select reader by extension (lopdf | docx-rust)
//!  ├─ 2. Compose   instruction + first 7 000 chars of text
//!  ├─ 3. Complete  one POST /chat/completions, fixed params, no retry
//!  └─ 4. Display   answer text, or a "❌ Error: …" string inline
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docask::{ask, AskConfig, AskRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("report.pdf")?;
//!     let config = AskConfig::default();
//!     let output = ask(
//!         &AskRequest {
//!             filename: "report.pdf",
//!             bytes: &bytes,
//!             instruction: "List every date mentioned.",
//!             api_key: "sk-...",
//!         },
//!         &config,
//!     )
//!     .await?;
//!     println!("{}", output.answer);
//!     Ok(())
//! }
//! ```
//!
//! The `cli` feature (default) builds the `docask` binary, which serves the
//! web UI on a local port.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod ask;
pub mod completion;
pub mod config;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod web;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use ask::{ask, render_error, AskOutput, AskRequest, ERROR_PREFIX};
pub use completion::{ChatMessage, Completion, CompletionClient, TokenUsage};
pub use config::{AskConfig, AskConfigBuilder, DEFAULT_INSTRUCTION, OPENAI_API_BASE};
pub use error::DocAskError;
pub use extract::{extract_text, DocumentFormat};
pub use web::router;
