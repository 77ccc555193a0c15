//! Single-page web UI and its two API routes.
//!
//! The page is one static HTML form — API key (masked), file picker,
//! instruction textarea, one button — and a script that POSTs the form as
//! multipart to `/api/ask` and renders the JSON reply. The button blocks
//! until the reply arrives; there is no streaming and no session state.
//!
//! ## Response policy
//!
//! * Input-stage failure (missing key/file, unsupported extension, parser
//!   error): HTTP 422 with `status:"error"` — the page shows the message in
//!   the error style and stops.
//! * Completion-stage failure: HTTP 200 with the result string set to the
//!   prefixed error text — shown inline where the answer would have been.

use crate::ask::{ask, render_error, AskRequest};
use crate::completion::TokenUsage;
use crate::config::AskConfig;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Largest accepted upload. Generous for text documents; a cap is still
/// needed so a stray upload cannot exhaust memory.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the application router.
pub fn router(config: AskConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/health", get(health))
        .route("/api/ask", post(handle_ask))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

/// JSON reply for `/api/ask`.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub status: &'static str,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl AskResponse {
    fn error(message: String) -> Self {
        Self {
            status: "error",
            result: message,
            document_chars: None,
            usage: None,
            duration_ms: None,
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Collected multipart fields of one submission.
#[derive(Default)]
struct UploadForm {
    api_key: String,
    instruction: String,
    filename: String,
    bytes: Vec<u8>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, String> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Invalid upload: {e}"))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "api_key" => {
                form.api_key = field.text().await.map_err(|e| format!("Invalid upload: {e}"))?;
            }
            "instruction" => {
                form.instruction =
                    field.text().await.map_err(|e| format!("Invalid upload: {e}"))?;
            }
            "file" => {
                form.filename = field.file_name().unwrap_or_default().to_string();
                form.bytes = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Invalid upload: {e}"))?
                    .to_vec();
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn handle_ask(
    State(config): State<Arc<AskConfig>>,
    multipart: Multipart,
) -> (StatusCode, Json<AskResponse>) {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(AskResponse::error(message)),
            );
        }
    };

    let request = AskRequest {
        filename: &form.filename,
        bytes: &form.bytes,
        instruction: &form.instruction,
        api_key: &form.api_key,
    };

    match ask(&request, &config).await {
        Ok(output) => (
            StatusCode::OK,
            Json(AskResponse {
                status: "ok",
                result: output.answer,
                document_chars: Some(output.document_chars),
                usage: output.usage,
                duration_ms: Some(output.duration_ms),
            }),
        ),
        Err(e) if e.is_completion_failure() => {
            warn!(error = %e, "completion request failed");
            // Shown inline where the answer would have appeared.
            (
                StatusCode::OK,
                Json(AskResponse {
                    status: "ok",
                    result: render_error(&e),
                    document_chars: None,
                    usage: None,
                    duration_ms: None,
                }),
            )
        }
        Err(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(AskResponse::error(e.to_string())),
        ),
    }
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>docask — Document Extractor</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 720px; color: #1d1d1f; }
    h1 { margin-bottom: 0.25rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-top: 0.75rem; font-weight: 600; }
    input, textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    textarea { min-height: 4rem; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    button:disabled { opacity: 0.5; }
    pre { background: #f6f8fa; padding: 1rem; overflow: auto; white-space: pre-wrap; }
    .error { color: #b00020; }
    .meta { color: #666; font-size: 0.85rem; }
  </style>
</head>
<body>
  <h1>📄 docask</h1>
  <p>Upload a document and ask the model to extract anything you want.</p>

  <div class="card">
    <label for="apiKey">🔑 API key</label>
    <input id="apiKey" type="password" autocomplete="off" placeholder="sk-..." />

    <label for="fileInput">📤 Document (.pdf or .docx)</label>
    <input id="fileInput" type="file" accept=".pdf,.docx" />

    <label for="instruction">🧠 What do you want to extract?</label>
    <textarea id="instruction">Extract summary, names, dates, and key points.</textarea>

    <button id="askBtn">🚀 Run extraction</button>
    <div id="status" class="meta"></div>
  </div>

  <div class="card">
    <h2>Result</h2>
    <pre id="output"></pre>
    <div id="stats" class="meta"></div>
  </div>

  <script>
    const askBtn = document.getElementById('askBtn');
    const status = document.getElementById('status');
    const output = document.getElementById('output');
    const stats = document.getElementById('stats');

    askBtn.addEventListener('click', async () => {
      const key = document.getElementById('apiKey').value;
      const fileInput = document.getElementById('fileInput');
      if (!key) { status.textContent = 'Enter your API key to continue.'; return; }
      if (!fileInput.files.length) { status.textContent = 'Select a file first.'; return; }

      const formData = new FormData();
      formData.append('api_key', key);
      formData.append('instruction', document.getElementById('instruction').value);
      formData.append('file', fileInput.files[0]);

      askBtn.disabled = true;
      status.textContent = '🔍 Reading document and talking to the model...';
      output.textContent = '';
      output.classList.remove('error');
      stats.textContent = '';

      try {
        const res = await fetch('/api/ask', { method: 'POST', body: formData });
        const json = await res.json();
        if (json.status === 'ok') {
          status.textContent = '✅ Done.';
          output.textContent = json.result;
          if (json.usage) {
            stats.textContent = json.usage.prompt_tokens + ' tokens in / '
              + json.usage.completion_tokens + ' tokens out — '
              + json.duration_ms + ' ms';
          }
        } else {
          status.textContent = '';
          output.classList.add('error');
          output.textContent = json.result;
        }
      } catch (err) {
        output.classList.add('error');
        output.textContent = 'Request failed: ' + err;
        status.textContent = '';
      } finally {
        askBtn.disabled = false;
      }
    });
  </script>
</body>
</html>
"#;
