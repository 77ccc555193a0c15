//! CLI binary for docask.
//!
//! A thin shim over the library crate: parses flags, initialises logging,
//! and serves the single-page web UI.

use anyhow::{Context, Result};
use clap::Parser;
use docask::{AskConfig, OPENAI_API_BASE};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve the UI on the default local port
  docask

  # Serve on another address
  docask --bind 0.0.0.0:9000

  # Point at an OpenAI-compatible endpoint (Ollama, vLLM, LiteLLM, ...)
  docask --api-base http://localhost:11434/v1 --model llama3.2

ENVIRONMENT VARIABLES:
  DOCASK_BIND       Bind address (same as --bind)
  DOCASK_MODEL      Chat model id (same as --model)
  DOCASK_API_BASE   Completion API base URL (same as --api-base)
  RUST_LOG          Tracing filter, e.g. RUST_LOG=docask=debug

The API key is never read from the environment or flags: the user enters it
in the page, and it lives only for the duration of each request.
"#;

/// Serve a web page that extracts information from uploaded documents via an LLM.
#[derive(Parser, Debug)]
#[command(
    name = "docask",
    version,
    about = "Ask a language model questions about an uploaded PDF or DOCX",
    long_about = "Serves a single-page web UI: upload a .pdf or .docx, type an instruction, \
and the document's text is sent with it to a chat-completion API. The answer (or an inline \
error) is rendered in the page. Nothing is stored.",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Address to serve the UI on.
    #[arg(long, env = "DOCASK_BIND", default_value = "127.0.0.1:8787")]
    bind: SocketAddr,

    /// Chat model id sent with every completion request.
    #[arg(long, env = "DOCASK_MODEL", default_value = "gpt-3.5-turbo")]
    model: String,

    /// Completion API base URL (any OpenAI-compatible endpoint).
    #[arg(long, env = "DOCASK_API_BASE", default_value = OPENAI_API_BASE)]
    api_base: String,

    /// Per-request completion timeout in seconds.
    #[arg(long, env = "DOCASK_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOCASK_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "DOCASK_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let config = AskConfig::builder()
        .model(&cli.model)
        .api_base_url(&cli.api_base)
        .api_timeout_secs(cli.api_timeout)
        .build()
        .context("Invalid configuration")?;

    // ── Serve ────────────────────────────────────────────────────────────
    let app = docask::router(config);
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    let addr = listener.local_addr().context("Failed to read bound address")?;

    if !cli.quiet {
        eprintln!("docask serving on {}", bold(&format!("http://{addr}/")));
        eprintln!(
            "   model {}  —  endpoint {}",
            dim(&cli.model),
            dim(&cli.api_base)
        );
    }

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
