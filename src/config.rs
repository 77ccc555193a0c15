//! Configuration for a document question.
//!
//! Every knob lives in one [`AskConfig`] struct, built via
//! [`AskConfigBuilder`]. Keeping the whole request shape in one place makes
//! it trivial to share a config between the web handler and tests, and to
//! point the client at a mock endpoint without touching any call site.

use crate::error::DocAskError;

/// Default chat-completion endpoint base (OpenAI-compatible).
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Instruction used when the user submits an empty one.
pub const DEFAULT_INSTRUCTION: &str = "Extract summary, names, dates, and key points.";

/// Configuration for extraction and the completion request.
///
/// Built via [`AskConfig::builder()`] or [`AskConfig::default()`].
///
/// # Example
/// ```rust
/// use docask::AskConfig;
///
/// let config = AskConfig::builder()
///     .model("gpt-4o-mini")
///     .max_tokens(500)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct AskConfig {
    /// Chat model identifier. Default: "gpt-3.5-turbo".
    pub model: String,

    /// Sampling temperature. Default: 0.2.
    ///
    /// Low temperature keeps the model faithful to what is actually in the
    /// document, which is what extraction wants. Higher values introduce
    /// paraphrasing and invented detail.
    pub temperature: f32,

    /// Maximum tokens the model may generate. Default: 1000.
    pub max_tokens: u32,

    /// Maximum number of document characters included in the prompt.
    /// Default: 7000.
    ///
    /// A fixed, unvalidated truncation whose only job is to bound request
    /// size. Characters, not bytes — the cut must never split a multi-byte
    /// UTF-8 sequence.
    pub max_document_chars: usize,

    /// Base URL of the completion API. Default: [`OPENAI_API_BASE`].
    ///
    /// Any OpenAI-compatible endpoint works; tests point this at a local
    /// mock server.
    pub api_base_url: String,

    /// HTTP timeout for the completion call, in seconds. Default: 60.
    ///
    /// The only failure-time bound in the system. There is no retry: when
    /// this elapses the request fails and the error is shown inline.
    pub api_timeout_secs: u64,

    /// Instruction used when the submitted one is empty. Default:
    /// [`DEFAULT_INSTRUCTION`].
    pub default_instruction: String,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            max_document_chars: 7000,
            api_base_url: OPENAI_API_BASE.to_string(),
            api_timeout_secs: 60,
            default_instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

impl AskConfig {
    /// Create a new builder for `AskConfig`.
    pub fn builder() -> AskConfigBuilder {
        AskConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`AskConfig`].
#[derive(Debug)]
pub struct AskConfigBuilder {
    config: AskConfig,
}

impl AskConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn max_document_chars(mut self, n: usize) -> Self {
        self.config.max_document_chars = n;
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn default_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.config.default_instruction = instruction.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AskConfig, DocAskError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(DocAskError::InvalidConfig("Model must not be empty".into()));
        }
        if c.max_tokens == 0 {
            return Err(DocAskError::InvalidConfig("max_tokens must be ≥ 1".into()));
        }
        if c.max_document_chars == 0 {
            return Err(DocAskError::InvalidConfig(
                "max_document_chars must be ≥ 1".into(),
            ));
        }
        if c.api_base_url.trim().is_empty() {
            return Err(DocAskError::InvalidConfig(
                "api_base_url must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = AskConfig::default();
        assert_eq!(c.model, "gpt-3.5-turbo");
        assert_eq!(c.temperature, 0.2);
        assert_eq!(c.max_tokens, 1000);
        assert_eq!(c.max_document_chars, 7000);
        assert_eq!(c.api_base_url, OPENAI_API_BASE);
    }

    #[test]
    fn temperature_is_clamped() {
        let c = AskConfig::builder().temperature(9.0).build().unwrap();
        assert_eq!(c.temperature, 2.0);
    }

    #[test]
    fn rejects_zero_max_tokens() {
        assert!(AskConfig::builder().max_tokens(0).build().is_err());
    }

    #[test]
    fn rejects_empty_model() {
        assert!(AskConfig::builder().model("  ").build().is_err());
    }
}
