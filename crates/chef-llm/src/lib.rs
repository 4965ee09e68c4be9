//! Upstream text generation for ChefBot.
//!
//! [`TextGenerator`] is the seam handlers call through; [`GeminiClient`] is the
//! production implementation. [`classify_error`] maps failure text onto the
//! small set of outcomes callers render differently.

pub mod classify;
pub mod error;
pub mod gemini;

pub use classify::{classify_error, UpstreamErrorKind};
pub use error::LlmError;
pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every request. Not caller-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}

/// Something that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`.
    ///
    /// A well-formed reply without any text is [`LlmError::EmptyResponse`].
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Whether a credential is available.
    fn is_configured(&self) -> bool;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
