use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API key not configured: set {}", chef_core::API_KEY_ENV)]
    MissingApiKey,
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Empty response from model")]
    EmptyResponse,
}
