//! Shared configuration and error types for the ChefBot relay.

pub mod config;
pub mod error;

pub use config::{ChefConfig, LogFormat, ServerConfig, UpstreamConfig};
pub use error::{ChefError, Result};

/// Model identifier sent to the upstream generation API.
pub const MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the upstream API credential.
pub const API_KEY_ENV: &str = "GENAI_API_KEY";

/// Session used when a request does not name one.
pub const DEFAULT_SESSION_ID: &str = "default";
