use crate::error::{ChefError, Result};
use crate::API_KEY_ENV;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChefConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Credential for the generation API. Absence is tolerated at startup.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ChefConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 5000,
            },
            upstream: UpstreamConfig {
                api_key: None,
                base_url: "https://generativelanguage.googleapis.com".into(),
                timeout_secs: None,
            },
            log_format: LogFormat::Pretty,
        }
    }
}

impl ChefConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.upstream.api_key = lookup(API_KEY_ENV).filter(|k| !k.is_empty());

        if let Some(host) = lookup("CHEFBOT_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("CHEFBOT_PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| ChefError::config("CHEFBOT_PORT", format!("not a port number: {port}")))?;
        }
        if let Some(url) = lookup("CHEFBOT_GEMINI_BASE_URL") {
            config.upstream.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("CHEFBOT_UPSTREAM_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ChefError::config("CHEFBOT_UPSTREAM_TIMEOUT_SECS", format!("not a number of seconds: {secs}"))
            })?;
            config.upstream.timeout_secs = Some(secs);
        }
        if let Some(format) = lookup("CHEFBOT_LOG_FORMAT") {
            config.log_format = match format.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                other => {
                    return Err(ChefError::config("CHEFBOT_LOG_FORMAT", format!("unknown format: {other}")))
                }
            };
        }

        Ok(config)
    }

    pub fn api_configured(&self) -> bool {
        self.upstream.api_key.is_some()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
