use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

impl ChefError {
    pub fn config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Config { key: key.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ChefError>;
