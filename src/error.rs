//! Error types for searchable.

use thiserror::Error;

use crate::catalog::LoadError;

#[derive(Debug, Error)]
pub enum SearchableError {
    #[error("catalog load failed: {0}")]
    Load(#[from] LoadError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("search engine is no longer running")]
    EngineClosed,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SearchableError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Load(_) => "load_failed",
            Self::Config(_) => "config_error",
            Self::MissingConfig(_) => "missing_config",
            Self::EngineClosed => "engine_closed",
            Self::InvalidInput(_) => "invalid_input",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchableError>;
