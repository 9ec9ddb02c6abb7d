use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The part of a run an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Config,
    Fetch,
    Transform,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
            Stage::Transform => "transform",
            Stage::Write => "write",
        };
        f.write_str(name)
    }
}

/// Application-wide error types for Folio.
#[derive(Error, Debug)]
pub enum AppError {
    /// A configuration value is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No API credential was supplied for the LLM provider.
    #[error("Missing API key: set {0}")]
    MissingCredential(String),

    /// Downloading the source article failed.
    #[error("Failed to fetch article from {url}: {message}")]
    FetchError {
        url: String,
        message: String,
        status_code: Option<u16>,
    },

    /// The LLM provider answered with a non-success status.
    #[error("LLM error (HTTP {status_code}): {message}")]
    LlmStatus { status_code: u16, message: String },

    /// The request reached the provider but no usable response came back.
    #[error("No response received from LLM provider: {0}")]
    LlmNoResponse(String),

    /// The request could not be built or sent.
    #[error("LLM request could not be sent: {0}")]
    LlmRequestFailed(String),

    /// The provider returned an empty completion list.
    #[error("No response from LLM provider: completion list was empty")]
    EmptyCompletion,

    /// JSON serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Writing the generated HTML failed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// The stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            AppError::ConfigError(_) => Stage::Config,
            AppError::FetchError { .. } => Stage::Fetch,
            AppError::MissingCredential(_)
            | AppError::LlmStatus { .. }
            | AppError::LlmNoResponse(_)
            | AppError::LlmRequestFailed(_)
            | AppError::EmptyCompletion
            | AppError::SerializationError(_) => Stage::Transform,
            AppError::WriteError { .. } => Stage::Write,
        }
    }
}
