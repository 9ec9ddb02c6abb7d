use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

pub const DEFAULT_SOURCE_URL: &str =
    "https://cdn.oxido.pl/hr/Zadanie%20dla%20JJunior%20AI%20Developera%20-%20tresc%20artykulu.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "artykul.html";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Name of the environment variable the CLI reads the API key from.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where the article comes from and where the HTML goes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source_url: String,
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl PipelineConfig {
    /// Check that the source is an absolute http(s) URL and the output path is set.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_http_url("source URL", &self.source_url)?;
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::ConfigError("output path must not be empty".into()));
        }
        Ok(())
    }
}

/// Parameters for the chat-completion call.
#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Overrides the built-in system prompt when set.
    pub system_prompt: Option<String>,
    /// No timeout is applied when `None`.
    pub timeout: Option<Duration>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: None,
            timeout: None,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("system_prompt", &self.system_prompt)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LlmConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Returns the API key, or `MissingCredential` if it is unset or blank.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AppError::MissingCredential(API_KEY_ENV.to_string())),
        }
    }

    /// Validate model parameters and the base URL.
    ///
    /// The API key is checked separately by [`require_api_key`](Self::require_api_key).
    pub fn validate(&self) -> Result<(), AppError> {
        validate_http_url("base URL", &self.base_url)?;
        if self.model.trim().is_empty() {
            return Err(AppError::ConfigError("model must not be empty".into()));
        }
        if self.max_tokens == 0 {
            return Err(AppError::ConfigError("max_tokens must be at least 1".into()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ConfigError(format!(
                "Invalid temperature {}: must be between 0.0 and 2.0",
                self.temperature
            )));
        }
        Ok(())
    }
}

fn validate_http_url(label: &str, raw: &str) -> Result<(), AppError> {
    let parsed =
        Url::parse(raw).map_err(|e| AppError::ConfigError(format!("Invalid {label} '{raw}': {e}")))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::ConfigError(format!(
                "{label} scheme '{scheme}' is not allowed (only http/https)"
            )));
        }
    }

    if parsed.host_str().is_none() {
        return Err(AppError::ConfigError(format!("{label} '{raw}' has no host")));
    }

    Ok(())
}
