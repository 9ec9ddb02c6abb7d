use std::time::Duration;

use folio_core::error::AppError;
use folio_core::traits::Fetcher;
use reqwest::Client;

const USER_AGENT: &str = concat!("Folio/", env!("CARGO_PKG_VERSION"));

/// HTTP fetcher using reqwest.
///
/// Downloads the article body as text. No timeout is applied unless one is
/// set with [`with_timeout`](Self::with_timeout), and the body size is not
/// limited.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Result<Self, AppError> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, AppError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let fetch_error = |message: String, status_code: Option<u16>| AppError::FetchError {
            url: url.to_string(),
            message,
            status_code,
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                fetch_error(format!("Request timed out: {e}"), None)
            } else if e.is_connect() {
                fetch_error(format!("Connection failed: {e}"), None)
            } else {
                fetch_error(e.to_string(), None)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(
                format!("HTTP {}", status.as_u16()),
                Some(status.as_u16()),
            ));
        }

        response.text().await.map_err(|e| {
            fetch_error(
                format!("Failed to read response body: {e}"),
                Some(status.as_u16()),
            )
        })
    }
}
