use std::future::Future;
use std::path::Path;

use crate::error::AppError;

/// Fetches the raw article text from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Turns article text into an HTML fragment, typically via an LLM.
pub trait Transformer: Send + Sync + Clone {
    fn transform(&self, article: &str) -> impl Future<Output = Result<String, AppError>> + Send;

    /// Model identifier reported in the run summary.
    fn model(&self) -> &str;
}

/// Persists generated HTML, replacing whatever was at `path`.
pub trait Writer: Send + Sync + Clone {
    fn write(
        &self,
        path: &Path,
        content: &str,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}
