//! Test utilities: mock implementations of the pipeline traits.
//!
//! Handwritten mocks for dependency injection in unit tests. All mocks use
//! `Arc<Mutex<_>>` for interior mutability, so clones share state and tests
//! can assert on recorded calls after the service has consumed its copy.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::{Fetcher, Transformer, Writer};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default article.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    pub urls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new(article: &str) -> Self {
        Self::with_responses(vec![Ok(article.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            urls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        self.urls.lock().unwrap().push(url.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("Default article.".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockTransformer
// ---------------------------------------------------------------------------

/// Mock transformer that returns configurable HTML and records its inputs.
#[derive(Clone)]
pub struct MockTransformer {
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
    pub inputs: Arc<Mutex<Vec<String>>>,
}

impl MockTransformer {
    pub fn new(html: &str) -> Self {
        Self::with_responses(vec![Ok(html.to_string())])
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<String, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl Transformer for MockTransformer {
    async fn transform(&self, article: &str) -> Result<String, AppError> {
        self.inputs.lock().unwrap().push(article.to_string());
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<p>default</p>".to_string())
        } else {
            responses.remove(0)
        }
    }

    fn model(&self) -> &str {
        "test-model"
    }
}

// ---------------------------------------------------------------------------
// MockWriter
// ---------------------------------------------------------------------------

/// Mock writer that records every write instead of touching the filesystem.
#[derive(Clone)]
pub struct MockWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, String)>>>,
    attempts: Arc<Mutex<usize>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockWriter {
    pub fn new() -> Self {
        Self {
            written: Arc::new(Mutex::new(Vec::new())),
            attempts: Arc::new(Mutex::new(0)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Writer whose first write fails with `error`.
    pub fn with_error(error: AppError) -> Self {
        let writer = Self::new();
        *writer.error.lock().unwrap() = Some(error);
        writer
    }

    /// Number of write attempts, successful or not.
    pub fn call_count(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

impl Default for MockWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for MockWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        *self.attempts.lock().unwrap() += 1;
        if let Some(e) = self.error.lock().unwrap().take() {
            return Err(e);
        }
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), content.to_string()));
        Ok(())
    }
}
