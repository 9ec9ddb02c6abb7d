use std::path::PathBuf;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Summary of a successful run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunReport {
    pub source_url: String,
    pub output_path: PathBuf,
    pub model: String,
    pub article_bytes: usize,
    pub html_bytes: usize,
    /// SHA-256 of the fetched article text
    pub article_hash: String,
    /// SHA-256 of the HTML that was written
    pub html_hash: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Compute a SHA-256 hash of a string, returned as 64-char hex.
pub fn compute_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
