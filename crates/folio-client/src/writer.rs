use std::path::Path;

use folio_core::error::AppError;
use folio_core::traits::Writer;

/// Writes generated HTML to disk as UTF-8, truncating any existing file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileWriter;

impl FileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Writer for FileWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), AppError> {
        tokio::fs::write(path, content.as_bytes())
            .await
            .map_err(|source| AppError::WriteError {
                path: path.to_path_buf(),
                source,
            })
    }
}
