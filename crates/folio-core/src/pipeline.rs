use chrono::Utc;

use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::models::{RunReport, compute_hash};
use crate::traits::{Fetcher, Transformer, Writer};

/// Orchestrates the conversion pipeline: fetch → transform → write.
///
/// Generic over all external dependencies via traits, so the stages can be
/// replaced by mocks without real HTTP or filesystem access. Stages run
/// strictly in order and the first failure ends the run; nothing is written
/// unless both earlier stages succeeded.
pub struct ConversionService<F, T, W>
where
    F: Fetcher,
    T: Transformer,
    W: Writer,
{
    fetcher: F,
    transformer: T,
    writer: W,
    config: PipelineConfig,
}

impl<F, T, W> ConversionService<F, T, W>
where
    F: Fetcher,
    T: Transformer,
    W: Writer,
{
    /// Create a new ConversionService, validating the pipeline configuration.
    pub fn new(
        fetcher: F,
        transformer: T,
        writer: W,
        config: PipelineConfig,
    ) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            fetcher,
            transformer,
            writer,
            config,
        })
    }

    /// Run the pipeline once.
    ///
    /// 1. Fetch the article text from the source URL
    /// 2. Convert it to HTML via the transformer
    /// 3. Write the HTML to the output path, replacing any existing file
    pub async fn run(&self) -> Result<RunReport, AppError> {
        let started_at = Utc::now();
        let url = self.config.source_url.as_str();
        let output_path = self.config.output_path.as_path();

        // 1. Fetch
        tracing::info!(%url, "Fetching article...");
        let article = self.fetcher.fetch(url).await?;
        tracing::info!(bytes = article.len(), "Article fetched");

        // 2. Transform
        tracing::info!(model = %self.transformer.model(), "Generating HTML...");
        let html = self.transformer.transform(&article).await?;
        tracing::info!(bytes = html.len(), "HTML generated");

        // 3. Write
        tracing::info!(path = %output_path.display(), "Writing HTML to file...");
        self.writer.write(output_path, &html).await?;
        tracing::info!(path = %output_path.display(), "File saved");

        Ok(RunReport {
            source_url: url.to_string(),
            output_path: output_path.to_path_buf(),
            model: self.transformer.model().to_string(),
            article_bytes: article.len(),
            html_bytes: html.len(),
            article_hash: compute_hash(&article),
            html_hash: compute_hash(&html),
            started_at,
            finished_at: Utc::now(),
        })
    }
}
