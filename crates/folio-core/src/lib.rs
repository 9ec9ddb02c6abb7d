pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod traits;
pub mod util;

#[cfg(test)]
pub mod testutil;

pub use config::{LlmConfig, PipelineConfig};
pub use error::{AppError, Stage};
pub use models::{RunReport, compute_hash};
pub use pipeline::ConversionService;
pub use traits::{Fetcher, Transformer, Writer};
pub use util::strip_code_fences;
