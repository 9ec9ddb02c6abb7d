use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_client::{FileWriter, OpenAiTransformer, ReqwestFetcher};
use folio_core::config::{self, LlmConfig, PipelineConfig};
use folio_core::{AppError, ConversionService, RunReport, Stage};

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Convert a plain-text article into semantic HTML with an LLM"
)]
struct Cli {
    /// URL of the plain-text article
    #[arg(short, long, env = "FOLIO_SOURCE_URL", default_value = config::DEFAULT_SOURCE_URL)]
    url: String,

    /// File to write the generated HTML to (overwritten if present)
    #[arg(short, long, env = "FOLIO_OUTPUT", default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// LLM model to use
    #[arg(short, long, env = "FOLIO_MODEL", default_value = config::DEFAULT_MODEL)]
    model: String,

    /// OpenAI-compatible API base URL
    #[arg(short, long, env = "FOLIO_BASE_URL", default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// API key (reads from OPENAI_API_KEY env var if not provided)
    #[arg(short, long, env = config::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Maximum number of tokens the model may generate
    #[arg(long, default_value_t = config::DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(long, default_value_t = config::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Replace the built-in system prompt
    #[arg(long)]
    system_prompt: Option<String>,

    /// Abort HTTP requests after this many seconds (no timeout by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the run report as JSON to stdout
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log failures but still exit with status 0
    #[arg(long, default_value_t = false)]
    soft_fail: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("folio=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let soft_fail = cli.soft_fail;

    match cmd_convert(cli).await {
        Ok(report) => {
            tracing::info!(
                html_hash = %&report.html_hash[..8],
                html_bytes = report.html_bytes,
                "Conversion complete"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let stage = e.stage();
            tracing::error!(%stage, "{e}");
            if soft_fail {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(exit_status(stage)))
            }
        }
    }
}

async fn cmd_convert(cli: Cli) -> Result<RunReport, AppError> {
    let timeout = cli.timeout_secs.map(Duration::from_secs);

    let llm = LlmConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        model: cli.model,
        max_tokens: cli.max_tokens,
        temperature: cli.temperature,
        system_prompt: cli.system_prompt,
        timeout,
    };
    let pipeline = PipelineConfig {
        source_url: cli.url,
        output_path: cli.output,
    };

    let fetcher = match timeout {
        Some(t) => ReqwestFetcher::with_timeout(t)?,
        None => ReqwestFetcher::new()?,
    };
    let transformer = OpenAiTransformer::new(&llm)?;
    let svc = ConversionService::new(fetcher, transformer, FileWriter::new(), pipeline)?;

    svc.run().await
}

/// Map a failed stage to a sysexits-style status code.
fn exit_status(stage: Stage) -> u8 {
    match stage {
        Stage::Config => 78,                   // EX_CONFIG
        Stage::Fetch | Stage::Transform => 69, // EX_UNAVAILABLE
        Stage::Write => 73,                    // EX_CANTCREAT
    }
}
