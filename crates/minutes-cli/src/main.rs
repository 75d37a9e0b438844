//! Minutes CLI - convert club meeting minutes into a JSONL archive.

use clap::Parser;
use minutes_cli::config::api_key_from_env;
use minutes_cli::{mask_key, Cli, CliError, Config, API_KEY_ENV};
use minutes_extractor::{Archive, Pipeline};
use minutes_llm::GeminiProvider;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> minutes_cli::Result<()> {
    let cli = Cli::parse();

    // Load .env before the subscriber so RUST_LOG set there applies
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let config = Config::load(cli.config.as_deref())?;
    let api_key = api_key_from_env()?;
    info!("Loaded {}: {}", API_KEY_ENV, mask_key(&api_key));

    // The HTTP client gets the extraction timeout so a call abandoned by the
    // pipeline cannot keep running into the next one.
    let provider = GeminiProvider::with_timeout(
        api_key,
        config.model.as_str(),
        config.pipeline.extraction_timeout(),
    )?
    .with_endpoint(config.endpoint.as_str())
    .with_temperature(config.temperature);
    let pipeline = Pipeline::new(provider, config.pipeline)?;

    let text = tokio::fs::read_to_string(&cli.input)
        .await
        .map_err(|source| CliError::Input {
            path: cli.input.clone(),
            source,
        })?;

    let mut archive =
        Archive::open(&cli.output, &cli.error_log).map_err(|source| CliError::Output {
            records: cli.output.clone(),
            errors: cli.error_log.clone(),
            source,
        })?;

    let summary = pipeline.run(&text, &mut archive).await?;

    info!(
        "Done: {} of {} meetings archived, {} rejected in {}s",
        summary.archived,
        summary.segments,
        summary.rejected,
        summary.processing_time_ms / 1000
    );

    Ok(())
}
