//! note-ninja - AI meeting assistant
//!
//! Entry point: load configuration, construct the inference engines once,
//! and serve the upload endpoint.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use note_ninja::config::Settings;
use note_ninja::llm::build_provider;
use note_ninja::pipeline::PipelineCoordinator;
use note_ninja::transcription::WhisperTranscriber;

/// note-ninja - transcribe and summarize meeting recordings over HTTP
#[derive(Parser, Debug)]
#[command(name = "note-ninja")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::config_path()?,
    };

    if cli.init_config {
        Settings::write_default(&config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let mut settings = Settings::load_from(&config_path)?;

    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    settings.ensure_dirs()?;

    // Engines are constructed once and shared across requests. Both fail
    // fast here: a missing model or credential stops startup.
    tracing::info!("Loading Whisper model '{}'", settings.whisper.model);
    let transcriber = Arc::new(
        WhisperTranscriber::new(&settings).context("Failed to initialize transcription engine")?,
    );
    let summarizer: Arc<dyn note_ninja::llm::Summarizer> =
        Arc::from(build_provider(&settings).context("Failed to initialize summarization client")?);

    let pipeline = Arc::new(PipelineCoordinator::new(
        transcriber,
        summarizer,
        settings.spool_dir(),
    ));

    note_ninja::server::serve(&settings, pipeline).await
}
