use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use docsense_catalog::DocumentCatalog;
use docsense_config::Config;
use docsense_core::{AnalysisProvider, OcrEngine};
use docsense_gateway::{start_server, AppState};
use docsense_logging::init_logger;
use docsense_storage::UploadStore;
use docsense_understanding::{DisabledOcr, HeuristicParser, HttpOcrEngine, OpenAiAnalyzer};

#[derive(Parser)]
#[command(name = "docsense")]
#[command(about = "docsense — document intake and AI metadata enrichment")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the docsense HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Check a running instance
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logger(&config.log_dir, &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("docsense is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

async fn run_server(config: Config) -> Result<()> {
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; uploads will fail at the analysis step");
    }
    if config.ocr_url.is_none() {
        info!("no OCR service configured; image uploads will be rejected");
    }

    let client = reqwest::Client::new();

    let analyzer: Arc<dyn AnalysisProvider> = Arc::new(OpenAiAnalyzer::new(
        client.clone(),
        config.openai_api_key.clone(),
        &config.model,
        config.max_tokens,
        config.temperature,
    ));
    let ocr: Arc<dyn OcrEngine> = match &config.ocr_url {
        Some(url) => Arc::new(HttpOcrEngine::new(client, url.clone())),
        None => Arc::new(DisabledOcr),
    };

    let state = Arc::new(AppState {
        catalog: DocumentCatalog::new(),
        uploads: UploadStore::new(&config.uploads_dir),
        analyzer,
        ocr,
        parser: Arc::new(HeuristicParser::new()),
        ocr_lang: config.ocr_lang.clone(),
    });

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    start_server(addr, state).await
}
