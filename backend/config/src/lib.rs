//! docsense runtime configuration.
//!
//! Everything is environment-variable driven; a `.env` file in the working
//! directory is loaded first when present.

use serde::Deserialize;

/// Runtime configuration for the docsense service.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Directory where uploaded payloads are persisted
    pub uploads_dir: String,
    /// OpenAI API key (analyzer errors at call time when absent)
    pub openai_api_key: Option<String>,
    /// Completion model id
    pub model: String,
    /// Max output tokens per analysis call
    pub max_tokens: u32,
    /// Sampling temperature per analysis call
    pub temperature: f32,
    /// Base URL of the HTTP OCR service, if any
    pub ocr_url: Option<String>,
    /// OCR language code
    pub ocr_lang: String,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level when RUST_LOG is unset
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3001,
            uploads_dir: "uploads".to_string(),
            openai_api_key: None,
            model: "gpt-3.5-turbo-instruct".to_string(),
            max_tokens: 500,
            temperature: 0.3,
            ocr_url: None,
            ocr_lang: "eng".to_string(),
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Config::default();
        Self {
            bind_address: std::env::var("DOCSENSE_BIND").unwrap_or(defaults.bind_address),
            port: std::env::var("DOCSENSE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            uploads_dir: std::env::var("DOCSENSE_UPLOADS_DIR").unwrap_or(defaults.uploads_dir),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("DOCSENSE_MODEL").unwrap_or(defaults.model),
            max_tokens: std::env::var("DOCSENSE_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: std::env::var("DOCSENSE_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            ocr_url: std::env::var("DOCSENSE_OCR_URL").ok(),
            ocr_lang: std::env::var("DOCSENSE_OCR_LANG").unwrap_or(defaults.ocr_lang),
            log_dir: std::env::var("DOCSENSE_LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}
