use thiserror::Error;

/// Top-level error type for the docsense pipeline.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("OCR failed: {0}")]
    OcrFailure(String),

    #[error("document bytes are not valid UTF-8")]
    DecodeFailure(#[from] std::string::FromUtf8Error),

    #[error("AI analysis service error: {0}")]
    AiServiceFailure(String),

    #[error("upload failed: {0}")]
    UploadFailure(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocError {
    /// Stable kind label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DocError::OcrFailure(_) => "ocr_failure",
            DocError::DecodeFailure(_) => "decode_failure",
            DocError::AiServiceFailure(_) => "ai_service_failure",
            DocError::UploadFailure(_) => "upload_failure",
            DocError::ConfigError(_) => "config_error",
            DocError::Other(_) => "other",
        }
    }
}
