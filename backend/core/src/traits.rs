use async_trait::async_trait;

use crate::error::DocError;
use crate::types::AnalysisRequest;

/// Trait for generative-text providers that analyze a document excerpt.
///
/// Implementations submit the excerpt plus document-type hint to an external
/// service and return its free-form analysis text. The caller treats that
/// text as untrusted, unstructured input.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Provider name (e.g., "openai"), used in log fields.
    fn name(&self) -> &str;

    /// Submit one analysis request and return the raw response text.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, DocError>;
}

/// Trait for external OCR engines that read text out of an image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize text in the given image bytes.
    ///
    /// `lang` is a Tesseract-style language code (the pipeline always passes
    /// a fixed `"eng"`).
    async fn recognize(&self, image: &[u8], mime_type: &str, lang: &str)
        -> Result<String, DocError>;
}
