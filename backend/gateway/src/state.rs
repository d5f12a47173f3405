use std::sync::Arc;

use docsense_catalog::DocumentCatalog;
use docsense_core::{AnalysisProvider, OcrEngine};
use docsense_storage::UploadStore;
use docsense_understanding::AnalysisParser;

/// Application state shared across routes.
pub struct AppState {
    pub catalog: DocumentCatalog,
    pub uploads: UploadStore,
    pub analyzer: Arc<dyn AnalysisProvider>,
    pub ocr: Arc<dyn OcrEngine>,
    pub parser: Arc<dyn AnalysisParser>,
    /// OCR language code, fixed per deployment.
    pub ocr_lang: String,
}
