pub mod error;
pub mod traits;
pub mod types;

pub use error::DocError;
pub use traits::{AnalysisProvider, OcrEngine};
pub use types::{
    AnalysisRequest, DocumentMetadata, EnrichedDocument, Sentiment, UploadedFile,
    MAX_EXCERPT_CHARS,
};
