//! Document understanding: text extraction, AI analysis, and the heuristic
//! parser that turns free-text analysis into structured metadata.

pub mod analyzer;
pub mod extract;
pub mod ocr;
pub mod parse;
pub mod signals;

pub use analyzer::OpenAiAnalyzer;
pub use extract::extract_text;
pub use ocr::{DisabledOcr, HttpOcrEngine};
pub use parse::{AnalysisParser, HeuristicParser};
pub use signals::{ConfidenceModel, FixedConfidence, FixedLanguage, LanguageDetector};
