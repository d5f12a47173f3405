//! Confidence and language signals.
//!
//! Both are placeholders for real scoring/detection. They sit behind traits
//! so the pipeline can swap in measured implementations without touching the
//! parser.

/// Scores how confident the metadata extraction is, in `[0, 1]`.
pub trait ConfidenceModel: Send + Sync {
    fn score(&self, analysis: &str) -> f32;
}

/// Detects the document language as a 2-letter code.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> String;
}

/// Constant confidence score.
pub struct FixedConfidence(pub f32);

impl Default for FixedConfidence {
    fn default() -> Self {
        Self(0.85)
    }
}

impl ConfidenceModel for FixedConfidence {
    fn score(&self, _analysis: &str) -> f32 {
        self.0
    }
}

/// Constant language code.
pub struct FixedLanguage(pub String);

impl Default for FixedLanguage {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl LanguageDetector for FixedLanguage {
    fn detect(&self, _text: &str) -> String {
        self.0.clone()
    }
}
