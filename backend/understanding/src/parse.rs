//! Heuristic metadata parser.
//!
//! Turns the analyzer's free-text reply into a [`DocumentMetadata`] record by
//! case-insensitive substring and line-pattern matching. This is the
//! compatibility contract for downstream consumers, not an NLP stand-in to
//! improve silently; a real extractor would replace [`AnalysisParser`]
//! wholesale.

use docsense_core::{DocumentMetadata, Sentiment};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::signals::{ConfidenceModel, FixedConfidence, FixedLanguage, LanguageDetector};

/// Capability seam for turning analysis text into structured metadata.
pub trait AnalysisParser: Send + Sync {
    /// Total over all strings: never panics, never errors.
    fn parse(&self, analysis: &str) -> DocumentMetadata;
}

/// Category keywords, checked in this fixed order.
const CATEGORY_KEYWORDS: [(&str, &str); 4] = [
    ("legal", "Legal"),
    ("medical", "Medical"),
    ("financial", "Financial"),
    ("business", "Business"),
];

/// Entity list used when the analysis carries no parseable `entities:` line.
const DEFAULT_ENTITIES: [&str; 3] = ["Company Names", "Dates", "Amounts"];

/// `entities:` up to end-of-line, anywhere in the text.
static ENTITIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)entities:\s*([^\r\n]+)").unwrap());

/// The keyword-matching parser, with pluggable confidence and language
/// signals (both constant in the default configuration).
pub struct HeuristicParser {
    confidence: Box<dyn ConfidenceModel>,
    language: Box<dyn LanguageDetector>,
}

impl HeuristicParser {
    pub fn new() -> Self {
        Self {
            confidence: Box::new(FixedConfidence::default()),
            language: Box::new(FixedLanguage::default()),
        }
    }

    pub fn with_signals(
        confidence: Box<dyn ConfidenceModel>,
        language: Box<dyn LanguageDetector>,
    ) -> Self {
        Self {
            confidence,
            language,
        }
    }
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for HeuristicParser {
    fn parse(&self, analysis: &str) -> DocumentMetadata {
        let lower = analysis.to_lowercase();

        let mut categories = vec!["Document".to_string()];
        for (keyword, category) in CATEGORY_KEYWORDS {
            if lower.contains(keyword) {
                categories.push(category.to_string());
            }
        }

        // "positive" is tested before "negative"; the order is part of the
        // contract.
        let sentiment = if lower.contains("positive") {
            Sentiment::Positive
        } else if lower.contains("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        DocumentMetadata {
            categories,
            entities: extract_entities(analysis),
            sentiment,
            confidence: self.confidence.score(analysis),
            language: self.language.detect(analysis),
        }
    }
}

/// Comma-separated tokens from the first `entities:` line, or the fixed
/// default list when there is no usable match.
fn extract_entities(analysis: &str) -> Vec<String> {
    let found: Vec<String> = ENTITIES_RE
        .captures(analysis)
        .and_then(|caps| caps.get(1))
        .map(|list| {
            list.as_str()
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    if found.is_empty() {
        DEFAULT_ENTITIES.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}
