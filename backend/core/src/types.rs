use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Hard cap on how much source text is ever submitted to the AI analyzer.
pub const MAX_EXCERPT_CHARS: usize = 1000;

/// A file as received by the upload endpoint. Immutable once constructed.
///
/// Serializes as `{name, type, size}` to match the upload response shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// What gets sent to the analysis provider for one upload.
///
/// Constructed fresh per upload and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// At most [`MAX_EXCERPT_CHARS`] characters of extracted text.
    pub excerpt: String,
    pub document_type: String,
}

impl AnalysisRequest {
    /// Build a request from extracted text, truncating the excerpt and
    /// defaulting an empty document type to `"general"`.
    pub fn new(text: &str, document_type: &str) -> Self {
        let document_type = if document_type.trim().is_empty() {
            "general".to_string()
        } else {
            document_type.to_string()
        };
        Self {
            excerpt: text.chars().take(MAX_EXCERPT_CHARS).collect(),
            document_type,
        }
    }
}

/// Overall sentiment of a document, as judged from the analysis text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Structured metadata derived from the AI's free-text analysis.
///
/// Deterministic given the same analysis text. `categories` is never empty
/// and always leads with `"Document"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentMetadata {
    pub categories: Vec<String>,
    pub entities: Vec<String>,
    pub sentiment: Sentiment,
    pub confidence: f32,
    pub language: String,
}

/// A document after the full intake pipeline: file descriptor, AI metadata,
/// and the extracted text. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedDocument {
    /// Creation timestamp in epoch milliseconds. Unique within a session
    /// only as long as no two uploads complete in the same millisecond.
    pub id: i64,
    pub file: UploadedFile,
    pub metadata: DocumentMetadata,
    pub extracted_text: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
}

impl EnrichedDocument {
    pub fn new(
        file: UploadedFile,
        metadata: DocumentMetadata,
        extracted_text: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            file,
            metadata,
            extracted_text: extracted_text.into(),
            doc_type: doc_type.into(),
            timestamp: now.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploaded_file_wire_field_names() {
        let file = UploadedFile::new("report.txt", "text/plain", 42);
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["name"], "report.txt");
        assert_eq!(json["type"], "text/plain");
        assert_eq!(json["size"], 42);
    }

    #[test]
    fn analysis_request_truncates_excerpt() {
        let long = "x".repeat(MAX_EXCERPT_CHARS * 3);
        let request = AnalysisRequest::new(&long, "general");
        assert_eq!(request.excerpt.chars().count(), MAX_EXCERPT_CHARS);
    }

    #[test]
    fn analysis_request_counts_chars_not_bytes() {
        let long = "é".repeat(MAX_EXCERPT_CHARS + 5);
        let request = AnalysisRequest::new(&long, "general");
        assert_eq!(request.excerpt.chars().count(), MAX_EXCERPT_CHARS);
    }

    #[test]
    fn analysis_request_defaults_document_type() {
        let request = AnalysisRequest::new("text", "");
        assert_eq!(request.document_type, "general");
        let request = AnalysisRequest::new("text", "invoice");
        assert_eq!(request.document_type, "invoice");
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"positive\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"neutral\""
        );
    }

    #[test]
    fn enriched_document_carries_creation_time() {
        let file = UploadedFile::new("a.txt", "text/plain", 1);
        let metadata = DocumentMetadata {
            categories: vec!["Document".to_string()],
            entities: vec![],
            sentiment: Sentiment::Neutral,
            confidence: 0.85,
            language: "en".to_string(),
        };
        let doc = EnrichedDocument::new(file, metadata, "body", "text/plain");
        assert!(doc.id > 0);
        assert!(doc.timestamp.contains('T'));
    }
}
