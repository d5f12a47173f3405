//! Document upload endpoint.
//!
//! Receives one file plus an optional `type` hint, runs the full enrichment
//! pipeline (persist, extract, analyze, parse), catalogs the result, and
//! returns the structured metadata. Enrichment is all-or-nothing: any
//! internal failure yields a generic error and leaves the catalog untouched.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docsense_core::{
    AnalysisRequest, DocError, DocumentMetadata, EnrichedDocument, UploadedFile,
};
use docsense_storage::detect_mime_type;
use docsense_understanding::extract_text;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::state::AppState;

/// Successful upload reply: `{success, metadata, file}`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub metadata: DocumentMetadata,
    pub file: UploadedFile,
}

/// One upload as pulled off the multipart body.
pub(crate) struct UploadParts {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub doc_type: String,
}

/// POST /api/documents/upload
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Response {
    let request_id = Uuid::new_v4();

    let parts = match read_upload(multipart).await {
        Ok(parts) => parts,
        Err(e) => {
            error!(%request_id, kind = e.kind(), error = %e, "rejected upload request");
            return error_response();
        }
    };

    info!(
        %request_id,
        file = %parts.file_name,
        mime_type = %parts.mime_type,
        size = parts.bytes.len(),
        "processing upload"
    );

    match process_upload(&state, parts).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            // The specific failure stays server-side; the caller only sees a
            // generic message.
            error!(%request_id, kind = e.kind(), error = %e, "upload processing failed");
            error_response()
        }
    }
}

/// Pull the `file` and optional `type` fields out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<UploadParts, DocError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut doc_type = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DocError::UploadFailure(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| DocError::UploadFailure(e.to_string()))?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            "type" => {
                doc_type = field
                    .text()
                    .await
                    .map_err(|e| DocError::UploadFailure(e.to_string()))?;
            }
            other => {
                debug!(field = other, "ignoring unknown multipart field");
            }
        }
    }

    let (file_name, content_type, bytes) = file
        .ok_or_else(|| DocError::UploadFailure("missing file part".to_string()))?;
    let mime_type = content_type
        .unwrap_or_else(|| detect_mime_type(Path::new(&file_name)).to_string());

    Ok(UploadParts {
        file_name,
        mime_type,
        bytes,
        doc_type,
    })
}

/// The enrichment pipeline for one upload.
pub(crate) async fn process_upload(
    state: &AppState,
    parts: UploadParts,
) -> Result<UploadResponse, DocError> {
    let saved = state.uploads.save(&parts.file_name, &parts.bytes).await?;
    debug!(path = %saved.display(), "upload persisted");

    let text = extract_text(
        state.ocr.as_ref(),
        &parts.bytes,
        &parts.mime_type,
        &state.ocr_lang,
    )
    .await?;

    let request = AnalysisRequest::new(&text, &parts.doc_type);
    let analysis = state.analyzer.analyze(&request).await?;
    let metadata = state.parser.parse(&analysis);

    let file = UploadedFile::new(parts.file_name, parts.mime_type, parts.bytes.len() as u64);
    let document = EnrichedDocument::new(
        file.clone(),
        metadata.clone(),
        text,
        request.document_type.clone(),
    );
    state.catalog.insert(document);

    Ok(UploadResponse {
        success: true,
        metadata,
        file,
    })
}

/// Generic 500 reply; the specific failure kind is logged, never exposed.
fn error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Error processing document",
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use docsense_catalog::DocumentCatalog;
    use docsense_core::{AnalysisProvider, OcrEngine, Sentiment};
    use docsense_storage::UploadStore;
    use docsense_understanding::{DisabledOcr, HeuristicParser};
    use tempfile::TempDir;

    /// Returns the excerpt as the "analysis", so parser behavior can be
    /// driven by the uploaded text itself.
    struct EchoAnalyzer;

    #[async_trait]
    impl AnalysisProvider for EchoAnalyzer {
        fn name(&self) -> &str {
            "echo"
        }
        async fn analyze(&self, request: &AnalysisRequest) -> Result<String, DocError> {
            Ok(request.excerpt.clone())
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl AnalysisProvider for FailingAnalyzer {
        fn name(&self) -> &str {
            "failing"
        }
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<String, DocError> {
            Err(DocError::AiServiceFailure("service unavailable".to_string()))
        }
    }

    fn state_with(analyzer: Arc<dyn AnalysisProvider>, dir: &TempDir) -> AppState {
        AppState {
            catalog: DocumentCatalog::new(),
            uploads: UploadStore::new(dir.path()),
            analyzer,
            ocr: Arc::new(DisabledOcr) as Arc<dyn OcrEngine>,
            parser: Arc::new(HeuristicParser::new()),
            ocr_lang: "eng".to_string(),
        }
    }

    fn text_upload(contents: &str) -> UploadParts {
        UploadParts {
            file_name: "report.txt".to_string(),
            mime_type: "text/plain".to_string(),
            bytes: contents.as_bytes().to_vec(),
            doc_type: String::new(),
        }
    }

    #[tokio::test]
    async fn txt_upload_end_to_end() {
        let dir = TempDir::new().unwrap();
        let state = state_with(Arc::new(EchoAnalyzer), &dir);

        let response =
            process_upload(&state, text_upload("This financial report shows positive growth"))
                .await
                .unwrap();

        assert!(response.success);
        assert!(response.metadata.categories.contains(&"Document".to_string()));
        assert!(response.metadata.categories.contains(&"Financial".to_string()));
        assert_eq!(response.metadata.sentiment, Sentiment::Positive);
        assert_eq!(
            response.metadata.entities,
            vec!["Company Names", "Dates", "Amounts"]
        );
        assert!((response.metadata.confidence - 0.85).abs() < f32::EPSILON);
        assert_eq!(response.metadata.language, "en");
        assert_eq!(response.file.name, "report.txt");
        assert_eq!(response.file.size_bytes, 43);

        // the enriched document landed in the catalog with the default type
        let listed = state.catalog.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].doc_type, "general");
        assert_eq!(
            listed[0].extracted_text,
            "This financial report shows positive growth"
        );
    }

    #[tokio::test]
    async fn analyzer_failure_leaves_catalog_unchanged() {
        let dir = TempDir::new().unwrap();
        let state = state_with(Arc::new(FailingAnalyzer), &dir);

        let err = process_upload(&state, text_upload("some contents"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "ai_service_failure");
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn image_upload_without_ocr_fails() {
        let dir = TempDir::new().unwrap();
        let state = state_with(Arc::new(EchoAnalyzer), &dir);

        let parts = UploadParts {
            file_name: "scan.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
            doc_type: "scan".to_string(),
        };
        let err = process_upload(&state, parts).await.unwrap_err();
        assert_eq!(err.kind(), "ocr_failure");
        assert!(state.catalog.is_empty());
    }

    #[tokio::test]
    async fn type_hint_is_carried_through() {
        let dir = TempDir::new().unwrap();
        let state = state_with(Arc::new(EchoAnalyzer), &dir);

        let mut parts = text_upload("legal wording");
        parts.doc_type = "contract".to_string();
        process_upload(&state, parts).await.unwrap();

        assert_eq!(state.catalog.list()[0].doc_type, "contract");
    }

    #[test]
    fn success_response_wire_shape() {
        let response = UploadResponse {
            success: true,
            metadata: DocumentMetadata {
                categories: vec!["Document".to_string()],
                entities: vec!["Dates".to_string()],
                sentiment: Sentiment::Neutral,
                confidence: 0.85,
                language: "en".to_string(),
            },
            file: UploadedFile::new("a.txt", "text/plain", 9),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["metadata"]["sentiment"], "neutral");
        assert_eq!(json["file"]["type"], "text/plain");
        assert_eq!(json["file"]["size"], 9);
    }
}
