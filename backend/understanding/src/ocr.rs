//! Optical character recognition over HTTP.
//!
//! Bridges an external OCR service (Tesseract behind an HTTP frontend, or
//! anything with the same surface): the image ships as a multipart `file`
//! part with a `lang` field, and the recognized text comes back as the
//! response body.

use async_trait::async_trait;
use docsense_core::{DocError, OcrEngine};
use tracing::info;

/// OCR engine backed by an HTTP service.
pub struct HttpOcrEngine {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOcrEngine {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for HttpOcrEngine {
    async fn recognize(
        &self,
        image: &[u8],
        mime_type: &str,
        lang: &str,
    ) -> Result<String, DocError> {
        info!(bytes = image.len(), mime_type, lang, "running OCR on image");

        let part = reqwest::multipart::Part::bytes(image.to_vec())
            .file_name("upload")
            .mime_str(mime_type)
            .map_err(|e| DocError::OcrFailure(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("lang", lang.to_string());

        let resp = self
            .client
            .post(&self.base_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DocError::OcrFailure(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(DocError::OcrFailure(format!(
                "OCR service returned {}",
                resp.status()
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| DocError::OcrFailure(e.to_string()))?;
        let text = text.trim();
        if text.is_empty() {
            return Err(DocError::OcrFailure("engine returned no text".to_string()));
        }
        Ok(text.to_string())
    }
}

/// Placeholder engine used when no OCR service is configured. Image uploads
/// fail loudly instead of silently skipping extraction.
pub struct DisabledOcr;

#[async_trait]
impl OcrEngine for DisabledOcr {
    async fn recognize(
        &self,
        _image: &[u8],
        _mime_type: &str,
        _lang: &str,
    ) -> Result<String, DocError> {
        Err(DocError::OcrFailure(
            "no OCR service configured".to_string(),
        ))
    }
}
