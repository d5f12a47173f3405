//! AI analyzer: submits a bounded excerpt to an OpenAI-style completions
//! endpoint and returns the free-form analysis text.

use async_trait::async_trait;
use docsense_core::{AnalysisProvider, AnalysisRequest, DocError, MAX_EXCERPT_CHARS};
use tracing::info;

const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// Analysis provider backed by the OpenAI completions API.
pub struct OpenAiAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiAnalyzer {
    pub fn new(
        client: reqwest::Client,
        api_key: Option<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            endpoint: OPENAI_COMPLETIONS_URL.to_string(),
            api_key,
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Point the analyzer at an OpenAI-compatible endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiAnalyzer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<String, DocError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DocError::AiServiceFailure("no API key configured".to_string()))?;

        info!(
            model = %self.model,
            document_type = %request.document_type,
            excerpt_chars = request.excerpt.chars().count(),
            "requesting document analysis"
        );

        let body = serde_json::json!({
            "model": self.model,
            "prompt": build_prompt(request),
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DocError::AiServiceFailure(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let detail = resp.text().await.unwrap_or_default();
            return Err(DocError::AiServiceFailure(format!("{status}: {detail}")));
        }

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| DocError::AiServiceFailure(e.to_string()))?;

        completion_text(&json)
            .ok_or_else(|| DocError::AiServiceFailure("empty completion response".to_string()))
    }
}

/// Build the fixed analysis instruction for one request.
///
/// The excerpt is capped here as well, so the bound holds no matter how the
/// request was constructed.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let excerpt: String = request.excerpt.chars().take(MAX_EXCERPT_CHARS).collect();
    format!(
        "Analyze the following {} document and provide:\n\
         1. Main categories it belongs to\n\
         2. Key entities mentioned\n\
         3. Overall sentiment\n\
         4. Important dates and numbers\n\
         5. Key topics discussed\n\n\
         Document text:\n{}",
        request.document_type, excerpt
    )
}

/// Pull the completion text out of an API response, if there is one.
fn completion_text(json: &serde_json::Value) -> Option<String> {
    let text = json["choices"][0]["text"].as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
