//! Catalog listing endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DocumentsQuery {
    /// Free-text search over file name, categories, and extracted text.
    /// Takes precedence over `category` when both are present.
    #[serde(default)]
    pub query: Option<String>,
    /// Category filter; `"all"` (or absence) means no filtering.
    #[serde(default)]
    pub category: Option<String>,
}

/// GET /api/documents?query=&category=
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DocumentsQuery>,
) -> Json<Value> {
    let documents = state
        .catalog
        .filter(params.query.as_deref(), params.category.as_deref());
    Json(json!({ "documents": documents }))
}
