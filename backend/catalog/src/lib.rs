//! In-memory document catalog.
//!
//! An ordered, most-recent-first list of enriched documents. Lifetime is the
//! process: there is no removal, no update, and no persistence.

use std::sync::{Arc, RwLock};

use docsense_core::EnrichedDocument;
use tracing::debug;

/// Shared, process-scoped store of enriched documents.
#[derive(Clone, Default)]
pub struct DocumentCatalog {
    docs: Arc<RwLock<Vec<EnrichedDocument>>>,
}

impl DocumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a document so the newest upload lists first.
    pub fn insert(&self, doc: EnrichedDocument) {
        debug!(id = doc.id, name = %doc.file.name, "cataloging document");
        let mut docs = self.docs.write().unwrap();
        docs.insert(0, doc);
    }

    /// Snapshot of the current ordering.
    pub fn list(&self) -> Vec<EnrichedDocument> {
        self.docs.read().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.docs.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().unwrap().is_empty()
    }

    /// Filter the catalog.
    ///
    /// A non-empty `query` matches file name, any category, or extracted
    /// text (case-insensitive substring) and takes precedence over
    /// `category`; the two are never combined. A `category` other than
    /// `"all"` must appear verbatim in the document's categories.
    pub fn filter(&self, query: Option<&str>, category: Option<&str>) -> Vec<EnrichedDocument> {
        let docs = self.docs.read().unwrap();

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            let needle = query.to_lowercase();
            return docs
                .iter()
                .filter(|doc| {
                    doc.file.name.to_lowercase().contains(&needle)
                        || doc
                            .metadata
                            .categories
                            .iter()
                            .any(|cat| cat.to_lowercase().contains(&needle))
                        || doc.extracted_text.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
        }

        if let Some(category) = category.filter(|c| !c.is_empty() && *c != "all") {
            return docs
                .iter()
                .filter(|doc| doc.metadata.categories.iter().any(|cat| cat == category))
                .cloned()
                .collect();
        }

        docs.clone()
    }
}
