//! Upload directory store.
//!
//! Persists each uploaded payload so it survives the request lifecycle.
//! Files are named `<epoch-millis><original extension>`; the name is not
//! collision-proof when two uploads land in the same millisecond. There is
//! no cleanup and no size limit.

use std::path::{Path, PathBuf};

use chrono::Utc;
use docsense_core::DocError;
use tracing::{debug, info};

/// Write-once file storage for uploaded payloads.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), DocError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DocError::UploadFailure(format!("cannot create upload dir: {e}")))?;
        info!(dir = %self.dir.display(), "upload directory ready");
        Ok(())
    }

    /// Persist one payload, keyed by timestamp plus the original extension.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<PathBuf, DocError> {
        let filename = format!(
            "{}{}",
            Utc::now().timestamp_millis(),
            extension_of(original_name)
        );
        let path = self.dir.join(filename);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DocError::UploadFailure(format!("cannot persist upload: {e}")))?;
        debug!(path = %path.display(), bytes = bytes.len(), "persisted upload");
        Ok(path)
    }
}

/// The extension of a filename including the dot, or `""` when there is none.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_includes_the_dot() {
        assert_eq!(extension_of("report.pdf"), ".pdf");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("no_extension"), "");
    }

    #[tokio::test]
    async fn save_writes_timestamped_file_with_extension() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path());

        let path = store.save("invoice.txt", b"hello").await.unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "txt");

        let stem = path.file_stem().unwrap().to_str().unwrap();
        assert!(stem.parse::<i64>().is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn ensure_dir_creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/uploads");
        let store = UploadStore::new(&nested);

        store.ensure_dir().await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn save_into_missing_dir_is_an_upload_failure() {
        let tmp = TempDir::new().unwrap();
        let store = UploadStore::new(tmp.path().join("never-created"));

        let err = store.save("a.txt", b"x").await.unwrap_err();
        assert_eq!(err.kind(), "upload_failure");
    }
}
