//! MIME helpers for uploaded documents.

use std::path::Path;

/// Detect MIME type by file extension. Used as a fallback when the upload
/// carries no content type of its own.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",

        // Documents
        "pdf"          => "application/pdf",
        "doc"          => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt"          => "text/plain",
        "md"           => "text/markdown",
        "html" | "htm" => "text/html",
        "json"         => "application/json",
        "xml"          => "application/xml",
        "csv"          => "text/csv",

        _              => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_png() {
        assert_eq!(detect_mime_type(&PathBuf::from("scan.png")), "image/png");
    }

    #[test]
    fn detects_txt() {
        assert_eq!(detect_mime_type(&PathBuf::from("notes.TXT")), "text/plain");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(
            detect_mime_type(&PathBuf::from("file.xyz")),
            "application/octet-stream"
        );
    }

}
