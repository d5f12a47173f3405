//! Text extraction dispatch.
//!
//! Images go to the configured OCR engine; everything else is read as UTF-8.
//! Only the dispatch policy and failure contract live here; the OCR engine
//! itself is an external collaborator behind [`OcrEngine`].

use docsense_core::{DocError, OcrEngine};
use tracing::debug;

/// Extract raw text from an uploaded payload.
///
/// Fails with `OcrFailure` when the engine cannot process an image and with
/// `DecodeFailure` when text-like bytes are not valid UTF-8.
pub async fn extract_text(
    ocr: &dyn OcrEngine,
    bytes: &[u8],
    mime_type: &str,
    lang: &str,
) -> Result<String, DocError> {
    if mime_type.starts_with("image/") {
        debug!(mime_type, lang, "dispatching image to OCR");
        ocr.recognize(bytes, mime_type, lang).await
    } else {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
