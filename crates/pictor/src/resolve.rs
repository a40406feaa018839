//! Image reference resolution — inline payloads and file paths become a
//! uniform (base64 data, MIME type) pair.

use std::path::Path;

use base64::Engine;

use crate::error::{PictorError, PictorResult};
use crate::types::{ImageReference, ResolvedImage};

/// MIME type derived from a path's extension. Unrecognized extensions fall
/// back to PNG.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/png",
    }
}

/// Resolve an image reference into an inline representation.
///
/// Inline data is used verbatim and declared as PNG — the payload bytes are
/// never sniffed. A file path is read fully into memory and base64-encoded,
/// with the MIME type taken from the extension.
pub async fn resolve_image(reference: &ImageReference) -> PictorResult<ResolvedImage> {
    if let Some(data) = reference.image_data.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(ResolvedImage {
            data: data.to_string(),
            mime_type: "image/png".to_string(),
        });
    }

    let path = reference
        .image_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| {
            PictorError::Validation(
                "either 'imageData' or 'imagePath' must be provided".to_string(),
            )
        })?;

    let bytes = tokio::fs::read(path).await.map_err(|source| PictorError::Read {
        path: path.to_string(),
        source,
    })?;

    Ok(ResolvedImage {
        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
        mime_type: mime_for_path(Path::new(path)).to_string(),
    })
}
