//! Artifact persistence — derived filenames and disk writes.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::PictorResult;

/// File extension for a response MIME type: `jpg` for `image/jpeg` exactly,
/// `png` for everything else.
pub fn extension_for_mime(mime: &str) -> &'static str {
    if mime == "image/jpeg" {
        "jpg"
    } else {
        "png"
    }
}

/// `{prefix}-{timestamp}.{ext}`, with the ISO-8601 instant made
/// filesystem-safe by replacing `:` and `.` with `-`.
pub fn artifact_filename(prefix: &str, mime: &str, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{prefix}-{stamp}.{}", extension_for_mime(mime))
}

/// Write decoded image bytes under `output_dir`, creating the directory
/// (recursively) if it does not exist. Name collisions overwrite; the
/// timestamp makes them vanishingly unlikely but they are not deduplicated.
pub async fn write_artifact(
    output_dir: &Path,
    prefix: &str,
    mime: &str,
    bytes: &[u8],
) -> PictorResult<PathBuf> {
    tokio::fs::create_dir_all(output_dir).await?;

    let path = output_dir.join(artifact_filename(prefix, mime, Utc::now()));
    tokio::fs::write(&path, bytes).await?;

    tracing::info!(path = %path.display(), size = bytes.len(), "Artifact written");
    Ok(path)
}
