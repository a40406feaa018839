//! MCP tool implementations.

pub mod analyze_image;
pub mod batch_generate;
pub mod compare_images;
pub mod edit_image;
pub mod generate_image;
pub mod generate_variations;
pub mod generate_with_template;
pub mod multi_image_edit;
pub mod registry;

pub use registry::ToolRegistry;

use std::path::PathBuf;

use serde_json::{json, Value};

/// Output directory resolution: caller-supplied value, or the current
/// directory when absent or blank.
pub(crate) fn output_dir(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Shared schema fragment for the optional sampling `config` object.
pub(crate) fn sampling_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "temperature": { "type": "number", "minimum": 0, "maximum": 2 },
            "topP": { "type": "number", "minimum": 0, "maximum": 1 },
            "topK": { "type": "integer", "minimum": 1, "maximum": 40 },
            "maxOutputTokens": { "type": "integer", "minimum": 1 }
        }
    })
}
