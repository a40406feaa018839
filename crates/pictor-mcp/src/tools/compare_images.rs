//! Tool: compare_images — Describe how two images relate.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{resolve_image, CompareType, ImageReference, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompareImagesParams {
    image1_path: String,
    image2_path: String,
    #[serde(default)]
    compare_type: CompareType,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "compare_images".to_string(),
        description: Some(
            "Compare two images from disk and describe their differences, similarities, or both"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "image1Path": { "type": "string", "description": "Path to the first image" },
                "image2Path": { "type": "string", "description": "Path to the second image" },
                "compareType": {
                    "type": "string",
                    "enum": ["differences", "similarities", "both"],
                    "default": "both"
                }
            },
            "required": ["image1Path", "image2Path"]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: CompareImagesParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    if params.image1_path.trim().is_empty() || params.image2_path.trim().is_empty() {
        return Err(McpError::InvalidParams(
            "'image1Path' and 'image2Path' must not be empty".to_string(),
        ));
    }

    let first = resolve_image(&ImageReference {
        image_path: Some(params.image1_path.clone()),
        ..Default::default()
    })
    .await?;
    let second = resolve_image(&ImageReference {
        image_path: Some(params.image2_path.clone()),
        ..Default::default()
    })
    .await?;

    let answer = service
        .describe(
            params.compare_type.prompt(),
            &[first, second],
            &SamplingOptions::default(),
        )
        .await?;

    Ok(ToolCallResult::text(answer))
}
