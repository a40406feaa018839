//! Tool: analyze_image — Answer a question about an image.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{resolve_image, ImageReference, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::sampling_schema;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeImageParams {
    prompt: String,
    #[serde(flatten)]
    image: ImageReference,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "analyze_image".to_string(),
        description: Some(
            "Analyze an image (inline base64 or file path) and answer a question about it"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompt": { "type": "string", "description": "Question about the image" },
                "imageData": { "type": "string", "description": "Base64-encoded image (assumed PNG)" },
                "imagePath": { "type": "string", "description": "Path to the image file" },
                "config": sampling_schema()
            },
            "required": ["prompt"],
            "anyOf": [
                { "required": ["imageData"] },
                { "required": ["imagePath"] }
            ]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: AnalyzeImageParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    if params.prompt.trim().is_empty() {
        return Err(McpError::InvalidParams(
            "'prompt' must not be empty".to_string(),
        ));
    }
    params.image.require_usable()?;
    let sampling = params.config.unwrap_or_default();
    sampling.validate()?;

    let resolved = resolve_image(&params.image).await?;
    let answer = service
        .describe(&params.prompt, &[resolved], &sampling)
        .await?;

    Ok(ToolCallResult::text(answer))
}
