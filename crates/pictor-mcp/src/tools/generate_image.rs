//! Tool: generate_image — Generate an image from a text prompt.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{write_artifact, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateImageParams {
    prompt: String,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "generate_image".to_string(),
        description: Some("Generate an image from a text prompt and save it to disk".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompt": { "type": "string", "description": "What to generate" },
                "outputDir": { "type": "string", "description": "Directory for the saved image (default: current directory)" },
                "config": sampling_schema()
            },
            "required": ["prompt"]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: GenerateImageParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    if params.prompt.trim().is_empty() {
        return Err(McpError::InvalidParams(
            "'prompt' must not be empty".to_string(),
        ));
    }
    let sampling = params.config.unwrap_or_default();
    sampling.validate()?;

    let image = service.generate(&params.prompt, &[], &sampling).await?;
    let path = write_artifact(
        &output_dir(params.output_dir.as_deref()),
        "generated-image",
        &image.mime_type,
        &image.bytes,
    )
    .await?;

    Ok(ToolCallResult::text(format!(
        "Image generated and saved to {}",
        path.display()
    )))
}
