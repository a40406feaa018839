//! Tool: edit_image — Edit an existing image according to a prompt.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{resolve_image, write_artifact, ImageReference, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditImageParams {
    prompt: String,
    #[serde(flatten)]
    image: ImageReference,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "edit_image".to_string(),
        description: Some(
            "Edit an image (inline base64 or file path) according to a prompt and save the result"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompt": { "type": "string", "description": "Edit instructions" },
                "imageData": { "type": "string", "description": "Base64-encoded image (assumed PNG)" },
                "imagePath": { "type": "string", "description": "Path to the image file" },
                "outputDir": { "type": "string", "description": "Directory for the saved image (default: current directory)" },
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
    let params: EditImageParams =
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
    let image = service
        .generate(&params.prompt, &[resolved], &sampling)
        .await?;
    let path = write_artifact(
        &output_dir(params.output_dir.as_deref()),
        "edited-image",
        &image.mime_type,
        &image.bytes,
    )
    .await?;

    Ok(ToolCallResult::text(format!(
        "Image edited and saved to {}",
        path.display()
    )))
}
