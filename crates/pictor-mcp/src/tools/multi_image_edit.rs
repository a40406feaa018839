//! Tool: multi_image_edit — Combine or edit several images with one prompt.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{resolve_image, write_artifact, ImageReference, ResolvedImage, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MultiImageEditParams {
    prompt: String,
    images: Vec<ImageReference>,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "multi_image_edit".to_string(),
        description: Some(
            "Apply one prompt across multiple input images and save the combined result"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompt": { "type": "string", "description": "Edit instructions applied across all images" },
                "images": {
                    "type": "array",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "imageData": { "type": "string", "description": "Base64-encoded image (assumed PNG)" },
                            "imagePath": { "type": "string", "description": "Path to the image file" },
                            "description": { "type": "string", "description": "Optional note about this image" }
                        },
                        "anyOf": [
                            { "required": ["imageData"] },
                            { "required": ["imagePath"] }
                        ]
                    }
                },
                "outputDir": { "type": "string", "description": "Directory for the saved image (default: current directory)" },
                "config": sampling_schema()
            },
            "required": ["prompt", "images"]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: MultiImageEditParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    if params.prompt.trim().is_empty() {
        return Err(McpError::InvalidParams(
            "'prompt' must not be empty".to_string(),
        ));
    }
    if params.images.is_empty() {
        return Err(McpError::InvalidParams(
            "'images' must contain at least one entry".to_string(),
        ));
    }
    for (index, image) in params.images.iter().enumerate() {
        image.require_usable().map_err(|_| {
            McpError::InvalidParams(format!(
                "images[{index}] must provide either 'imageData' or 'imagePath'"
            ))
        })?;
    }
    let sampling = params.config.unwrap_or_default();
    sampling.validate()?;

    // Image parts follow the prompt in input order.
    let mut resolved: Vec<ResolvedImage> = Vec::with_capacity(params.images.len());
    for image in &params.images {
        resolved.push(resolve_image(image).await?);
    }

    let image = service
        .generate(&params.prompt, &resolved, &sampling)
        .await?;
    let path = write_artifact(
        &output_dir(params.output_dir.as_deref()),
        "multi-image-result",
        &image.mime_type,
        &image.bytes,
    )
    .await?;

    Ok(ToolCallResult::text(format!(
        "Combined {} images and saved the result to {}",
        params.images.len(),
        path.display()
    )))
}
