//! Tool: generate_variations — Produce several variations of one image.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{resolve_image, write_artifact, ImageReference, SamplingOptions, VariationStrength};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

const DEFAULT_COUNT: u32 = 3;
const MAX_COUNT: u32 = 5;

const VARIATION_PROMPT: &str =
    "Generate a creative variation of this image, keeping its overall subject and composition.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateVariationsParams {
    #[serde(flatten)]
    image: ImageReference,
    #[serde(default = "default_count")]
    count: u32,
    #[serde(default)]
    variation_strength: VariationStrength,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

fn default_count() -> u32 {
    DEFAULT_COUNT
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "generate_variations".to_string(),
        description: Some(
            "Generate up to 5 variations of an image; a failed variation is skipped, not fatal"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "imageData": { "type": "string", "description": "Base64-encoded image (assumed PNG)" },
                "imagePath": { "type": "string", "description": "Path to the image file" },
                "count": { "type": "integer", "minimum": 1, "maximum": 5, "default": 3 },
                "variationStrength": {
                    "type": "string",
                    "enum": ["subtle", "moderate", "strong"],
                    "default": "moderate",
                    "description": "How far variations may drift from the source"
                },
                "outputDir": { "type": "string", "description": "Directory for the saved images (default: current directory)" },
                "config": sampling_schema()
            },
            "anyOf": [
                { "required": ["imageData"] },
                { "required": ["imagePath"] }
            ]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: GenerateVariationsParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    params.image.require_usable()?;
    if !(1..=MAX_COUNT).contains(&params.count) {
        return Err(McpError::InvalidParams(format!(
            "'count' must be between 1 and {MAX_COUNT}, got {}",
            params.count
        )));
    }
    let mut sampling = params.config.unwrap_or_default();
    sampling.validate()?;
    // The strength mapping only applies when the caller's config did not
    // set a temperature itself.
    if sampling.temperature.is_none() {
        sampling.temperature = Some(params.variation_strength.temperature());
    }

    let resolved = resolve_image(&params.image).await?;
    let dir = output_dir(params.output_dir.as_deref());

    // Strictly sequential; each failure is logged and skipped.
    let mut saved = Vec::new();
    let mut skipped = 0usize;
    for index in 0..params.count {
        let result = async {
            let image = service
                .generate(VARIATION_PROMPT, &[resolved.clone()], &sampling)
                .await?;
            write_artifact(
                &dir,
                &format!("variation-{index}"),
                &image.mime_type,
                &image.bytes,
            )
            .await
        }
        .await;

        match result {
            Ok(path) => saved.push(path),
            Err(e) => {
                tracing::warn!(index, error = %e, "Variation failed, skipping");
                skipped += 1;
            }
        }
    }

    let mut summary = format!(
        "Generated {} of {} variations",
        saved.len(),
        params.count
    );
    if skipped > 0 {
        summary.push_str(&format!(" ({skipped} skipped after errors)"));
    }
    for path in &saved {
        summary.push_str(&format!("\n{}", path.display()));
    }

    Ok(ToolCallResult::text(summary))
}
