//! Tool: generate_with_template — Generate from a named style template.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use pictor::templates;
use pictor::{write_artifact, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateWithTemplateParams {
    template: String,
    customization: String,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
}

pub fn definition() -> ToolDefinition {
    let names: Vec<&str> = templates::TEMPLATES.iter().map(|t| t.name).collect();
    ToolDefinition {
        name: "generate_with_template".to_string(),
        description: Some(
            "Generate an image from a named style template plus a customization".to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "template": {
                    "type": "string",
                    "enum": names,
                    "description": "Template name"
                },
                "customization": { "type": "string", "description": "Appended to the template prompt" },
                "outputDir": { "type": "string", "description": "Directory for the saved image (default: current directory)" },
                "config": sampling_schema()
            },
            "required": ["template", "customization"]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: GenerateWithTemplateParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let template = templates::find(&params.template).ok_or_else(|| {
        let names: Vec<&str> = templates::TEMPLATES.iter().map(|t| t.name).collect();
        McpError::InvalidParams(format!(
            "unknown template '{}'; valid templates: {}",
            params.template,
            names.join(", ")
        ))
    })?;
    if params.customization.trim().is_empty() {
        return Err(McpError::InvalidParams(
            "'customization' must not be empty".to_string(),
        ));
    }
    let sampling = params.config.unwrap_or_default();
    sampling.validate()?;

    let prompt = templates::compose_prompt(template, &params.customization);
    let image = service.generate(&prompt, &[], &sampling).await?;
    let path = write_artifact(
        &output_dir(params.output_dir.as_deref()),
        template.name,
        &image.mime_type,
        &image.bytes,
    )
    .await?;

    Ok(ToolCallResult::text(format!(
        "Generated '{}' image and saved it to {}",
        template.name,
        path.display()
    )))
}
