//! Tool: batch_generate — Generate one image per prompt, sequentially or in
//! parallel, reporting per-item outcomes in input order.

use std::path::Path;
use std::sync::Arc;

use futures::future::join_all;
use serde::Deserialize;
use serde_json::{json, Value};

use pictor::{write_artifact, BatchOutcome, SamplingOptions};

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{output_dir, sampling_schema};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchGenerateParams {
    prompts: Vec<String>,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default)]
    config: Option<SamplingOptions>,
    #[serde(default)]
    parallel: bool,
}

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "batch_generate".to_string(),
        description: Some(
            "Generate one image per prompt; failures are reported per item and never abort the batch"
                .to_string(),
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "prompts": {
                    "type": "array",
                    "minItems": 1,
                    "items": { "type": "string" },
                    "description": "One generation prompt per item"
                },
                "outputDir": { "type": "string", "description": "Directory for the saved images (default: current directory)" },
                "config": sampling_schema(),
                "parallel": { "type": "boolean", "default": false, "description": "Issue all calls concurrently" }
            },
            "required": ["prompts"]
        }),
    }
}

pub async fn execute(args: Value, service: &Arc<ImageService>) -> McpResult<ToolCallResult> {
    let params: BatchGenerateParams =
        serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    if params.prompts.is_empty() {
        return Err(McpError::InvalidParams(
            "'prompts' must contain at least one entry".to_string(),
        ));
    }
    let sampling = params.config.unwrap_or_default();
    sampling.validate()?;

    let dir = output_dir(params.output_dir.as_deref());

    let outcomes: Vec<BatchOutcome> = if params.parallel {
        // All calls in flight at once; join_all keeps results in input
        // order regardless of completion order.
        join_all(
            params
                .prompts
                .iter()
                .enumerate()
                .map(|(index, prompt)| generate_one(service, prompt, &dir, &sampling, index)),
        )
        .await
    } else {
        let mut collected = Vec::with_capacity(params.prompts.len());
        for (index, prompt) in params.prompts.iter().enumerate() {
            collected.push(generate_one(service, prompt, &dir, &sampling, index).await);
        }
        collected
    };

    let succeeded = outcomes.iter().filter(|o| o.success).count();
    Ok(ToolCallResult::json(&json!({
        "total": outcomes.len(),
        "succeeded": succeeded,
        "outcomes": outcomes,
    })))
}

/// One batch item. Failures are captured in the outcome, never propagated —
/// item i failing must not abort item i+1.
async fn generate_one(
    service: &Arc<ImageService>,
    prompt: &str,
    dir: &Path,
    sampling: &SamplingOptions,
    index: usize,
) -> BatchOutcome {
    let result = async {
        let image = service.generate(prompt, &[], sampling).await?;
        write_artifact(dir, &format!("batch-{index}"), &image.mime_type, &image.bytes).await
    }
    .await;

    match result {
        Ok(path) => BatchOutcome::ok(prompt.to_string(), path),
        Err(e) => {
            tracing::warn!(index, error = %e, "Batch item failed");
            BatchOutcome::failed(prompt.to_string(), e.to_string())
        }
    }
}
