//! Tool registration and dispatch.

use std::sync::Arc;

use serde_json::Value;

use crate::service::ImageService;
use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::{
    analyze_image, batch_generate, compare_images, edit_image, generate_image,
    generate_variations, generate_with_template, multi_image_edit,
};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![
            generate_image::definition(),
            edit_image::definition(),
            analyze_image::definition(),
            multi_image_edit::definition(),
            batch_generate::definition(),
            generate_variations::definition(),
            generate_with_template::definition(),
            compare_images::definition(),
        ]
    }

    /// Route a tool call by name. Handler failures are caught here and
    /// reported as `isError` tool results so a bad call never takes the
    /// server down; only an unknown tool name is a protocol-level error.
    pub async fn call(
        name: &str,
        arguments: Option<Value>,
        service: &Arc<ImageService>,
    ) -> McpResult<ToolCallResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        let outcome = match name {
            "generate_image" => generate_image::execute(args, service).await,
            "edit_image" => edit_image::execute(args, service).await,
            "analyze_image" => analyze_image::execute(args, service).await,
            "multi_image_edit" => multi_image_edit::execute(args, service).await,
            "batch_generate" => batch_generate::execute(args, service).await,
            "generate_variations" => generate_variations::execute(args, service).await,
            "generate_with_template" => generate_with_template::execute(args, service).await,
            "compare_images" => compare_images::execute(args, service).await,
            _ => return Err(McpError::ToolNotFound(name.to_string())),
        };

        match outcome {
            Ok(result) => {
                tracing::info!(tool = %name, "Tool executed successfully");
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "Tool execution failed");
                Ok(ToolCallResult::error(e.to_string()))
            }
        }
    }
}
