//! Prompt registration and dispatch.
//!
//! The style-template catalog doubles as the MCP prompt list: each template
//! expands to the exact prompt `generate_with_template` would send.

use serde_json::Value;

use pictor::templates;

use crate::types::{
    McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult, PromptMessage,
    ToolContent,
};

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        templates::TEMPLATES
            .iter()
            .map(|template| PromptDefinition {
                name: template.name.to_string(),
                description: Some(template.description.to_string()),
                arguments: Some(vec![PromptArgument {
                    name: "customization".to_string(),
                    description: Some("Appended to the template prompt".to_string()),
                    required: true,
                }]),
            })
            .collect()
    }

    pub fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let template =
            templates::find(name).ok_or_else(|| McpError::PromptNotFound(name.to_string()))?;

        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));
        let customization = args
            .get("customization")
            .and_then(Value::as_str)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                McpError::InvalidParams("'customization' argument is required".to_string())
            })?;

        let text = templates::compose_prompt(template, customization);

        Ok(PromptGetResult {
            description: Some(template.description.to_string()),
            messages: vec![PromptMessage {
                role: "user".to_string(),
                content: ToolContent::Text { text },
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_one_prompt_per_template() {
        let prompts = PromptRegistry::list_prompts();
        assert_eq!(prompts.len(), templates::TEMPLATES.len());
        assert!(prompts.iter().any(|p| p.name == "logo"));
    }

    #[test]
    fn expands_to_the_tool_prompt() {
        let result =
            PromptRegistry::get("logo", Some(json!({ "customization": "for a coffee shop" })))
                .unwrap();
        let ToolContent::Text { text } = &result.messages[0].content else {
            panic!("expected text content");
        };
        let logo = templates::find("logo").unwrap();
        assert_eq!(*text, format!("{}. for a coffee shop", logo.prompt));
    }

    #[test]
    fn unknown_prompt_and_missing_argument_fail() {
        assert!(matches!(
            PromptRegistry::get("watercolor", None),
            Err(McpError::PromptNotFound(_))
        ));
        assert!(matches!(
            PromptRegistry::get("logo", None),
            Err(McpError::InvalidParams(_))
        ));
    }
}
