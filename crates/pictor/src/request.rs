//! Gemini `generateContent` request shapes and the request builder.

use serde::Serialize;

use crate::types::{ResolvedImage, SamplingOptions};

/// Top-level `generateContent` request envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// Content container: one user turn holding the ordered part list.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: &'static str,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline image parts.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload for image parts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Sampling knobs plus the response-modality hint. Every field is omitted
/// from the wire when absent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<&'static str>>,
}

/// Which kind of response the tool expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Generation, editing, variation, template, and multi-image tools —
    /// the model is asked for `["TEXT", "IMAGE"]` modalities.
    Image,
    /// Analysis and comparison tools — no modality hint, text comes back.
    Text,
}

/// Build the exact request the model expects: the text prompt first, then
/// image parts in input order, plus the sampling configuration.
pub fn build_request(
    prompt: &str,
    images: &[ResolvedImage],
    sampling: &SamplingOptions,
    kind: ResponseKind,
) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(1 + images.len());
    parts.push(Part::Text {
        text: prompt.to_string(),
    });
    for image in images {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        });
    }

    let generation_config = GenerationConfig {
        temperature: sampling.temperature,
        top_p: sampling.top_p,
        top_k: sampling.top_k,
        max_output_tokens: sampling.max_output_tokens,
        response_modalities: match kind {
            ResponseKind::Image => Some(vec!["TEXT", "IMAGE"]),
            ResponseKind::Text => None,
        },
    };

    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts,
        }],
        generation_config,
    }
}
