//! Gemini `generateContent` response shapes and content extraction.
//!
//! Extraction is a linear scan returning the first matching part. It is
//! deliberately free of I/O so it can be tested against canned responses.

use serde::Deserialize;

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Content container within a candidate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part may carry text, inline data, neither, or both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "inlineData")]
    pub inline_data: Option<ResponseInlineData>,
}

/// Inline binary payload within a response part.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInlineData {
    #[serde(default = "default_mime")]
    pub mime_type: String,
    pub data: String,
}

fn default_mime() -> String {
    "image/png".to_string()
}

/// First part carrying inline binary data, scanning candidates and parts in
/// order. Multiple images are not disambiguated; only the first is used.
pub fn first_image_part(response: &GenerateContentResponse) -> Option<&ResponseInlineData> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(|part| part.inline_data.as_ref())
        .filter(|inline| !inline.data.is_empty())
}

/// First non-empty textual part, scanning candidates and parts in order.
pub fn first_text_part(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .iter()
        .filter_map(|c| c.content.as_ref())
        .flat_map(|content| content.parts.iter())
        .find_map(|part| part.text.as_deref())
        .filter(|text| !text.is_empty())
}
