//! HTTP client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;

use crate::error::{PictorError, PictorResult};
use crate::request::GenerateContentRequest;
use crate::response::GenerateContentResponse;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Maximum length of an error body echoed into an error message.
const MAX_ERROR_BODY: usize = 512;

/// The model call seam. Handlers talk to this trait so tests can substitute
/// a stub for the live API.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> PictorResult<GenerateContentResponse>;
}

/// Live client for the Gemini REST API. Constructed once at startup and
/// shared across all tool calls; holds no mutable state.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_base = std::env::var("GEMINI_API_BASE")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            http: reqwest::Client::new(),
            api_base,
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        let trimmed = model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{trimmed}")
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }
}

#[async_trait]
impl ModelBackend for GeminiClient {
    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> PictorResult<GenerateContentResponse> {
        let endpoint = self.endpoint(model);
        tracing::debug!(model, "Calling generateContent");

        let response = self
            .http
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PictorError::Api {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &text[..end])
}
