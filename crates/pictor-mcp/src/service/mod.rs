//! The long-lived service handle shared by every tool call.

use std::sync::Arc;

use base64::Engine;

use pictor::{
    build_request, first_image_part, first_text_part, ModelBackend, PictorError, PictorResult,
    ResolvedImage, ResponseKind, SamplingOptions,
};

/// A decoded image produced by the model.
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Capability object wrapping the model backend and the configured model
/// names. Constructed once at startup, passed explicitly into every handler,
/// and never mutated — concurrent tool calls share it without locking.
pub struct ImageService {
    backend: Arc<dyn ModelBackend>,
    image_model: String,
    text_model: String,
}

impl ImageService {
    pub fn new(
        backend: Arc<dyn ModelBackend>,
        image_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            image_model: image_model.into(),
            text_model: text_model.into(),
        }
    }

    /// Run an image-producing generation: prompt plus image parts against
    /// the image model, expecting an image back.
    pub async fn generate(
        &self,
        prompt: &str,
        images: &[ResolvedImage],
        sampling: &SamplingOptions,
    ) -> PictorResult<GeneratedImage> {
        let request = build_request(prompt, images, sampling, ResponseKind::Image);
        let response = self
            .backend
            .generate_content(&self.image_model, &request)
            .await?;

        let inline = first_image_part(&response).ok_or_else(|| {
            PictorError::EmptyResponse("model response contained no image data".to_string())
        })?;

        let bytes = base64::engine::general_purpose::STANDARD.decode(&inline.data)?;
        Ok(GeneratedImage {
            bytes,
            mime_type: inline.mime_type.clone(),
        })
    }

    /// Run a text-producing call: prompt plus image parts against the text
    /// model, no modality hint, expecting a textual answer.
    pub async fn describe(
        &self,
        prompt: &str,
        images: &[ResolvedImage],
        sampling: &SamplingOptions,
    ) -> PictorResult<String> {
        let request = build_request(prompt, images, sampling, ResponseKind::Text);
        let response = self
            .backend
            .generate_content(&self.text_model, &request)
            .await?;

        first_text_part(&response)
            .map(str::to_string)
            .ok_or_else(|| {
                PictorError::EmptyResponse("model response contained no text".to_string())
            })
    }
}
