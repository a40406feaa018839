//! Core data types shared by the tool handlers and the generation pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{PictorError, PictorResult};

/// A client-supplied reference to an image: inline base64 payload or a
/// filesystem path, with an optional free-text description.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReference {
    #[serde(default)]
    pub image_data: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ImageReference {
    /// True when at least one of the two sources is present and non-empty.
    pub fn is_usable(&self) -> bool {
        let has = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());
        has(&self.image_data) || has(&self.image_path)
    }

    /// Validation-layer check, run before any filesystem or network access.
    pub fn require_usable(&self) -> PictorResult<()> {
        if self.is_usable() {
            Ok(())
        } else {
            Err(PictorError::Validation(
                "either 'imageData' or 'imagePath' must be provided".to_string(),
            ))
        }
    }
}

/// An image reference resolved into a uniform inline representation:
/// base64 text plus a declared MIME type.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub data: String,
    pub mime_type: String,
}

/// Caller-supplied sampling knobs, forwarded to the model verbatim.
/// Absent fields are omitted from the outbound request, not defaulted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingOptions {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub top_p: Option<f64>,
    #[serde(default)]
    pub top_k: Option<u32>,
    #[serde(default)]
    pub max_output_tokens: Option<u32>,
}

impl SamplingOptions {
    /// Range-check every present field. Runs at the validation layer,
    /// before any external call.
    pub fn validate(&self) -> PictorResult<()> {
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(PictorError::Validation(format!(
                    "temperature must be between 0 and 2, got {t}"
                )));
            }
        }
        if let Some(p) = self.top_p {
            if !(0.0..=1.0).contains(&p) {
                return Err(PictorError::Validation(format!(
                    "topP must be between 0 and 1, got {p}"
                )));
            }
        }
        if let Some(k) = self.top_k {
            if !(1..=40).contains(&k) {
                return Err(PictorError::Validation(format!(
                    "topK must be between 1 and 40, got {k}"
                )));
            }
        }
        if let Some(m) = self.max_output_tokens {
            if m == 0 {
                return Err(PictorError::Validation(
                    "maxOutputTokens must be a positive integer".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// How strongly a variation should deviate from the source image.
/// Maps onto the model's temperature knob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationStrength {
    Subtle,
    #[default]
    Moderate,
    Strong,
}

impl VariationStrength {
    /// Temperature used when the caller's config did not set one itself.
    pub fn temperature(self) -> f64 {
        match self {
            VariationStrength::Subtle => 0.3,
            VariationStrength::Moderate => 0.7,
            VariationStrength::Strong => 1.2,
        }
    }
}

/// What a comparison between two images should focus on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareType {
    Differences,
    Similarities,
    #[default]
    Both,
}

impl CompareType {
    /// The fixed prompt sent to the model for this comparison mode.
    pub fn prompt(self) -> &'static str {
        match self {
            CompareType::Differences => {
                "Compare these two images and describe the differences between them."
            }
            CompareType::Similarities => {
                "Compare these two images and describe the similarities between them."
            }
            CompareType::Both => {
                "Compare these two images and describe both their similarities and their differences."
            }
        }
    }
}

/// Per-item result of a batch generation, reported back in input order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub prompt: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn ok(prompt: String, filepath: PathBuf) -> Self {
        Self {
            prompt,
            success: true,
            filepath: Some(filepath),
            error: None,
        }
    }

    pub fn failed(prompt: String, error: String) -> Self {
        Self {
            prompt,
            success: false,
            filepath: None,
            error: Some(error),
        }
    }
}
