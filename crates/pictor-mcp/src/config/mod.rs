//! Configuration resolution: explicit flag > environment > default.

const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash";

/// Resolve the API credential. Absence is a fatal startup error, handled by
/// the caller — tools never re-check it per call.
pub fn resolve_api_key(explicit: Option<&str>) -> Option<String> {
    if let Some(key) = explicit {
        return Some(key.to_string());
    }

    non_empty_env("GEMINI_API_KEY").or_else(|| non_empty_env("GOOGLE_API_KEY"))
}

/// Resolve the model used for image-producing tools.
pub fn resolve_image_model(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| non_empty_env("GEMINI_IMAGE_MODEL"))
        .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string())
}

/// Resolve the plain-text model used for analysis and comparison.
pub fn resolve_text_model(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| non_empty_env("GEMINI_TEXT_MODEL"))
        .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
