//! Pictor — core library for Gemini-backed image generation.
//!
//! Covers the non-protocol half of the system: resolving image references
//! into inline payloads, shaping `generateContent` requests, extracting
//! generated content from responses, and persisting artifacts to disk.

pub mod artifact;
pub mod client;
pub mod error;
pub mod request;
pub mod resolve;
pub mod response;
pub mod templates;
pub mod types;

pub use artifact::{artifact_filename, extension_for_mime, write_artifact};
pub use client::{GeminiClient, ModelBackend};
pub use error::{PictorError, PictorResult};
pub use request::{build_request, ResponseKind};
pub use resolve::{mime_for_path, resolve_image};
pub use response::{first_image_part, first_text_part};
pub use types::*;
