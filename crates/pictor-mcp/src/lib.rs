//! Pictor MCP Server — image generation, editing, and analysis tools over
//! the Model Context Protocol, backed by the Gemini API.

pub mod config;
pub mod prompts;
pub mod protocol;
pub mod service;
pub mod tools;
pub mod transport;
pub mod types;

pub use protocol::ProtocolHandler;
pub use service::ImageService;
pub use transport::StdioTransport;
