//! MCP prompt implementations.

pub mod registry;

pub use registry::PromptRegistry;
