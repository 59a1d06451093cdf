//! Export functionality
//!
//! Renders a metadata document to CSDL XML, compact or pretty printed.

pub mod config;
pub mod xml;

pub use config::{DEFAULT_CSDL_VERSION, ExportConfig, ExportConfigBuilder};
pub use xml::write_tree;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(String),
}
