//! Import functionality
//!
//! Reads document definitions (JSON or YAML) and applies them to a
//! `MetadataDocument`.

pub mod definition;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

// Re-export for convenience
pub use definition::{EntityTypeDefinition, MetadataDefinition};
