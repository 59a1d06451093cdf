//! Error types for document mutation

use thiserror::Error;

/// Errors raised while locating schemas and entity types in a document
///
/// Every error is detected before anything is appended, so a failed call
/// leaves the document exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The name does not carry a namespace or alias component
    #[error(
        "Invalid qualified name '{0}': expected '<namespace-or-alias>.<Name>'"
    )]
    InvalidQualifiedName(String),

    /// No schema has the namespace (or alias) that was asked for
    #[error("Schema '{0}' not found")]
    SchemaNotFound(String),

    /// The schema exists but declares no entity type with that name
    #[error("EntityType '{entity}' not found in schema '{schema}'")]
    EntityTypeNotFound { entity: String, schema: String },
}
