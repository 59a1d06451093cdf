//! CSDL Metadata SDK - builder for OData metadata documents
//!
//! Provides:
//! - An append-only CSDL document model (schemas, entity types, keys,
//!   partnered navigation properties)
//! - Qualified-name resolution by namespace or alias
//! - XML export, compact or pretty printed
//! - Loading whole document definitions from JSON or YAML
//! - Naming checks over a built document

pub mod document;
pub mod export;
pub mod import;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use document::{DocumentError, MetadataDocument, NodeId, XmlTree};
pub use export::{ExportConfig, ExportError};
pub use import::{ImportError, MetadataDefinition};
pub use validation::{DocumentValidationResult, DocumentValidator, ValidationIssue};

// Re-export models
pub use models::enums::*;
pub use models::{
    BiDirectionalNavigation, EntityTypeSpec, IncludeSpec, NavigationSpec, PropertySpec,
    ReferenceSpec, SchemaSpec,
};
