//! Metadata definition importer
//!
//! A `MetadataDefinition` describes a whole document as data: references,
//! schemas, entity types and navigations. It can be read from JSON or YAML and
//! applied to a [`MetadataDocument`] in a fixed order (references, schemas,
//! entity types, navigations), so a definition never depends on the order its
//! sections appear in the source text.
//!
//! # Example
//!
//! ```rust
//! use csdl_metadata_sdk::ExportConfig;
//! use csdl_metadata_sdk::import::MetadataDefinition;
//!
//! let yaml = r#"
//! schemas:
//!   - namespace: Demo
//! entityTypes:
//!   - schema: Demo
//!     name: Item
//!     properties:
//!       - { name: Id, type: Edm.Guid, isKey: true }
//! "#;
//! let definition = MetadataDefinition::from_yaml(yaml).unwrap();
//! let document = definition.build(ExportConfig::default()).unwrap();
//! assert!(document.resolve_entity_type("Demo.Item").is_ok());
//! ```

use super::ImportError;
use crate::document::MetadataDocument;
use crate::export::ExportConfig;
use crate::models::{BiDirectionalNavigation, EntityTypeSpec, ReferenceSpec, SchemaSpec};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// An entity type together with the namespace of the schema that owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeDefinition {
    /// Namespace of the owning schema (aliases are not accepted here)
    pub schema: String,
    #[serde(flatten)]
    pub entity: EntityTypeSpec,
}

/// A complete document description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDefinition {
    #[serde(default)]
    pub references: Vec<ReferenceSpec>,
    #[serde(default)]
    pub schemas: Vec<SchemaSpec>,
    #[serde(default)]
    pub entity_types: Vec<EntityTypeDefinition>,
    #[serde(default)]
    pub navigations: Vec<BiDirectionalNavigation>,
}

impl MetadataDefinition {
    /// Parse a definition from JSON text
    pub fn from_json(content: &str) -> Result<Self, ImportError> {
        serde_json::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Failed to parse JSON definition: {}", e)))
    }

    /// Parse a definition from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ImportError> {
        serde_yaml::from_str(content)
            .map_err(|e| ImportError::ParseError(format!("Failed to parse YAML definition: {}", e)))
    }

    /// Add everything in this definition to `document`.
    ///
    /// Stops at the first entity type or navigation that cannot be resolved;
    /// items added before the failure stay in the document.
    pub fn apply(&self, document: &mut MetadataDocument) -> Result<()> {
        for reference in &self.references {
            document.add_reference(reference);
        }

        for schema in &self.schemas {
            document.add_schema(schema);
        }

        for definition in &self.entity_types {
            document
                .add_entity_type(&definition.schema, &definition.entity)
                .with_context(|| {
                    format!(
                        "Failed to add entity type '{}' to schema '{}'",
                        definition.entity.name, definition.schema
                    )
                })?;
        }

        for navigation in &self.navigations {
            document
                .add_bidirectional_navigation(navigation)
                .with_context(|| {
                    format!(
                        "Failed to link '{}' ({}) with '{}' ({})",
                        navigation.source_entity_type,
                        navigation.forward.name,
                        navigation.target_entity_type,
                        navigation.backward.name
                    )
                })?;
        }

        info!(
            "Applied definition: {} references, {} schemas, {} entity types, {} navigations",
            self.references.len(),
            self.schemas.len(),
            self.entity_types.len(),
            self.navigations.len()
        );
        Ok(())
    }

    /// Build a fresh document from this definition
    pub fn build(&self, config: ExportConfig) -> Result<MetadataDocument> {
        let mut document = MetadataDocument::with_config(config);
        self.apply(&mut document)?;
        Ok(document)
    }
}
