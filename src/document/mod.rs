//! Metadata document builder
//!
//! [`MetadataDocument`] owns a single CSDL tree:
//!
//! ```text
//! edmx:Edmx Version=...
//! ├── edmx:Reference*          (add_reference)
//! └── edmx:DataServices
//!     └── Schema*              (add_schema)
//!         └── EntityType*      (add_entity_type)
//!             ├── Key
//!             │   └── PropertyRef*
//!             ├── Property*
//!             └── NavigationProperty*   (add_bidirectional_navigation)
//!                 ├── ReferentialConstraint?
//!                 └── OnDelete?
//! ```
//!
//! The tree is append-only. Every fallible operation resolves everything it
//! needs before appending, so an error never leaves a partial mutation behind.
//!
//! # Example
//!
//! ```rust
//! use csdl_metadata_sdk::MetadataDocument;
//! use csdl_metadata_sdk::models::{
//!     BiDirectionalNavigation, EntityTypeSpec, Multiplicity, NavigationSpec, PrimitiveType,
//!     PropertySpec, SchemaSpec,
//! };
//!
//! let mut doc = MetadataDocument::new();
//! doc.add_schema(&SchemaSpec::new("Corvus.Data.App").with_alias("App"));
//! doc.add_entity_type(
//!     "Corvus.Data.App",
//!     &EntityTypeSpec::new("Category")
//!         .property(PropertySpec::new("CategoryID", PrimitiveType::Int32).key()),
//! )?;
//! doc.add_entity_type(
//!     "Corvus.Data.App",
//!     &EntityTypeSpec::new("Product")
//!         .property(PropertySpec::new("ProductId", PrimitiveType::Int32).key())
//!         .property(PropertySpec::new("CategoryID", PrimitiveType::Int32)),
//! )?;
//! doc.add_bidirectional_navigation(&BiDirectionalNavigation::new(
//!     "App.Category",
//!     "App.Product",
//!     NavigationSpec::new("Products", Multiplicity::Many),
//!     NavigationSpec::new("Category", Multiplicity::ZeroOrOne).constraint("CategoryID", "ProductId"),
//! ))?;
//!
//! let xml = doc.to_xml(false)?;
//! assert!(xml.contains(r#"<NavigationProperty Name="Products" Type="Collection(App.Product)" Partner="Category"/>"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
mod navigation;
pub mod resolver;
pub mod tree;

pub use error::DocumentError;
pub use tree::{Attributes, NodeId, XmlNamespace, XmlNode, XmlTree};

use crate::export::{ExportConfig, ExportError, write_tree};
use crate::models::{BiDirectionalNavigation, EntityTypeSpec, ReferenceSpec, SchemaSpec};
use tracing::debug;

/// An OData CSDL metadata document under construction
#[derive(Debug, Clone)]
pub struct MetadataDocument {
    tree: XmlTree,
    data_services: NodeId,
    config: ExportConfig,
}

impl Default for MetadataDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataDocument {
    /// Create an empty document with default configuration
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    /// Create an empty document; `config.version` becomes `edmx:Edmx/@Version`
    pub fn with_config(config: ExportConfig) -> Self {
        let mut tree = XmlTree::new(
            XmlNamespace::Edmx,
            "Edmx",
            Attributes::new().with("Version", &config.version),
        );
        let root = tree.root();
        let data_services =
            tree.create_child(root, XmlNamespace::Edmx, "DataServices", Attributes::new());

        Self {
            tree,
            data_services,
            config,
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Read-only view of the underlying tree
    pub fn tree(&self) -> &XmlTree {
        &self.tree
    }

    /// The `edmx:DataServices` node
    pub fn data_services(&self) -> NodeId {
        self.data_services
    }

    /// Schema nodes in document order
    pub fn schemas(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .children(self.data_services)
            .iter()
            .copied()
            .filter(|id| self.tree.node(*id).is(XmlNamespace::Edm, "Schema"))
    }

    /// Number of schemas, duplicates included
    pub fn schema_count(&self) -> usize {
        self.schemas().count()
    }

    /// Add an `edmx:Reference` with its `edmx:Include` children.
    ///
    /// References are placed ahead of `edmx:DataServices`, after any earlier
    /// references.
    pub fn add_reference(&mut self, reference: &ReferenceSpec) -> NodeId {
        let root = self.tree.root();
        let reference_node = self.tree.insert_child_before(
            root,
            self.data_services,
            XmlNamespace::Edmx,
            "Reference",
            Attributes::new().with("Uri", &reference.uri),
        );

        for include in &reference.includes {
            self.tree.create_child(
                reference_node,
                XmlNamespace::Edmx,
                "Include",
                Attributes::new()
                    .with("Namespace", &include.namespace)
                    .with_opt("Alias", include.alias.as_deref()),
            );
        }

        debug!(
            "Added reference '{}' with {} include(s)",
            reference.uri,
            reference.includes.len()
        );
        reference_node
    }

    /// Append a `Schema` under `edmx:DataServices`.
    ///
    /// Namespaces are not checked for uniqueness; with duplicates, lookups
    /// find the first one registered.
    pub fn add_schema(&mut self, schema: &SchemaSpec) -> NodeId {
        let attributes = Attributes::new()
            .with("Namespace", &schema.namespace)
            .with_opt("Alias", schema.alias.as_deref());
        let id = self
            .tree
            .create_child(self.data_services, XmlNamespace::Edm, "Schema", attributes);

        debug!(
            "Added schema '{}' (alias: {:?})",
            schema.namespace, schema.alias
        );
        id
    }

    /// Append an `EntityType`, its `Key` and its properties to the schema
    /// whose `Namespace` is exactly `schema_namespace`.
    ///
    /// The key is always created, even when no property is a key member.
    /// `PropertyRef`s follow the order of the key properties in the input.
    pub fn add_entity_type(
        &mut self,
        schema_namespace: &str,
        entity_type: &EntityTypeSpec,
    ) -> Result<NodeId, DocumentError> {
        let schema =
            resolver::find_schema_by_namespace(&self.tree, self.data_services, schema_namespace)
                .ok_or_else(|| DocumentError::SchemaNotFound(schema_namespace.to_string()))?;

        let attributes = Attributes::new()
            .with("Name", &entity_type.name)
            .with_opt("BaseType", entity_type.base_type.as_deref())
            .with_opt("Abstract", entity_type.is_abstract)
            .with_opt("OpenType", entity_type.open)
            .with_opt("HasStream", entity_type.has_stream);
        let entity = self
            .tree
            .create_child(schema, XmlNamespace::Edm, "EntityType", attributes);
        let key = self
            .tree
            .create_child(entity, XmlNamespace::Edm, "Key", Attributes::new());

        for property in &entity_type.properties {
            let attributes = Attributes::new()
                .with("Name", &property.name)
                .with("Type", property.type_name())
                .with_opt("Nullable", property.nullable)
                .with_opt("MaxLength", property.max_length)
                .with_opt("Precision", property.precision)
                .with_opt("Scale", property.scale)
                .with_opt("Unicode", property.unicode)
                .with_opt("SRID", property.srid.as_deref())
                .with_opt("DefaultValue", property.default_value.as_deref());
            self.tree
                .create_child(entity, XmlNamespace::Edm, "Property", attributes);

            if property.is_key {
                self.tree.create_child(
                    key,
                    XmlNamespace::Edm,
                    "PropertyRef",
                    Attributes::new()
                        .with("Name", property.key_ref_name())
                        .with_opt("Alias", property.key_alias.as_deref()),
                );
            }
        }

        debug!(
            "Added entity type '{}' to schema '{}' ({} properties, {} key members)",
            entity_type.name,
            schema_namespace,
            entity_type.properties.len(),
            entity_type.key_properties().count()
        );
        Ok(entity)
    }

    /// Create a partnered pair of navigation properties.
    ///
    /// Both entity types are resolved before anything is appended: either
    /// both navigation properties are created or neither is. Returns the
    /// forward (on the source) and backward (on the target) nodes.
    pub fn add_bidirectional_navigation(
        &mut self,
        link: &BiDirectionalNavigation,
    ) -> Result<(NodeId, NodeId), DocumentError> {
        let source = self.resolve_entity_type(&link.source_entity_type)?;
        let target = self.resolve_entity_type(&link.target_entity_type)?;

        let forward = navigation::append_navigation_property(
            &mut self.tree,
            source,
            &link.target_entity_type,
            &link.backward.name,
            &link.forward,
        );
        let backward = navigation::append_navigation_property(
            &mut self.tree,
            target,
            &link.source_entity_type,
            &link.forward.name,
            &link.backward,
        );

        Ok((forward, backward))
    }

    /// Locate an `EntityType` node by qualified name (namespace or alias)
    pub fn resolve_entity_type(&self, full_name: &str) -> Result<NodeId, DocumentError> {
        resolver::resolve_entity_type(&self.tree, self.data_services, full_name)
    }

    /// Render the document using the configured indentation, overriding pretty printing
    pub fn to_xml(&self, pretty_print: bool) -> Result<String, ExportError> {
        let config = ExportConfig {
            pretty_print,
            ..self.config.clone()
        };
        self.serialize(&config)
    }

    /// Render the document with an explicit configuration
    pub fn serialize(&self, config: &ExportConfig) -> Result<String, ExportError> {
        write_tree(&self.tree, config)
    }
}
