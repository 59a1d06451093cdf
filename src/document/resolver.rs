//! Qualified-name resolution
//!
//! A qualified name is `<namespace-or-alias>.<SimpleName>`. The schema part is
//! matched against `Namespace` first; only when that fails and the schema part
//! is itself a simple identifier is it tried as an `Alias` (a dotted string can
//! never be an alias). The first match in document order wins.
//!
//! Lookups go through [`XmlTree::find_descendant`] with predicates that also
//! pin the element kind, rather than the kind-agnostic
//! [`XmlTree::find_by_attribute`]: a `NavigationProperty` or `PropertyRef`
//! carrying the same `Name` must not shadow an `EntityType`.

use super::error::DocumentError;
use super::tree::{NodeId, XmlNamespace, XmlTree};
use crate::validation::input::is_simple_identifier;
use tracing::{debug, warn};

/// A name split into its schema part and its simple name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace_or_alias: &'a str,
    pub name: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Split on the last `.` of the trimmed input.
    ///
    /// Fails with `InvalidQualifiedName` when there is no `.` at all.
    pub fn parse(full_name: &'a str) -> Result<Self, DocumentError> {
        let trimmed = full_name.trim();
        match trimmed.rsplit_once('.') {
            Some((namespace_or_alias, name)) => Ok(Self {
                namespace_or_alias,
                name,
            }),
            None => Err(DocumentError::InvalidQualifiedName(full_name.to_string())),
        }
    }
}

fn is_schema(tree: &XmlTree, id: NodeId) -> bool {
    tree.node(id).is(XmlNamespace::Edm, "Schema")
}

/// Schema whose `Namespace` equals `namespace` exactly (aliases are not considered)
pub fn find_schema_by_namespace(
    tree: &XmlTree,
    data_services: NodeId,
    namespace: &str,
) -> Option<NodeId> {
    tree.find_descendant(data_services, |node| {
        node.is(XmlNamespace::Edm, "Schema") && node.attribute("Namespace") == Some(namespace)
    })
}

/// Schema named by `namespace_or_alias`, falling back to the alias for simple identifiers
pub fn resolve_schema(
    tree: &XmlTree,
    data_services: NodeId,
    namespace_or_alias: &str,
) -> Result<NodeId, DocumentError> {
    if let Some(schema) = find_schema_by_namespace(tree, data_services, namespace_or_alias) {
        return Ok(schema);
    }

    if is_simple_identifier(namespace_or_alias) {
        let by_alias = tree
            .descendants(data_services)
            .filter(|id| is_schema(tree, *id))
            .find(|id| tree.attribute(*id, "Alias") == Some(namespace_or_alias));
        if let Some(schema) = by_alias {
            debug!("Resolved '{}' as a schema alias", namespace_or_alias);
            return Ok(schema);
        }
    } else {
        warn!(
            "No schema with namespace '{}'; not a simple identifier, so aliases were not tried",
            namespace_or_alias
        );
    }

    Err(DocumentError::SchemaNotFound(namespace_or_alias.to_string()))
}

/// Entity type declared in `schema` with the given simple name
pub fn find_entity_type(tree: &XmlTree, schema: NodeId, name: &str) -> Option<NodeId> {
    tree.find_descendant(schema, |node| {
        node.is(XmlNamespace::Edm, "EntityType") && node.attribute("Name") == Some(name)
    })
}

/// Resolve a qualified entity type name to its `EntityType` node
pub fn resolve_entity_type(
    tree: &XmlTree,
    data_services: NodeId,
    full_name: &str,
) -> Result<NodeId, DocumentError> {
    let qualified = QualifiedName::parse(full_name)?;
    let schema = resolve_schema(tree, data_services, qualified.namespace_or_alias)?;
    find_entity_type(tree, schema, qualified.name).ok_or_else(|| {
        DocumentError::EntityTypeNotFound {
            entity: qualified.name.to_string(),
            schema: qualified.namespace_or_alias.to_string(),
        }
    })
}
