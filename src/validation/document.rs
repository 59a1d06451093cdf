//! Document validation functionality
//!
//! Inspects a built document for naming problems the builder accepts but that
//! make the CSDL invalid or ambiguous: malformed or duplicate namespaces and aliases,
//! duplicate entity type and member names, key references to undeclared
//! properties, and referential constraints missing one of their ends.
//!
//! The builder itself never rejects these; lookups simply pick the first
//! match in document order. This module only reports.

use super::input::{validate_namespace, validate_simple_identifier};
use crate::document::{MetadataDocument, NodeId, XmlNamespace, XmlTree};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two schemas share a namespace
    DuplicateNamespace { namespace: String },
    /// A schema namespace is not a dotted sequence of simple identifiers
    InvalidNamespace { namespace: String, reason: String },
    /// Two schemas share an alias
    DuplicateAlias { alias: String },
    /// A schema alias is not a simple identifier
    InvalidAlias { alias: String, reason: String },
    /// Two entity types in one schema share a name
    DuplicateEntityType { schema: String, name: String },
    /// Two members (properties or navigation properties) of one entity type share a name
    DuplicateMember { entity_type: String, name: String },
    /// A `PropertyRef` names no property declared on the entity type
    UnknownKeyProperty { entity_type: String, name: String },
    /// A `ReferentialConstraint` lacks `Property` or `ReferencedProperty`
    IncompleteReferentialConstraint { entity_type: String, navigation: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateNamespace { namespace } => {
                write!(f, "Schema namespace '{}' is declared more than once", namespace)
            }
            ValidationIssue::InvalidNamespace { namespace, reason } => {
                write!(f, "Schema namespace '{}' is invalid: {}", namespace, reason)
            }
            ValidationIssue::DuplicateAlias { alias } => {
                write!(f, "Schema alias '{}' is declared more than once", alias)
            }
            ValidationIssue::InvalidAlias { alias, reason } => {
                write!(f, "Schema alias '{}' is invalid: {}", alias, reason)
            }
            ValidationIssue::DuplicateEntityType { schema, name } => {
                write!(f, "EntityType '{}' is declared more than once in schema '{}'", name, schema)
            }
            ValidationIssue::DuplicateMember { entity_type, name } => {
                write!(f, "Member '{}' is declared more than once on '{}'", name, entity_type)
            }
            ValidationIssue::UnknownKeyProperty { entity_type, name } => {
                write!(f, "Key of '{}' references undeclared property '{}'", entity_type, name)
            }
            ValidationIssue::IncompleteReferentialConstraint {
                entity_type,
                navigation,
            } => write!(
                f,
                "Navigation '{}' on '{}' has a referential constraint without Property/ReferencedProperty",
                navigation, entity_type
            ),
        }
    }
}

/// Result of document validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocumentValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl DocumentValidationResult {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Document validator
#[derive(Debug, Default)]
pub struct DocumentValidator;

impl DocumentValidator {
    /// Create a new document validator
    pub fn new() -> Self {
        Self
    }

    /// Collect every issue found in `document`, in document order
    pub fn validate(&self, document: &MetadataDocument) -> DocumentValidationResult {
        let tree = document.tree();
        let mut issues = Vec::new();
        let mut namespaces = HashSet::new();
        let mut aliases = HashSet::new();

        for schema in document.schemas() {
            let namespace = tree.attribute(schema, "Namespace").unwrap_or_default();
            if let Err(e) = validate_namespace(namespace) {
                issues.push(ValidationIssue::InvalidNamespace {
                    namespace: namespace.to_string(),
                    reason: e.to_string(),
                });
            }
            if !namespaces.insert(namespace) {
                issues.push(ValidationIssue::DuplicateNamespace {
                    namespace: namespace.to_string(),
                });
            }

            if let Some(alias) = tree.attribute(schema, "Alias") {
                if let Err(e) = validate_simple_identifier("alias", alias) {
                    issues.push(ValidationIssue::InvalidAlias {
                        alias: alias.to_string(),
                        reason: e.to_string(),
                    });
                }
                if !aliases.insert(alias) {
                    issues.push(ValidationIssue::DuplicateAlias {
                        alias: alias.to_string(),
                    });
                }
            }

            self.validate_schema(tree, schema, namespace, &mut issues);
        }

        for issue in &issues {
            warn!("{}", issue);
        }

        DocumentValidationResult { issues }
    }

    fn validate_schema(
        &self,
        tree: &XmlTree,
        schema: NodeId,
        namespace: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let mut entity_names = HashSet::new();

        for &entity in tree.children(schema) {
            if !tree.node(entity).is(XmlNamespace::Edm, "EntityType") {
                continue;
            }
            let name = tree.attribute(entity, "Name").unwrap_or_default();
            if !entity_names.insert(name) {
                issues.push(ValidationIssue::DuplicateEntityType {
                    schema: namespace.to_string(),
                    name: name.to_string(),
                });
            }
            let qualified = format!("{}.{}", namespace, name);
            self.validate_entity_type(tree, entity, &qualified, issues);
        }
    }

    fn validate_entity_type(
        &self,
        tree: &XmlTree,
        entity: NodeId,
        qualified: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let mut members = HashSet::new();
        let mut properties = HashSet::new();
        let mut key_refs = Vec::new();

        for &child in tree.children(entity) {
            let node = tree.node(child);
            let name = node.attribute("Name").unwrap_or_default();
            match node.tag() {
                "Property" | "NavigationProperty" => {
                    if !members.insert(name) {
                        issues.push(ValidationIssue::DuplicateMember {
                            entity_type: qualified.to_string(),
                            name: name.to_string(),
                        });
                    }
                    if node.tag() == "Property" {
                        properties.insert(name);
                    } else {
                        self.validate_navigation(tree, child, qualified, name, issues);
                    }
                }
                "Key" => {
                    key_refs.extend(
                        tree.children(child)
                            .iter()
                            .filter_map(|r| tree.attribute(*r, "Name")),
                    );
                }
                _ => {}
            }
        }

        // Paths into complex properties are not checked.
        for key in key_refs {
            if !key.contains('/') && !properties.contains(key) {
                issues.push(ValidationIssue::UnknownKeyProperty {
                    entity_type: qualified.to_string(),
                    name: key.to_string(),
                });
            }
        }
    }

    fn validate_navigation(
        &self,
        tree: &XmlTree,
        navigation: NodeId,
        qualified: &str,
        name: &str,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let incomplete = tree.children(navigation).iter().any(|c| {
            let node = tree.node(*c);
            node.tag() == "ReferentialConstraint"
                && (node.attribute("Property").is_none()
                    || node.attribute("ReferencedProperty").is_none())
        });
        if incomplete {
            issues.push(ValidationIssue::IncompleteReferentialConstraint {
                entity_type: qualified.to_string(),
                navigation: name.to_string(),
            });
        }
    }
}
