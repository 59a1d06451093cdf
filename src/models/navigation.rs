//! Navigation property models

use super::enums::{Multiplicity, OnDeleteAction};
use serde::{Deserialize, Serialize};

/// One side of a bidirectional navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSpec {
    /// Name of the navigation property created on the owning entity type
    pub name: String,
    #[serde(default)]
    pub multiplicity: Multiplicity,
    /// Dependent property for the referential constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Principal property on the related entity type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<OnDeleteAction>,
}

impl NavigationSpec {
    pub fn new(name: impl Into<String>, multiplicity: Multiplicity) -> Self {
        Self {
            name: name.into(),
            multiplicity,
            property: None,
            referenced_property: None,
            on_delete: None,
        }
    }

    /// Set both ends of the referential constraint
    pub fn constraint(
        mut self,
        property: impl Into<String>,
        referenced_property: impl Into<String>,
    ) -> Self {
        self.property = Some(property.into());
        self.referenced_property = Some(referenced_property.into());
        self
    }

    pub fn on_delete(mut self, action: OnDeleteAction) -> Self {
        self.on_delete = Some(action);
        self
    }
}

/// A pair of partnered navigation properties between two entity types
///
/// `forward` is created on the source entity type and points at the target,
/// `backward` is created on the target and points back at the source. Both
/// entity types are named by qualified name (`<namespace-or-alias>.<Name>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiDirectionalNavigation {
    pub source_entity_type: String,
    pub target_entity_type: String,
    pub forward: NavigationSpec,
    pub backward: NavigationSpec,
}

impl BiDirectionalNavigation {
    pub fn new(
        source_entity_type: impl Into<String>,
        target_entity_type: impl Into<String>,
        forward: NavigationSpec,
        backward: NavigationSpec,
    ) -> Self {
        Self {
            source_entity_type: source_entity_type.into(),
            target_entity_type: target_entity_type.into(),
            forward,
            backward,
        }
    }
}
