//! Navigation property construction

use super::tree::{Attributes, NodeId, XmlNamespace, XmlTree};
use crate::models::NavigationSpec;
use tracing::debug;

/// Append one `NavigationProperty` to `entity_type`.
///
/// `target` is the qualified name of the related entity type exactly as the
/// caller wrote it, and `partner` the name of the reciprocal navigation on
/// that entity type. Single-valued navigations always get one
/// `ReferentialConstraint` child; collection-valued ones never do.
pub(crate) fn append_navigation_property(
    tree: &mut XmlTree,
    entity_type: NodeId,
    target: &str,
    partner: &str,
    nav: &NavigationSpec,
) -> NodeId {
    let type_name = if nav.multiplicity.is_collection() {
        format!("Collection({})", target)
    } else {
        target.to_string()
    };

    let attributes = Attributes::new()
        .with("Name", &nav.name)
        .with("Type", type_name)
        .with_opt("Nullable", nav.multiplicity.nullable())
        .with("Partner", partner);
    let nav_node = tree.create_child(entity_type, XmlNamespace::Edm, "NavigationProperty", attributes);

    if !nav.multiplicity.is_collection() {
        let constraint = Attributes::new()
            .with_opt("Property", nav.property.as_deref())
            .with_opt("ReferencedProperty", nav.referenced_property.as_deref());
        tree.create_child(nav_node, XmlNamespace::Edm, "ReferentialConstraint", constraint);
    }

    if let Some(action) = nav.on_delete {
        tree.create_child(
            nav_node,
            XmlNamespace::Edm,
            "OnDelete",
            Attributes::new().with("Action", action),
        );
    }

    debug!(
        "Added navigation property '{}' -> {} (partner '{}')",
        nav.name, target, partner
    );

    nav_node
}
