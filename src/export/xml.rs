//! XML writer for metadata documents
//!
//! Renders an [`XmlTree`] with `quick-xml`. Namespace declarations are derived
//! from the tree: the root declares `xmlns:edmx`, and every EDM element whose
//! parent is not an EDM element (in practice each `Schema`) declares the EDM
//! namespace as its default namespace.

use super::{ExportConfig, ExportError};
use crate::document::tree::{NodeId, XmlNamespace, XmlTree};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::Write;

/// Serialize `tree` to a UTF-8 string
pub fn write_tree(tree: &XmlTree, config: &ExportConfig) -> Result<String, ExportError> {
    let buffer = if config.pretty_print {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', config.indent_size);
        write_document(&mut writer, tree)?;
        writer.into_inner()
    } else {
        let mut writer = Writer::new(Vec::new());
        write_document(&mut writer, tree)?;
        writer.into_inner()
    };

    String::from_utf8(buffer).map_err(|e| ExportError::Utf8(e.to_string()))
}

fn write_document<W: Write>(writer: &mut Writer<W>, tree: &XmlTree) -> Result<(), ExportError> {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    write_node(writer, tree, tree.root())
}

fn qualified_tag(namespace: XmlNamespace, tag: &str) -> String {
    match namespace.prefix() {
        Some(prefix) => format!("{}:{}", prefix, tag),
        None => tag.to_string(),
    }
}

fn write_node<W: Write>(
    writer: &mut Writer<W>,
    tree: &XmlTree,
    id: NodeId,
) -> Result<(), ExportError> {
    let node = tree.node(id);
    let name = qualified_tag(node.namespace(), node.tag());
    let mut start = BytesStart::new(name.as_str());

    let parent_namespace = node.parent().map(|p| tree.node(p).namespace());
    if parent_namespace.is_none() {
        if let Some(prefix) = node.namespace().prefix() {
            let declaration = format!("xmlns:{}", prefix);
            start.push_attribute((declaration.as_str(), node.namespace().uri()));
        } else {
            start.push_attribute(("xmlns", node.namespace().uri()));
        }
    } else if node.namespace() == XmlNamespace::Edm && parent_namespace != Some(XmlNamespace::Edm) {
        start.push_attribute(("xmlns", XmlNamespace::EDM_URI));
    }

    for (attr, value) in node.attributes() {
        start.push_attribute((attr.as_str(), value.as_str()));
    }

    if node.children().is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    for child in node.children() {
        write_node(writer, tree, *child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name.as_str())))
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    Ok(())
}
