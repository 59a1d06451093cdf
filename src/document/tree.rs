//! Markup node tree
//!
//! A small arena of element nodes. Nodes are only ever appended (or inserted
//! before an existing sibling); nothing is removed, so a `NodeId` stays valid
//! for the lifetime of the tree that produced it.

/// Handle to a node inside an [`XmlTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// XML namespace an element belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlNamespace {
    /// `edmx:` envelope elements (Edmx, DataServices, Reference, Include)
    Edmx,
    /// CSDL elements (Schema, EntityType, Property, ...)
    Edm,
}

impl XmlNamespace {
    pub const EDMX_URI: &'static str = "http://docs.oasis-open.org/odata/ns/edmx";
    pub const EDM_URI: &'static str = "http://docs.oasis-open.org/odata/ns/edm";

    pub fn uri(&self) -> &'static str {
        match self {
            XmlNamespace::Edmx => Self::EDMX_URI,
            XmlNamespace::Edm => Self::EDM_URI,
        }
    }

    /// Prefix used when writing the element; EDM elements use the default namespace
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            XmlNamespace::Edmx => Some("edmx"),
            XmlNamespace::Edm => None,
        }
    }
}

/// Ordered attribute list for a new node
///
/// `with_opt` skips `None`, which is how "attribute absent" (and therefore the
/// CSDL default) is expressed, as opposed to writing an explicit value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.0.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_opt<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with(name, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A single element
#[derive(Debug, Clone, PartialEq)]
pub struct XmlNode {
    namespace: XmlNamespace,
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl XmlNode {
    pub fn namespace(&self) -> XmlNamespace {
        self.namespace
    }

    /// Local element name, without prefix
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Element with the given local name in the given namespace
    pub fn is(&self, namespace: XmlNamespace, tag: &str) -> bool {
        self.namespace == namespace && self.tag == tag
    }
}

/// Arena-backed element tree with a single root
#[derive(Debug, Clone, PartialEq)]
pub struct XmlTree {
    nodes: Vec<XmlNode>,
}

impl XmlTree {
    /// Create a tree holding only its root element
    pub fn new(namespace: XmlNamespace, tag: &str, attributes: Attributes) -> Self {
        Self {
            nodes: vec![XmlNode {
                namespace,
                tag: tag.to_string(),
                attributes: attributes.0,
                children: Vec::new(),
                parent: None,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &XmlNode {
        &self.nodes[id.0]
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attribute(name)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a new last child under `parent`
    pub fn create_child(
        &mut self,
        parent: NodeId,
        namespace: XmlNamespace,
        tag: &str,
        attributes: Attributes,
    ) -> NodeId {
        let id = self.push_node(parent, namespace, tag, attributes);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Insert a new child under `parent` directly before the sibling `before`.
    ///
    /// Appends when `before` is not a child of `parent`.
    pub fn insert_child_before(
        &mut self,
        parent: NodeId,
        before: NodeId,
        namespace: XmlNamespace,
        tag: &str,
        attributes: Attributes,
    ) -> NodeId {
        let id = self.push_node(parent, namespace, tag, attributes);
        let children = &mut self.nodes[parent.0].children;
        match children.iter().position(|c| *c == before) {
            Some(pos) => children.insert(pos, id),
            None => children.push(id),
        }
        id
    }

    fn push_node(
        &mut self,
        parent: NodeId,
        namespace: XmlNamespace,
        tag: &str,
        attributes: Attributes,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(XmlNode {
            namespace,
            tag: tag.to_string(),
            attributes: attributes.0,
            children: Vec::new(),
            parent: Some(parent),
        });
        id
    }

    /// Depth-first, document-order walk over the descendants of `root`
    /// (`root` itself is not yielded).
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(root).to_vec();
        stack.reverse();
        Descendants { tree: self, stack }
    }

    /// First descendant of `root` in document order matching `predicate`
    pub fn find_descendant<P>(&self, root: NodeId, predicate: P) -> Option<NodeId>
    where
        P: Fn(&XmlNode) -> bool,
    {
        self.descendants(root).find(|id| predicate(self.node(*id)))
    }

    /// First descendant of `root` whose `attribute` equals `value`
    pub fn find_by_attribute(&self, root: NodeId, attribute: &str, value: &str) -> Option<NodeId> {
        self.find_descendant(root, |node| node.attribute(attribute) == Some(value))
    }

    /// Number of nodes anywhere in the tree with the given local name
    pub fn count_tag(&self, tag: &str) -> usize {
        self.nodes.iter().filter(|n| n.tag == tag).count()
    }
}

/// Iterator returned by [`XmlTree::descendants`]
pub struct Descendants<'a> {
    tree: &'a XmlTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
