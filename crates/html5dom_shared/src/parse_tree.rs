//! The parse tree an external HTML5 parser produces.
//!
//! This is the parser's side of the boundary: an arena of raw nodes rooted at a document node,
//! shaped after what a tree construction algorithm reports. It is built by the parser, read once
//! by the projection and then released. Nothing in here is exposed through the projected DOM.
use crate::node::{NodeId, Position};
use crate::tags::Tag;
use crate::types::{AttributeNamespace, InsertionFlags, Namespace, QuirksMode};

#[derive(Clone, Debug, PartialEq)]
pub struct RawAttribute {
    pub namespace: AttributeNamespace,
    pub name: String,
    pub value: String,
    /// Position of the attribute name in the source
    pub name_start: Position,
}

impl RawAttribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            namespace: AttributeNamespace::None,
            name: name.to_owned(),
            value: value.to_owned(),
            name_start: Position::unknown(),
        }
    }

    pub fn with_namespace(mut self, namespace: AttributeNamespace) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.name_start = position;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawElement {
    pub tag: Tag,
    pub namespace: Namespace,
    /// Source text of the start tag (`<Foo-Bar class=x>`), or just the reported tag name when
    /// the parser does not keep the source around. Empty for elements the parser implied.
    pub original_tag: String,
    pub start_pos: Position,
    pub attributes: Vec<RawAttribute>,
}

impl RawElement {
    pub fn new(tag: Tag, namespace: Namespace, original_tag: &str) -> Self {
        Self {
            tag,
            namespace,
            original_tag: original_tag.to_owned(),
            start_pos: Position::unknown(),
            attributes: Vec::new(),
        }
    }

    /// Element in the HTML namespace named by a (case-insensitive) tag name
    pub fn html(name: &str) -> Self {
        Self::new(Tag::from_name(name), Namespace::Html, name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawText {
    pub text: String,
    pub start_pos: Position,
}

impl RawText {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            start_pos: Position::unknown(),
        }
    }
}

/// Document level information. The children of the document live in the arena under
/// [`ParseTree::document_id`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawDocument {
    pub has_doctype: bool,
    pub name: String,
    pub public_identifier: String,
    pub system_identifier: String,
    pub quirks_mode: QuirksMode,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RawNodeData {
    Document,
    Element(RawElement),
    Text(RawText),
    CData(RawText),
    Comment(RawText),
    Whitespace(RawText),
    /// A template element. Its children are the template contents.
    Template(RawElement),
}

impl RawNodeData {
    /// Numeric node type as the parser reports it
    pub fn type_code(&self) -> u32 {
        match self {
            RawNodeData::Document => 0,
            RawNodeData::Element(_) => 1,
            RawNodeData::Text(_) => 2,
            RawNodeData::CData(_) => 3,
            RawNodeData::Comment(_) => 4,
            RawNodeData::Whitespace(_) => 5,
            RawNodeData::Template(_) => 6,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub parse_flags: InsertionFlags,
    pub data: RawNodeData,
}

/// Arena holding the complete parser output
#[derive(Clone, Debug, PartialEq)]
pub struct ParseTree {
    nodes: Vec<RawNode>,
    document: RawDocument,
}

impl Default for ParseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<ParseTree> for ParseTree {
    fn as_ref(&self) -> &ParseTree {
        self
    }
}

impl ParseTree {
    /// Creates a tree that holds only the (empty) document node
    #[must_use]
    pub fn new() -> Self {
        let root = RawNode {
            id: NodeId::default(),
            parent: None,
            children: Vec::new(),
            parse_flags: InsertionFlags::NORMAL,
            data: RawNodeData::Document,
        };

        Self {
            nodes: vec![root],
            document: RawDocument::default(),
        }
    }

    pub fn document_id(&self) -> NodeId {
        NodeId::default()
    }

    pub fn document(&self) -> &RawDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut RawDocument {
        &mut self.document
    }

    /// Records the doctype the parser saw
    pub fn set_doctype(&mut self, name: &str, public_identifier: &str, system_identifier: &str) {
        self.document.has_doctype = true;
        self.document.name = name.to_owned();
        self.document.public_identifier = public_identifier.to_owned();
        self.document.system_identifier = system_identifier.to_owned();
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&RawNode> {
        self.nodes.get(id.as_usize())
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut RawNode> {
        self.nodes.get_mut(id.as_usize())
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Iterates the child nodes of `id` in order
    pub fn child_nodes(&self, id: NodeId) -> impl Iterator<Item = &RawNode> + '_ {
        self.children(id).iter().filter_map(|&child| self.node(child))
    }

    /// Creates a detached node and returns its id
    pub fn create_node(&mut self, data: RawNodeData) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(RawNode {
            id,
            parent: None,
            children: Vec::new(),
            parse_flags: InsertionFlags::NORMAL,
            data,
        });

        id
    }

    /// Creates a node and appends it as last child of `parent`
    pub fn append_node(&mut self, parent: NodeId, data: RawNodeData) -> NodeId {
        let id = self.create_node(data);
        self.append(parent, id);
        id
    }

    /// Moves `child` to the end of the children of `parent`
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if self.node(parent).is_none() || self.node(child).is_none() {
            return;
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Moves `child` right in front of `sibling`. Does nothing when the sibling has no parent.
    pub fn insert_before(&mut self, sibling: NodeId, child: NodeId) {
        let Some(parent) = self.node(sibling).and_then(|node| node.parent) else {
            return;
        };
        if self.node(child).is_none() {
            return;
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            let index = node
                .children
                .iter()
                .position(|&id| id == sibling)
                .unwrap_or(node.children.len());
            node.children.insert(index, child);
        }
    }

    /// Removes a node from its parent. The node itself stays in the arena.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node_mut(id).and_then(|node| node.parent.take()) else {
            return;
        };

        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|&child| child != id);
        }
    }

    /// Moves all children of `from` to the end of `to`, in order
    pub fn reparent_children(&mut self, from: NodeId, to: NodeId) {
        let children = self.children(from).to_vec();
        for child in children {
            self.append(to, child);
        }
    }

    pub fn add_parse_flags(&mut self, id: NodeId, flags: InsertionFlags) {
        if let Some(node) = self.node_mut(id) {
            node.parse_flags |= flags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_document_root() {
        let tree = ParseTree::new();
        assert_eq!(tree.node_count(), 1);

        let root = tree.node(tree.document_id()).unwrap();
        assert_eq!(root.data, RawNodeData::Document);
        assert!(root.children.is_empty());
        assert!(!tree.document().has_doctype);
    }

    #[test]
    fn append_and_insert_before() {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();

        let a = tree.append_node(doc, RawNodeData::Element(RawElement::html("a")));
        let c = tree.append_node(doc, RawNodeData::Element(RawElement::html("c")));
        let b = tree.create_node(RawNodeData::Text(RawText::new("b")));
        tree.insert_before(c, b);

        assert_eq!(tree.children(doc), &[a, b, c]);
        assert_eq!(tree.node(b).unwrap().parent, Some(doc));
    }

    #[test]
    fn append_moves_node() {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();

        let a = tree.append_node(doc, RawNodeData::Element(RawElement::html("a")));
        let b = tree.append_node(doc, RawNodeData::Element(RawElement::html("b")));
        tree.append(a, b);

        assert_eq!(tree.children(doc), &[a]);
        assert_eq!(tree.children(a), &[b]);
        assert_eq!(tree.node(b).unwrap().parent, Some(a));
    }

    #[test]
    fn reparent_children_keeps_order() {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();

        let from = tree.append_node(doc, RawNodeData::Element(RawElement::html("b")));
        let to = tree.append_node(doc, RawNodeData::Element(RawElement::html("i")));
        let one = tree.append_node(from, RawNodeData::Text(RawText::new("1")));
        let two = tree.append_node(from, RawNodeData::Text(RawText::new("2")));

        tree.reparent_children(from, to);
        assert!(tree.children(from).is_empty());
        assert_eq!(tree.children(to), &[one, two]);
    }

    #[test]
    fn detach_and_unknown_ids_are_harmless() {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();
        let a = tree.append_node(doc, RawNodeData::Comment(RawText::new("x")));

        tree.detach(a);
        tree.detach(a);
        tree.append(NodeId::from(99_usize), a);
        tree.insert_before(a, NodeId::from(99_usize));

        assert!(tree.children(doc).is_empty());
        assert_eq!(tree.node(a).unwrap().parent, None);
    }

    #[test]
    fn type_codes() {
        assert_eq!(RawNodeData::Document.type_code(), 0);
        assert_eq!(RawNodeData::Template(RawElement::html("template")).type_code(), 6);
        assert_eq!(RawNodeData::Whitespace(RawText::new(" ")).type_code(), 5);
    }
}
