//! Projection of a parser's parse tree into a [`Document`](crate::document::Document).
//!
//! The parse tree is walked depth-first, left to right. Every node is registered in a fresh
//! [`NodeArena`] before its children, so node ids follow tree order. The walk is recursive, with
//! an explicit depth counter that stops adversarial nesting long before the stack runs out.
use crate::errors::{Error, Result};
use crate::node::arena::NodeArena;
use crate::node::data::comment::CommentData;
use crate::node::data::element::ElementData;
use crate::node::data::fragment::DocumentFragmentData;
use crate::node::data::text::{TextData, TextKind};
use crate::node::list::NodeList;
use crate::node::node_impl::NodeData;
use html5dom_shared::node::NodeId;
use html5dom_shared::parse_tree::{ParseTree, RawElement, RawNode, RawNodeData, RawText};

pub mod attributes;
pub mod document;
pub mod tag;

/// Deepest level of child lists the projection expands
pub const MAX_TREE_DEPTH: usize = 800;

pub struct Projector<'t> {
    tree: &'t ParseTree,
    arena: NodeArena,
}

impl<'t> Projector<'t> {
    pub fn new(tree: &'t ParseTree) -> Self {
        Self {
            tree,
            arena: NodeArena::new(),
        }
    }

    pub(crate) fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    /// Projects the children of the raw node `raw_parent`, in order.
    ///
    /// `depth` is the depth of the node that owns the list; the children end up one level
    /// deeper. Fails without looking at the children once `depth` reaches [`MAX_TREE_DEPTH`].
    pub fn project_children(&mut self, raw_parent: NodeId, parent: Option<NodeId>, depth: usize) -> Result<NodeList> {
        if depth >= MAX_TREE_DEPTH {
            log::warn!("tree depth limit of {MAX_TREE_DEPTH} exceeded below raw node {raw_parent}");
            return Err(Error::ResourceLimitExceeded { limit: MAX_TREE_DEPTH });
        }

        let tree = self.tree;
        let mut child_nodes = NodeList::with_capacity(tree.children(raw_parent).len());
        for raw in tree.child_nodes(raw_parent) {
            child_nodes.push(self.project_node(raw, parent, depth + 1)?);
        }

        Ok(child_nodes)
    }

    /// Projects a single node (and everything below it) that sits at `depth`
    pub fn project_node(&mut self, raw: &RawNode, parent: Option<NodeId>, depth: usize) -> Result<NodeId> {
        match &raw.data {
            RawNodeData::Element(element) => self.project_element(raw, element, parent, depth),
            RawNodeData::Template(element) => self.project_template(raw, element, parent, depth),
            RawNodeData::Text(text) => Ok(self.project_text(text, TextKind::Text, parent)),
            RawNodeData::Whitespace(text) => Ok(self.project_text(text, TextKind::Whitespace, parent)),
            RawNodeData::CData(text) => Ok(self.project_text(text, TextKind::CData, parent)),
            RawNodeData::Comment(text) => {
                let data = CommentData::new(&text.text, text.start_pos.known());
                Ok(self.arena.register_node(parent, NodeData::Comment(data)))
            }
            RawNodeData::Document => {
                let code = raw.data.type_code();
                log::error!("unexpected node type {code} at raw node {}", raw.id);
                Err(Error::UnrecognizedNodeType(code))
            }
        }
    }

    fn project_element(
        &mut self,
        raw: &RawNode,
        element: &RawElement,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId> {
        let id = self.register_element(raw, element, parent);
        let child_nodes = self.project_children(raw.id, Some(id), depth)?;

        if let Some(data) = self.arena.node_mut(id).and_then(|node| node.get_element_data_mut()) {
            data.child_nodes = child_nodes;
        }

        Ok(id)
    }

    /// Templates keep their parsed children in a separate content fragment. The template
    /// element's own child list stays empty.
    fn project_template(
        &mut self,
        raw: &RawNode,
        element: &RawElement,
        parent: Option<NodeId>,
        depth: usize,
    ) -> Result<NodeId> {
        let (id, content) = self.register_template(element, parent);
        let child_nodes = self.project_children(raw.id, Some(content), depth)?;

        if let Some(fragment) = self.arena.node_mut(content).and_then(|node| node.get_fragment_data_mut()) {
            fragment.child_nodes = child_nodes;
        }

        Ok(id)
    }

    fn register_element(&mut self, raw: &RawNode, element: &RawElement, parent: Option<NodeId>) -> NodeId {
        let (local_name, namespace) = tag::normalize_tag(element);

        let mut data = ElementData::new(&local_name, namespace);
        data.position = element.start_pos.known();
        data.attributes = attributes::project_attributes(&element.attributes);
        if !raw.parse_flags.is_normal() {
            data.parse_flags = Some(raw.parse_flags);
        }

        self.arena.register_node(parent, NodeData::Element(data))
    }

    /// Registers a template element together with its (still empty) content fragment
    fn register_template(&mut self, element: &RawElement, parent: Option<NodeId>) -> (NodeId, NodeId) {
        let mut data = ElementData::new("template", None);
        data.position = element.start_pos.known();
        data.attributes = attributes::project_attributes(&element.attributes);

        let id = self.arena.register_node(parent, NodeData::Element(data));
        let content = self
            .arena
            .register_node(None, NodeData::DocumentFragment(DocumentFragmentData::new(Some(id))));

        if let Some(data) = self.arena.node_mut(id).and_then(|node| node.get_element_data_mut()) {
            data.content = Some(content);
        }

        (id, content)
    }

    fn project_text(&mut self, text: &RawText, kind: TextKind, parent: Option<NodeId>) -> NodeId {
        let data = TextData::new(&text.text, text.start_pos.known(), kind);
        self.arena.register_node(parent, NodeData::Text(data))
    }
}
