use crate::node::arena::NodeArena;
use crate::node::data::doctype::DocTypeData;
use crate::node::list::NodeList;
use crate::node::node_impl::{Node, NodeData};
use crate::node::visitor::Visitor;
use html5dom_shared::node::NodeId;
use html5dom_shared::types::QuirksMode;

/// A projected document.
///
/// The document owns every node through its arena. It holds no reference to the parse tree it
/// was built from and can be moved between threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    arena: NodeArena,
    /// Only set when the source declared a doctype
    quirks_mode: Option<QuirksMode>,
    child_nodes: NodeList,
}

impl Document {
    pub(crate) fn new(arena: NodeArena, quirks_mode: Option<QuirksMode>, child_nodes: NodeList) -> Self {
        Self {
            arena,
            quirks_mode,
            child_nodes,
        }
    }

    pub fn quirks_mode(&self) -> Option<QuirksMode> {
        self.quirks_mode
    }

    /// Top level nodes. When the source had a doctype, it is the first entry.
    pub fn child_nodes(&self) -> &NodeList {
        &self.child_nodes
    }

    pub fn node_by_id(&self, node_id: NodeId) -> Option<&Node> {
        self.arena.node_ref(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// All nodes in creation order, which is tree order except that the doctype comes first
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.arena.nodes()
    }

    pub fn doctype(&self) -> Option<&DocTypeData> {
        self.child_nodes
            .first()
            .and_then(|id| self.node_by_id(id))
            .and_then(|node| node.get_doctype_data())
    }

    /// The first top level element, normally `<html>`
    pub fn document_element(&self) -> Option<&Node> {
        self.child_nodes
            .iter()
            .filter_map(|id| self.node_by_id(id))
            .find(|node| node.is_element_node())
    }

    pub fn children(&self, node_id: NodeId) -> &[NodeId] {
        self.node_by_id(node_id).map_or(&[], |node| node.children())
    }

    pub fn parent(&self, node_id: NodeId) -> Option<&Node> {
        self.node_by_id(node_id)
            .and_then(|node| node.parent)
            .and_then(|parent| self.node_by_id(parent))
    }

    /// Parent, grandparent and so on, up to the top of the tree or the template content fragment
    pub fn ancestors(&self, node_id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(self.parent(node_id), move |node| self.parent(node.id))
    }

    /// Nesting depth of a node. Top level nodes have depth 1.
    pub fn depth(&self, node_id: NodeId) -> usize {
        1 + self.ancestors(node_id).count()
    }

    /// The content fragment of a template element
    pub fn template_content(&self, node_id: NodeId) -> Option<&Node> {
        self.node_by_id(node_id)
            .and_then(|node| node.get_element_data())
            .and_then(|data| data.content)
            .and_then(|content| self.node_by_id(content))
    }

    /// Concatenated text of all text descendants, in tree order. Template contents are skipped.
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut text = String::new();
        let mut stack = vec![node_id];

        while let Some(id) = stack.pop() {
            let Some(node) = self.node_by_id(id) else {
                continue;
            };

            if let Some(data) = node.get_text_data() {
                text.push_str(data.value());
            }
            stack.extend(node.children().iter().rev());
        }

        text
    }

    /// Walks the document depth-first in tree order
    pub fn walk<V: Visitor>(&self, visitor: &mut V) {
        visitor.document_enter(self);
        for id in self.child_nodes.iter() {
            self.visit_node(id, visitor);
        }
        visitor.document_leave(self);
    }

    /// Walks the subtree rooted at `node_id`
    pub fn walk_from<V: Visitor>(&self, node_id: NodeId, visitor: &mut V) {
        self.visit_node(node_id, visitor);
    }

    fn visit_node<V: Visitor>(&self, node_id: NodeId, visitor: &mut V) {
        let Some(node) = self.node_by_id(node_id) else {
            return;
        };

        match &node.data {
            NodeData::DocType(_) => {
                visitor.doctype_enter(node);
                visitor.doctype_leave(node);
            }
            NodeData::Text(_) => {
                visitor.text_enter(node);
                visitor.text_leave(node);
            }
            NodeData::Comment(_) => {
                visitor.comment_enter(node);
                visitor.comment_leave(node);
            }
            NodeData::Element(data) => {
                visitor.element_enter(node);
                self.visit_children(node.children(), visitor);
                if let Some(content) = data.content {
                    self.visit_node(content, visitor);
                }
                visitor.element_leave(node);
            }
            NodeData::DocumentFragment(_) => {
                visitor.fragment_enter(node);
                self.visit_children(node.children(), visitor);
                visitor.fragment_leave(node);
            }
        }
    }

    fn visit_children<V: Visitor>(&self, children: &[NodeId], visitor: &mut V) {
        for child in children {
            self.visit_node(*child, visitor);
        }
    }
}
