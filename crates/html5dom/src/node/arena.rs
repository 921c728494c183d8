use crate::node::node_impl::{Node, NodeData};
use html5dom_shared::node::NodeId;

/// The node arena is the single source for nodes in a document.
///
/// Nodes are only ever added, so a node id is simply its index in the arena.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Creates a new NodeArena
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Peek what the next node ID is
    pub fn peek_next_id(&self) -> NodeId {
        NodeId::from(self.nodes.len())
    }

    /// Gets the node with the given id
    pub fn node_ref(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id.as_usize())
    }

    pub(crate) fn node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id.as_usize())
    }

    /// Registers a new node below `parent` and returns its id. The parent's child list is not
    /// touched; the caller fills it once all children are known.
    pub(crate) fn register_node(&mut self, parent: Option<NodeId>, data: NodeData) -> NodeId {
        let id = self.peek_next_id();
        self.nodes.push(Node { id, parent, data });
        id
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::data::comment::CommentData;
    use crate::node::data::element::ElementData;

    #[test]
    fn register_node() {
        let mut arena = NodeArena::new();
        assert_eq!(arena.peek_next_id(), NodeId::from(0_usize));

        let parent = arena.register_node(None, NodeData::Element(ElementData::new("div", None)));
        let child = arena.register_node(Some(parent), NodeData::Comment(CommentData::new("x", None)));

        assert_eq!(arena.node_count(), 2);
        assert_eq!(parent, NodeId::from(0_usize));
        assert_eq!(child, NodeId::from(1_usize));
        assert_eq!(arena.node_ref(child).unwrap().parent, Some(parent));
        assert_eq!(arena.peek_next_id(), NodeId::from(2_usize));
    }

    #[test]
    fn get_node() {
        let mut arena = NodeArena::new();
        let id = arena.register_node(None, NodeData::Element(ElementData::new("test", None)));

        let node = arena.node_ref(id);
        assert!(node.is_some());
        assert_eq!(node.unwrap().get_element_data().unwrap().name(), "test");
        assert!(arena.node_ref(NodeId::from(7_usize)).is_none());
    }
}
