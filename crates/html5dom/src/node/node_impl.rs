use crate::node::data::comment::CommentData;
use crate::node::data::doctype::DocTypeData;
use crate::node::data::element::ElementData;
use crate::node::data::fragment::DocumentFragmentData;
use crate::node::data::text::TextData;
use html5dom_shared::node::{NodeId, Position};

/// Different types of nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    TextNode,
    CommentNode,
    ElementNode,
    DocTypeNode,
    DocumentFragmentNode,
}

impl NodeType {
    /// Name of the node variant as used in exported trees
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::TextNode => "Text",
            NodeType::CommentNode => "Comment",
            NodeType::ElementNode => "Element",
            NodeType::DocTypeNode => "DocumentType",
            NodeType::DocumentFragmentNode => "DocumentFragment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Text(TextData),
    Comment(CommentData),
    Element(ElementData),
    DocType(DocTypeData),
    DocumentFragment(DocumentFragmentData),
}

/// Node structure that resembles a DOM node
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// ID of the node inside its document
    pub id: NodeId,
    /// Element or fragment that owns this node. Children of the document itself have no parent.
    pub parent: Option<NodeId>,
    /// actual data of the node
    pub data: NodeData,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn type_of(&self) -> NodeType {
        match self.data {
            NodeData::Text(_) => NodeType::TextNode,
            NodeData::Comment(_) => NodeType::CommentNode,
            NodeData::Element(_) => NodeType::ElementNode,
            NodeData::DocType(_) => NodeType::DocTypeNode,
            NodeData::DocumentFragment(_) => NodeType::DocumentFragmentNode,
        }
    }

    /// Child nodes of elements and fragments. Template contents are not included, they hang off
    /// the template's `content` fragment.
    pub fn children(&self) -> &[NodeId] {
        match &self.data {
            NodeData::Element(data) => data.child_nodes.as_slice(),
            NodeData::DocumentFragment(data) => data.child_nodes.as_slice(),
            _ => &[],
        }
    }

    pub fn position(&self) -> Option<Position> {
        match &self.data {
            NodeData::Text(data) => data.position,
            NodeData::Comment(data) => data.position,
            NodeData::Element(data) => data.position,
            NodeData::DocType(_) | NodeData::DocumentFragment(_) => None,
        }
    }

    pub fn is_element_node(&self) -> bool {
        self.type_of() == NodeType::ElementNode
    }

    pub fn is_text_node(&self) -> bool {
        self.type_of() == NodeType::TextNode
    }

    pub fn get_element_data(&self) -> Option<&ElementData> {
        if let NodeData::Element(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub(crate) fn get_element_data_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeData::Element(data) = &mut self.data {
            return Some(data);
        }
        None
    }

    pub fn get_text_data(&self) -> Option<&TextData> {
        if let NodeData::Text(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub fn get_comment_data(&self) -> Option<&CommentData> {
        if let NodeData::Comment(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub fn get_doctype_data(&self) -> Option<&DocTypeData> {
        if let NodeData::DocType(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub fn get_fragment_data(&self) -> Option<&DocumentFragmentData> {
        if let NodeData::DocumentFragment(data) = &self.data {
            return Some(data);
        }
        None
    }

    pub(crate) fn get_fragment_data_mut(&mut self) -> Option<&mut DocumentFragmentData> {
        if let NodeData::DocumentFragment(data) = &mut self.data {
            return Some(data);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::data::text::TextKind;

    #[test]
    fn type_of_and_accessors() {
        let node = Node {
            id: NodeId::from(3_usize),
            parent: Some(NodeId::from(1_usize)),
            data: NodeData::Text(TextData::new("hi", None, TextKind::Text)),
        };

        assert_eq!(node.type_of(), NodeType::TextNode);
        assert!(node.is_text_node());
        assert!(!node.is_element_node());
        assert_eq!(node.get_text_data().unwrap().value(), "hi");
        assert!(node.get_element_data().is_none());
        assert!(node.children().is_empty());
        assert_eq!(node.parent_id(), Some(NodeId::from(1_usize)));
    }

    #[test]
    fn element_children() {
        let mut data = ElementData::new("ul", None);
        data.child_nodes.push(NodeId::from(2_usize));
        data.child_nodes.push(NodeId::from(5_usize));
        data.position = Some(Position::new(1, 1, 0));

        let node = Node {
            id: NodeId::from(1_usize),
            parent: None,
            data: NodeData::Element(data),
        };

        assert_eq!(node.children(), &[NodeId::from(2_usize), NodeId::from(5_usize)]);
        assert_eq!(node.position(), Some(Position::new(1, 1, 0)));
        assert_eq!(node.type_of().as_str(), "Element");
    }
}
