use crate::document::Document;
use crate::node::node_impl::Node;
use html5dom_shared::node::NodeId;

#[derive(Debug, PartialEq, Eq)]
pub enum Condition {
    EqualsTag(String),
    EqualsId(String),
    ContainsClass(String),
    ContainsAttribute(String),
    ContainsChildTag(String),
    HasParentTag(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SearchType {
    FindFirst,
    FindAll,
}

/// A set of conditions an element must all match
#[derive(Debug, PartialEq, Eq)]
pub struct Query {
    conditions: Vec<Condition>,
    search_type: SearchType,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
            search_type: SearchType::FindAll,
        }
    }

    pub fn equals_tag(mut self, tag_name: &str) -> Self {
        self.conditions.push(Condition::EqualsTag(tag_name.to_owned()));
        self
    }

    pub fn equals_id(mut self, id: &str) -> Self {
        self.conditions.push(Condition::EqualsId(id.to_owned()));
        self
    }

    pub fn contains_class(mut self, class: &str) -> Self {
        self.conditions.push(Condition::ContainsClass(class.to_owned()));
        self
    }

    pub fn contains_attribute(mut self, attribute: &str) -> Self {
        self.conditions.push(Condition::ContainsAttribute(attribute.to_owned()));
        self
    }

    pub fn contains_child_tag(mut self, child_tag: &str) -> Self {
        self.conditions.push(Condition::ContainsChildTag(child_tag.to_owned()));
        self
    }

    pub fn has_parent_tag(mut self, parent_tag: &str) -> Self {
        self.conditions.push(Condition::HasParentTag(parent_tag.to_owned()));
        self
    }

    pub fn find_first(mut self) -> Self {
        self.search_type = SearchType::FindFirst;
        self
    }

    pub fn find_all(mut self) -> Self {
        self.search_type = SearchType::FindAll;
        self
    }
}

/// Iterates over all nodes of a document in tree order (preorder depth-first). The content
/// fragment of a template element comes right after the template's own children.
pub struct TreeIterator<'a> {
    node_stack: Vec<NodeId>,
    document: &'a Document,
}

impl<'a> TreeIterator<'a> {
    #[must_use]
    pub fn new(document: &'a Document) -> Self {
        Self {
            node_stack: document.child_nodes().iter().rev().collect(),
            document,
        }
    }

    /// Iterates the subtree rooted at `node_id`, starting with the node itself
    pub fn from_node(document: &'a Document, node_id: NodeId) -> Self {
        Self {
            node_stack: vec![node_id],
            document,
        }
    }
}

impl Iterator for TreeIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current_node_id = self.node_stack.pop()?;

        if let Some(current_node) = self.document.node_by_id(current_node_id) {
            if let Some(content) = current_node.get_element_data().and_then(|data| data.content) {
                self.node_stack.push(content);
            }
            self.node_stack.extend(current_node.children().iter().rev());
        }

        Some(current_node_id)
    }
}

impl Document {
    /// Perform a query against the document.
    /// Returns the ids of the matching nodes in tree order.
    pub fn query(&self, query: &Query) -> Vec<NodeId> {
        let mut found_ids = Vec::new();

        for current_node_id in TreeIterator::new(self) {
            let Some(current_node) = self.node_by_id(current_node_id) else {
                continue;
            };

            if !query
                .conditions
                .iter()
                .all(|condition| self.matches_query_condition(current_node, condition))
            {
                continue;
            }

            found_ids.push(current_node_id);
            if query.search_type == SearchType::FindFirst {
                break;
            }
        }

        found_ids
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&Query::new().equals_id(id).find_first()).first().copied()
    }

    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        self.query(&Query::new().equals_tag(tag_name))
    }

    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<NodeId> {
        self.query(&Query::new().contains_class(class_name))
    }

    /// Check if a given node's children contain a certain tag name
    pub fn contains_child_tag(&self, node_id: NodeId, tag: &str) -> bool {
        self.children(node_id)
            .iter()
            .filter_map(|&child_id| self.node_by_id(child_id))
            .filter_map(|child| child.get_element_data())
            .any(|data| data.name() == tag)
    }

    fn matches_query_condition(&self, current_node: &Node, condition: &Condition) -> bool {
        let Some(current_node_data) = current_node.get_element_data() else {
            return false;
        };

        match condition {
            Condition::EqualsTag(tag) => current_node_data.name() == *tag,
            Condition::EqualsId(id) => current_node_data.attribute("id") == Some(id.as_str()),
            Condition::ContainsClass(class_name) => current_node_data.class_names().any(|class| class == class_name),
            Condition::ContainsAttribute(attribute) => current_node_data.has_attribute(attribute),
            Condition::ContainsChildTag(child_tag) => self.contains_child_tag(current_node.id(), child_tag),
            Condition::HasParentTag(parent_tag) => self
                .parent(current_node.id())
                .and_then(|parent| parent.get_element_data())
                .is_some_and(|parent_data| parent_data.name() == *parent_tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_find_all() {
        let query = Query::new().equals_tag("div").equals_id("myid");
        assert_eq!(query.search_type, SearchType::FindAll);
    }

    #[test]
    fn find_first() {
        let query = Query::new().find_first();
        assert_eq!(query.search_type, SearchType::FindFirst);
    }

    #[test]
    fn build_conditions() {
        let query = Query::new()
            .equals_tag("div")
            .equals_id("myid")
            .contains_class("myclass")
            .contains_attribute("myattr")
            .contains_child_tag("h1")
            .has_parent_tag("html")
            .find_first();

        assert_eq!(query.conditions.len(), 6);
        assert_eq!(query.conditions[0], Condition::EqualsTag("div".to_owned()));
        assert_eq!(query.conditions[1], Condition::EqualsId("myid".to_owned()));
        assert_eq!(query.conditions[2], Condition::ContainsClass("myclass".to_owned()));
        assert_eq!(query.conditions[3], Condition::ContainsAttribute("myattr".to_owned()));
        assert_eq!(query.conditions[4], Condition::ContainsChildTag("h1".to_owned()));
        assert_eq!(query.conditions[5], Condition::HasParentTag("html".to_owned()));
    }
}
