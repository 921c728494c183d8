use crate::node::data::attributes::AttributeList;
use crate::node::list::NodeList;
use html5dom_shared::node::{NodeId, Position};
use html5dom_shared::types::{InsertionFlags, Namespace};

/// Data structure for element nodes
#[derive(Clone, Debug, PartialEq)]
pub struct ElementData {
    /// Canonical local name of the element (e.g., div, foreignObject)
    pub local_name: String,
    /// Set for SVG and MathML elements only. HTML elements carry no namespace.
    pub namespace: Option<Namespace>,
    pub position: Option<Position>,
    /// Only set when the parser did not insert the element the ordinary way
    pub parse_flags: Option<InsertionFlags>,
    /// `None` when the element has no attributes at all
    pub attributes: Option<AttributeList>,
    pub child_nodes: NodeList,
    /// Template contents (only for template elements)
    pub content: Option<NodeId>,
}

impl ElementData {
    pub(crate) fn new(local_name: &str, namespace: Option<Namespace>) -> Self {
        Self {
            local_name: local_name.to_owned(),
            namespace,
            position: None,
            parse_flags: None,
            attributes: None,
            child_nodes: NodeList::new(),
            content: None,
        }
    }

    pub fn name(&self) -> &str {
        self.local_name.as_str()
    }

    /// Namespace of the element, with the absence of one meaning HTML
    pub fn namespace(&self) -> Namespace {
        self.namespace.unwrap_or(Namespace::Html)
    }

    pub fn is_html(&self) -> bool {
        self.namespace.is_none()
    }

    pub fn is_template(&self) -> bool {
        self.content.is_some()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.as_ref().and_then(|attrs| attrs.value(name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.as_ref().is_some_and(|attrs| attrs.contains(name))
    }

    /// Class names from the class attribute, in source order
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.attribute("class").unwrap_or_default().split_ascii_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::data::attributes::Attribute;

    #[test]
    fn html_has_no_namespace() {
        let element = ElementData::new("div", None);
        assert!(element.is_html());
        assert_eq!(element.namespace(), Namespace::Html);
        assert!(!element.is_template());

        let svg = ElementData::new("svg", Some(Namespace::Svg));
        assert!(!svg.is_html());
        assert_eq!(svg.namespace(), Namespace::Svg);
    }

    #[test]
    fn attribute_lookup_without_attributes() {
        let element = ElementData::new("p", None);
        assert_eq!(element.attribute("id"), None);
        assert!(!element.has_attribute("id"));
        assert_eq!(element.class_names().count(), 0);
    }

    #[test]
    fn class_names() {
        let mut element = ElementData::new("p", None);
        element.attributes = Some([Attribute::new("class", " one  two\tthree ")].into_iter().collect());

        let classes: Vec<&str> = element.class_names().collect();
        assert_eq!(classes, vec!["one", "two", "three"]);
        assert!(element.has_attribute("class"));
    }
}
