use html5dom_shared::node::Position;
use html5dom_shared::types::AttributeNamespace;
use std::collections::HashMap;

/// A single attribute of an element
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    /// Namespace the tree builder placed the attribute in. Plain attributes have none.
    pub namespace: AttributeNamespace,
    pub position: Option<Position>,
}

impl Attribute {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            namespace: AttributeNamespace::None,
            position: None,
        }
    }

    /// Namespace prefix label ("xlink", "xml" or "xmlns")
    pub fn prefix(&self) -> Option<&'static str> {
        self.namespace.prefix()
    }
}

/// Ordered list of attributes that can also be looked up by name.
///
/// The name index points into the list. When the same name occurs more than once, every
/// occurrence keeps its place in the list and the name lookup yields the last one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeList {
    attributes: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl AttributeList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.index.insert(attribute.name.clone(), self.attributes.len());
        self.attributes.push(attribute);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute at the given (zero based) index
    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index)
    }

    /// Attribute with the given name
    pub fn named(&self, name: &str) -> Option<&Attribute> {
        self.index.get(name).and_then(|&index| self.attributes.get(index))
    }

    /// Value of the attribute with the given name
    pub fn value(&self, name: &str) -> Option<&str> {
        self.named(name).map(|attr| attr.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Attribute> for AttributeList {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        let mut list = AttributeList::new();
        for attribute in iter {
            list.push(attribute);
        }
        list
    }
}
