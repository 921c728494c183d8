use html5dom_shared::node::NodeId;

/// Ordered list of child nodes.
///
/// Positions in a DOM node list start at 1; here they map to zero based indices, so the first
/// child (the doctype of a document, if there is one) is `get(0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeList(Vec<NodeId>);

impl NodeList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, id: NodeId) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.0.get(index).copied()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        self.0.as_slice()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl Extend<NodeId> for NodeList {
    fn extend<T: IntoIterator<Item = NodeId>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<NodeId> for NodeList {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
