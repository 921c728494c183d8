use crate::node::list::NodeList;
use html5dom_shared::node::NodeId;

/// Defines a document fragment, which holds the content of a `<template>` element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentFragmentData {
    /// Nodes inside this fragment
    pub child_nodes: NodeList,
    /// Template element this fragment is the content of. Not an owning link.
    pub host: Option<NodeId>,
}

impl DocumentFragmentData {
    pub(crate) fn new(host: Option<NodeId>) -> Self {
        Self {
            child_nodes: NodeList::new(),
            host,
        }
    }
}
