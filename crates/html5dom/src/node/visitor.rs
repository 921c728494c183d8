use crate::document::Document;
use crate::node::node_impl::Node;

/// Callbacks for a depth-first walk over a document, see [`Document::walk`].
///
/// Every callback has an empty default so a visitor only implements what it cares about.
pub trait Visitor {
    fn document_enter(&mut self, _document: &Document) {}
    fn document_leave(&mut self, _document: &Document) {}

    fn doctype_enter(&mut self, _node: &Node) {}
    fn doctype_leave(&mut self, _node: &Node) {}

    fn text_enter(&mut self, _node: &Node) {}
    fn text_leave(&mut self, _node: &Node) {}

    fn comment_enter(&mut self, _node: &Node) {}
    fn comment_leave(&mut self, _node: &Node) {}

    fn element_enter(&mut self, _node: &Node) {}
    fn element_leave(&mut self, _node: &Node) {}

    /// Template contents. Visited after the template's own children, before `element_leave`.
    fn fragment_enter(&mut self, _node: &Node) {}
    fn fragment_leave(&mut self, _node: &Node) {}
}
