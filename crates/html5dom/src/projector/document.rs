use crate::document::Document;
use crate::errors::Result;
use crate::node::data::doctype::DocTypeData;
use crate::node::list::NodeList;
use crate::node::node_impl::NodeData;
use crate::projector::Projector;
use html5dom_shared::parse_tree::ParseTree;

/// Builds the document for a complete parse tree.
///
/// When the source declared a doctype, a document type node takes the first child slot and the
/// quirks mode is recorded. Without a doctype the document has no quirks mode at all.
pub fn assemble(tree: &ParseTree) -> Result<Document> {
    let raw_document = tree.document();
    let mut projector = Projector::new(tree);
    let mut child_nodes = NodeList::new();
    let mut quirks_mode = None;

    if raw_document.has_doctype {
        let doctype = DocTypeData::new(
            &raw_document.name,
            &raw_document.public_identifier,
            &raw_document.system_identifier,
        );
        child_nodes.push(projector.arena_mut().register_node(None, NodeData::DocType(doctype)));
        quirks_mode = Some(raw_document.quirks_mode);
    }

    let children = projector.project_children(tree.document_id(), None, 0)?;
    child_nodes.extend(children.iter());

    Ok(Document::new(projector.into_arena(), quirks_mode, child_nodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use html5dom_shared::parse_tree::{RawElement, RawNodeData, RawText};
    use html5dom_shared::types::QuirksMode;
    use test_case::test_case;

    fn html_skeleton() -> ParseTree {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();
        let html = tree.append_node(doc, RawNodeData::Element(RawElement::html("html")));
        tree.append_node(html, RawNodeData::Element(RawElement::html("head")));
        let body = tree.append_node(html, RawNodeData::Element(RawElement::html("body")));
        tree.append_node(body, RawNodeData::Text(RawText::new("hi")));
        tree
    }

    #[test_case(QuirksMode::NoQuirks, "no-quirks")]
    #[test_case(QuirksMode::Quirks, "quirks")]
    #[test_case(QuirksMode::LimitedQuirks, "limited-quirks")]
    fn doctype_takes_first_slot(mode: QuirksMode, label: &str) {
        let mut tree = html_skeleton();
        tree.set_doctype("html", "-//W3C//DTD HTML 4.01//EN", "http://www.w3.org/TR/html4/strict.dtd");
        tree.document_mut().quirks_mode = mode;

        let document = assemble(&tree).unwrap();
        assert_eq!(document.quirks_mode().map(|mode| mode.as_str()), Some(label));
        assert_eq!(document.child_nodes().len(), 2);

        let doctype_node = document.node_by_id(document.child_nodes().first().unwrap()).unwrap();
        assert_eq!(doctype_node.parent, None);

        let doctype = document.doctype().unwrap();
        assert_eq!(doctype.name(), "html");
        assert_eq!(doctype.pub_identifier(), "-//W3C//DTD HTML 4.01//EN");
        assert_eq!(doctype.sys_identifier(), "http://www.w3.org/TR/html4/strict.dtd");

        let html = document.node_by_id(document.child_nodes().get(1).unwrap()).unwrap();
        assert_eq!(html.get_element_data().unwrap().name(), "html");
    }

    #[test]
    fn no_doctype_means_no_quirks_mode() {
        let document = assemble(&html_skeleton()).unwrap();

        assert_eq!(document.quirks_mode(), None);
        assert!(document.doctype().is_none());
        assert_eq!(document.child_nodes().len(), 1);
        assert_eq!(document.document_element().unwrap().get_element_data().unwrap().name(), "html");
    }

    #[test]
    fn top_level_nodes_have_no_parent() {
        let mut tree = html_skeleton();
        let doc = tree.document_id();
        tree.append_node(doc, RawNodeData::Comment(RawText::new("trailer")));

        let document = assemble(&tree).unwrap();
        for id in document.child_nodes().iter() {
            assert_eq!(document.node_by_id(id).unwrap().parent, None);
            assert_eq!(document.depth(id), 1);
        }
    }

    #[test]
    fn empty_tree_gives_empty_document() {
        let document = assemble(&ParseTree::new()).unwrap();
        assert!(document.child_nodes().is_empty());
        assert_eq!(document.node_count(), 0);
    }

    #[test]
    fn projection_errors_are_passed_on() {
        let mut tree = ParseTree::new();
        tree.set_doctype("html", "", "");
        let doc = tree.document_id();
        tree.append_node(doc, RawNodeData::Document);

        assert!(matches!(assemble(&tree), Err(Error::UnrecognizedNodeType(0))));
    }
}
