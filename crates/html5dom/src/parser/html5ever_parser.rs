//! [`TreeParser`] backed by the html5ever tree builder.
//!
//! html5ever drives a [`TreeSink`]; the sink here records everything it is told into a
//! [`ParseTree`]. html5ever does not report columns or byte offsets, so every position in the
//! resulting tree is unknown and the tab stop option has no effect.
use crate::projector::tag::normalize_svg_tagname;
use html5dom_shared::node::{NodeId, Position};
use html5dom_shared::parse_tree::{ParseTree, RawAttribute, RawElement, RawNodeData, RawText};
use html5dom_shared::tags::Tag;
use html5dom_shared::traits::parser::{ResolvedOptions, TreeParser};
use html5dom_shared::types::{AttributeNamespace, InsertionFlags, Namespace, QuirksMode, HTML_NAMESPACE};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::{ElemName, ElementFlags, NodeOrText, QuirksMode as SinkQuirksMode, TreeSink};
use html5ever::{parse_document, parse_fragment, Attribute, LocalName, ParseOpts, QualName};
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// The default parser
#[derive(Clone, Copy, Debug, Default)]
pub struct Html5everParser;

impl Html5everParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeParser for Html5everParser {
    type Output = ParseTree;

    fn parse(&self, input: &[u8], options: &ResolvedOptions) -> Option<ParseTree> {
        let source = String::from_utf8_lossy(input);
        let source = StrTendril::from(source.as_ref());
        let sink = ParseTreeSink::new();

        let tree = match options.fragment_context {
            None => parse_document(sink, ParseOpts::default()).one(source),
            Some(tag) => {
                let context = QualName::new(
                    None,
                    html5ever::Namespace::from(options.fragment_namespace.url()),
                    LocalName::from(context_name(tag, options.fragment_namespace)),
                );
                parse_fragment(sink, ParseOpts::default(), context, Vec::new()).one(source)
            }
        };

        log::trace!("html5ever produced {} raw nodes", tree.node_count());
        Some(tree)
    }

    fn release(&self, output: ParseTree) {
        drop(output);
    }
}

/// Local name of the fragment context element. SVG names keep their mixed case; html5ever
/// only recognizes `foreignObject` as an integration point when spelled that way.
fn context_name(tag: Tag, namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::Svg => normalize_svg_tagname(tag.as_str()).unwrap_or(tag.as_str()),
        Namespace::Html | Namespace::MathMl => tag.as_str(),
    }
}

/// Element name as html5ever wants to see it while building the tree
#[derive(Debug, Clone)]
pub struct OwnedElemName(QualName);

impl ElemName for OwnedElemName {
    fn ns(&self) -> &html5ever::Namespace {
        &self.0.ns
    }

    fn local_name(&self) -> &LocalName {
        &self.0.local
    }
}

/// Records html5ever's tree construction into a [`ParseTree`]
struct ParseTreeSink {
    tree: RefCell<ParseTree>,
    /// Qualified names of all elements, html5ever asks for them constantly
    names: RefCell<HashMap<NodeId, QualName>>,
    integration_points: RefCell<HashSet<NodeId>>,
}

impl ParseTreeSink {
    fn new() -> Self {
        Self {
            tree: RefCell::new(ParseTree::new()),
            names: RefCell::new(HashMap::new()),
            integration_points: RefCell::new(HashSet::new()),
        }
    }

    /// Appends text to `parent`, merging it into the last child when that is text already
    fn append_text(&self, parent: NodeId, text: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();

        let last = tree.children(parent).last().copied();
        if let Some(last) = last {
            if merge_text(&mut tree, last, text) {
                return last;
            }
        }

        tree.append_node(parent, text_data(text.to_owned()))
    }

    /// Inserts text right before `sibling`, merging it into a text node in front of it
    fn insert_text_before(&self, sibling: NodeId, text: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();

        let previous = tree.node(sibling).and_then(|node| node.parent).and_then(|parent| {
            let children = tree.children(parent);
            let index = children.iter().position(|&child| child == sibling)?;
            index.checked_sub(1).and_then(|prev| children.get(prev).copied())
        });

        if let Some(previous) = previous {
            if merge_text(&mut tree, previous, text) {
                return previous;
            }
        }

        let id = tree.create_node(text_data(text.to_owned()));
        tree.insert_before(sibling, id);
        id
    }

    fn has_parent(&self, id: NodeId) -> bool {
        self.tree.borrow().node(id).is_some_and(|node| node.parent.is_some())
    }
}

/// Text node data, with whitespace-only runs reported as whitespace
fn text_data(text: String) -> RawNodeData {
    let raw = RawText {
        text,
        start_pos: Position::unknown(),
    };

    if raw.text.chars().all(is_html_whitespace) {
        RawNodeData::Whitespace(raw)
    } else {
        RawNodeData::Text(raw)
    }
}

fn is_html_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

/// Appends `text` to the text node `id`. Returns false when `id` is not a text node.
fn merge_text(tree: &mut ParseTree, id: NodeId, text: &str) -> bool {
    let Some(node) = tree.node_mut(id) else {
        return false;
    };

    let merged = match &node.data {
        RawNodeData::Text(existing) | RawNodeData::Whitespace(existing) => format!("{}{}", existing.text, text),
        _ => return false,
    };

    node.data = text_data(merged);
    true
}

fn raw_attributes(attrs: Vec<Attribute>) -> Vec<RawAttribute> {
    attrs
        .into_iter()
        .map(|attr| {
            RawAttribute::new(attr.name.local.as_ref(), attr.value.as_ref())
                .with_namespace(AttributeNamespace::from_url(attr.name.ns.as_ref()))
        })
        .collect()
}

fn quirks_mode(mode: SinkQuirksMode) -> QuirksMode {
    match mode {
        SinkQuirksMode::Quirks => QuirksMode::Quirks,
        SinkQuirksMode::LimitedQuirks => QuirksMode::LimitedQuirks,
        SinkQuirksMode::NoQuirks => QuirksMode::NoQuirks,
    }
}

impl TreeSink for ParseTreeSink {
    type Handle = NodeId;
    type Output = ParseTree;
    type ElemName<'a>
        = OwnedElemName
    where
        Self: 'a;

    fn finish(self) -> ParseTree {
        self.tree.into_inner()
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        log::trace!("html5ever parse error: {msg}");
    }

    fn get_document(&self) -> NodeId {
        self.tree.borrow().document_id()
    }

    fn elem_name<'a>(&'a self, target: &'a NodeId) -> OwnedElemName {
        let name = self.names.borrow().get(target).cloned();
        OwnedElemName(name.unwrap_or_else(|| {
            QualName::new(None, html5ever::Namespace::from(HTML_NAMESPACE), LocalName::from(""))
        }))
    }

    fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags) -> NodeId {
        let local: &str = name.local.as_ref();
        let element = RawElement {
            tag: Tag::from_name(local),
            namespace: Namespace::from_url(name.ns.as_ref()),
            original_tag: local.to_owned(),
            start_pos: Position::unknown(),
            attributes: raw_attributes(attrs),
        };

        let data = if flags.template {
            RawNodeData::Template(element)
        } else {
            RawNodeData::Element(element)
        };

        let id = self.tree.borrow_mut().create_node(data);
        if flags.mathml_annotation_xml_integration_point {
            self.integration_points.borrow_mut().insert(id);
        }
        self.names.borrow_mut().insert(id, name);

        id
    }

    fn create_comment(&self, text: StrTendril) -> NodeId {
        self.tree
            .borrow_mut()
            .create_node(RawNodeData::Comment(RawText::new(text.as_ref())))
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> NodeId {
        // html never produces processing instructions, they end up as bogus comments
        self.tree
            .borrow_mut()
            .create_node(RawNodeData::Comment(RawText::new(data.as_ref())))
    }

    fn append(&self, parent: &NodeId, child: NodeOrText<NodeId>) {
        match child {
            NodeOrText::AppendNode(node) => self.tree.borrow_mut().append(*parent, node),
            NodeOrText::AppendText(text) => {
                self.append_text(*parent, text.as_ref());
            }
        }
    }

    fn append_based_on_parent_node(&self, element: &NodeId, prev_element: &NodeId, child: NodeOrText<NodeId>) {
        let fostered = match &child {
            NodeOrText::AppendNode(node) => Some(*node),
            NodeOrText::AppendText(_) => None,
        };

        if self.has_parent(*element) {
            self.append_before_sibling(element, child);
        } else {
            self.append(prev_element, child);
        }

        if let Some(node) = fostered {
            self.tree
                .borrow_mut()
                .add_parse_flags(node, InsertionFlags::FOSTER_PARENTED);
        }
    }

    fn append_doctype_to_document(&self, name: StrTendril, public_id: StrTendril, system_id: StrTendril) {
        self.tree
            .borrow_mut()
            .set_doctype(name.as_ref(), public_id.as_ref(), system_id.as_ref());
    }

    fn get_template_contents(&self, target: &NodeId) -> NodeId {
        // template contents are kept as the children of the template node itself
        *target
    }

    fn same_node(&self, x: &NodeId, y: &NodeId) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, mode: SinkQuirksMode) {
        self.tree.borrow_mut().document_mut().quirks_mode = quirks_mode(mode);
    }

    fn append_before_sibling(&self, sibling: &NodeId, new_node: NodeOrText<NodeId>) {
        match new_node {
            NodeOrText::AppendNode(node) => self.tree.borrow_mut().insert_before(*sibling, node),
            NodeOrText::AppendText(text) => {
                self.insert_text_before(*sibling, text.as_ref());
            }
        }
    }

    fn add_attrs_if_missing(&self, target: &NodeId, attrs: Vec<Attribute>) {
        let mut tree = self.tree.borrow_mut();
        let Some(node) = tree.node_mut(*target) else {
            return;
        };

        let (RawNodeData::Element(element) | RawNodeData::Template(element)) = &mut node.data else {
            return;
        };

        for attr in raw_attributes(attrs) {
            if !element.attributes.iter().any(|existing| existing.name == attr.name) {
                element.attributes.push(attr);
            }
        }
    }

    fn remove_from_parent(&self, target: &NodeId) {
        self.tree.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &NodeId, new_parent: &NodeId) {
        let mut tree = self.tree.borrow_mut();
        let moved = tree.children(*node).to_vec();

        tree.reparent_children(*node, *new_parent);
        for child in moved {
            tree.add_parse_flags(child, InsertionFlags::ADOPTION_AGENCY_MOVED);
        }
    }

    fn is_mathml_annotation_xml_integration_point(&self, handle: &NodeId) -> bool {
        self.integration_points.borrow().contains(handle)
    }
}
