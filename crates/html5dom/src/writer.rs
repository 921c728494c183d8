use crate::document::Document;
use crate::node::data::attributes::Attribute;
use crate::node::node_impl::Node;
use crate::node::visitor::Visitor;
use html5dom_shared::node::NodeId;
use html5dom_shared::types::AttributeNamespace;

/// Elements that never have an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is written as is
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "xmp",
];

/// Writer to convert a document (or part of it) back into HTML
pub struct DocumentWriter {
    /// The buffer to write to
    buffer: String,
    /// Whether to include comments in the output
    comments: bool,
    /// Elements currently open, and whether their text content is raw
    open_elements: Vec<bool>,
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            comments: true,
            open_elements: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn write_document(document: &Document) -> String {
        Self::new().serialize_document(document)
    }

    pub fn write_node(document: &Document, node_id: NodeId) -> String {
        Self::new().serialize_node(document, node_id)
    }

    pub fn serialize_document(mut self, document: &Document) -> String {
        document.walk(&mut self);
        self.buffer
    }

    pub fn serialize_node(mut self, document: &Document, node_id: NodeId) -> String {
        document.walk_from(node_id, &mut self);
        self.buffer
    }

    fn in_raw_text(&self) -> bool {
        self.open_elements.last().copied().unwrap_or(false)
    }

    fn write_attribute(&mut self, attribute: &Attribute) {
        self.buffer.push(' ');
        match attribute.namespace {
            AttributeNamespace::Xmlns if attribute.name == "xmlns" => {}
            _ => {
                if let Some(prefix) = attribute.prefix() {
                    self.buffer.push_str(prefix);
                    self.buffer.push(':');
                }
            }
        }
        self.buffer.push_str(&attribute.name);
        self.buffer.push_str("=\"");
        escape_into(&mut self.buffer, &attribute.value, true);
        self.buffer.push('"');
    }
}

fn escape_into(buffer: &mut String, text: &str, attribute_mode: bool) {
    for c in text.chars() {
        match c {
            '&' => buffer.push_str("&amp;"),
            '\u{a0}' => buffer.push_str("&nbsp;"),
            '"' if attribute_mode => buffer.push_str("&quot;"),
            '<' if !attribute_mode => buffer.push_str("&lt;"),
            '>' if !attribute_mode => buffer.push_str("&gt;"),
            c => buffer.push(c),
        }
    }
}

impl Visitor for DocumentWriter {
    fn doctype_enter(&mut self, node: &Node) {
        if let Some(data) = node.get_doctype_data() {
            self.buffer.push_str("<!DOCTYPE ");
            self.buffer.push_str(data.name());
            if !data.pub_identifier.is_empty() {
                self.buffer.push_str(" PUBLIC \"");
                self.buffer.push_str(&data.pub_identifier);
                self.buffer.push('"');
                if !data.sys_identifier.is_empty() {
                    self.buffer.push_str(" \"");
                    self.buffer.push_str(&data.sys_identifier);
                    self.buffer.push('"');
                }
            } else if !data.sys_identifier.is_empty() {
                self.buffer.push_str(" SYSTEM \"");
                self.buffer.push_str(&data.sys_identifier);
                self.buffer.push('"');
            }
            self.buffer.push('>');
        }
    }

    fn text_enter(&mut self, node: &Node) {
        if let Some(data) = node.get_text_data() {
            if self.in_raw_text() {
                self.buffer.push_str(data.value());
            } else {
                escape_into(&mut self.buffer, data.value(), false);
            }
        }
    }

    fn comment_enter(&mut self, node: &Node) {
        if !self.comments {
            return;
        }

        if let Some(data) = node.get_comment_data() {
            self.buffer.push_str("<!--");
            self.buffer.push_str(data.value());
            self.buffer.push_str("-->");
        }
    }

    fn element_enter(&mut self, node: &Node) {
        if let Some(data) = node.get_element_data() {
            self.buffer.push('<');
            self.buffer.push_str(data.name());

            if let Some(attributes) = &data.attributes {
                for attribute in attributes {
                    self.write_attribute(attribute);
                }
            }

            self.buffer.push('>');
            self.open_elements
                .push(data.is_html() && RAW_TEXT_ELEMENTS.contains(&data.name()));
        }
    }

    fn element_leave(&mut self, node: &Node) {
        if let Some(data) = node.get_element_data() {
            self.open_elements.pop();
            if data.is_html() && VOID_ELEMENTS.contains(&data.name()) {
                return;
            }

            self.buffer.push_str("</");
            self.buffer.push_str(data.name());
            self.buffer.push('>');
        }
    }
}
