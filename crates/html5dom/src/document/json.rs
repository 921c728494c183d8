//! JSON export of a projected document.
//!
//! The output mirrors the DOM field names (`localName`, `childNodes`, `quirksMode`, ...) and
//! leaves out every field the projection did not set, so absent and empty stay distinguishable.
//! Parent links are not exported.
//!
//! Both exports walk the tree with an explicit stack of pending work, so a document nested as
//! deep as the projection allows never recurses once per level.
use crate::document::Document;
use crate::errors::Result;
use crate::node::data::attributes::Attribute;
use crate::node::node_impl::{Node, NodeData};
use html5dom_shared::node::{NodeId, Position};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

impl Document {
    /// Compact JSON text of the whole document
    pub fn to_json(&self) -> Result<String> {
        let mut buffer = String::from(r#"{"nodeType":"Document""#);
        if let Some(quirks_mode) = self.quirks_mode() {
            buffer.push_str(r#","quirksMode":"#);
            buffer.push_str(&serde_json::to_string(quirks_mode.as_str())?);
        }
        buffer.push_str(r#","childNodes":["#);

        let mut pending = vec![Pending::Raw("]}")];
        push_children(&mut pending, self.child_nodes().as_slice());

        while let Some(next) = pending.pop() {
            let id = match next {
                Pending::Raw(text) => {
                    buffer.push_str(text);
                    continue;
                }
                Pending::Node(id) => id,
            };

            let Some(node) = self.node_by_id(id) else {
                buffer.push_str("{}");
                continue;
            };

            buffer.push('{');
            for (index, (key, value)) in node_fields(node).iter().enumerate() {
                if index > 0 {
                    buffer.push(',');
                }
                buffer.push_str(&serde_json::to_string(key)?);
                buffer.push(':');
                buffer.push_str(&serde_json::to_string(value)?);
            }

            let (children, content) = nested(node);
            pending.push(Pending::Raw("}"));
            if let Some(content) = content {
                pending.push(Pending::Node(content));
                pending.push(Pending::Raw(r#","content":"#));
            }
            if let Some(children) = children {
                buffer.push_str(r#","childNodes":["#);
                pending.push(Pending::Raw("]"));
                push_children(&mut pending, children);
            }
        }

        Ok(buffer)
    }

    /// The document as a [`serde_json::Value`], with the same shape as [`Document::to_json`]
    pub fn to_json_value(&self) -> Result<Value> {
        // every node in tree order, so walking it backwards sees children before their parent
        let mut order = Vec::with_capacity(self.node_count());
        let mut stack: Vec<NodeId> = self.child_nodes().iter().rev().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_by_id(id) else {
                continue;
            };
            order.push(node);

            let (children, content) = nested(node);
            stack.extend(content);
            if let Some(children) = children {
                stack.extend(children.iter().rev());
            }
        }

        let mut built: HashMap<NodeId, Value> = HashMap::with_capacity(order.len());
        for node in order.into_iter().rev() {
            let mut fields = node_fields(node);
            let (children, content) = nested(node);
            if let Some(children) = children {
                fields.insert("childNodes".into(), take_all(&mut built, children));
            }
            if let Some(content) = content {
                fields.insert("content".into(), take(&mut built, content));
            }
            built.insert(node.id, Value::Object(fields));
        }

        let mut document = Map::new();
        document.insert("nodeType".into(), "Document".into());
        if let Some(quirks_mode) = self.quirks_mode() {
            document.insert("quirksMode".into(), quirks_mode.as_str().into());
        }
        document.insert("childNodes".into(), take_all(&mut built, self.child_nodes().as_slice()));

        Ok(Value::Object(document))
    }
}

enum Pending {
    Node(NodeId),
    Raw(&'static str),
}

/// Queues `children` so they pop off in order, separated by commas
fn push_children(pending: &mut Vec<Pending>, children: &[NodeId]) {
    for (index, &id) in children.iter().enumerate().rev() {
        pending.push(Pending::Node(id));
        if index > 0 {
            pending.push(Pending::Raw(","));
        }
    }
}

fn take(built: &mut HashMap<NodeId, Value>, id: NodeId) -> Value {
    built.remove(&id).unwrap_or_else(|| Value::Object(Map::new()))
}

fn take_all(built: &mut HashMap<NodeId, Value>, ids: &[NodeId]) -> Value {
    Value::Array(ids.iter().map(|&id| take(built, id)).collect())
}

/// Child list and template content of a node, for the variants that have them
fn nested(node: &Node) -> (Option<&[NodeId]>, Option<NodeId>) {
    match &node.data {
        NodeData::Element(data) => (Some(data.child_nodes.as_slice()), data.content),
        NodeData::DocumentFragment(data) => (Some(data.child_nodes.as_slice()), None),
        _ => (None, None),
    }
}

/// All fields of a node except `childNodes` and `content`
fn node_fields(node: &Node) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("nodeType".into(), node.type_of().as_str().into());

    match &node.data {
        NodeData::Text(data) => {
            fields.insert("data".into(), data.value.as_str().into());
            if let Some(label) = data.kind.label() {
                fields.insert("type".into(), label.into());
            }
            insert_position(&mut fields, data.position);
        }
        NodeData::Comment(data) => {
            fields.insert("data".into(), data.value.as_str().into());
            insert_position(&mut fields, data.position);
        }
        NodeData::DocType(data) => {
            fields.insert("name".into(), data.name.as_str().into());
            fields.insert("publicId".into(), data.pub_identifier.as_str().into());
            fields.insert("systemId".into(), data.sys_identifier.as_str().into());
        }
        NodeData::DocumentFragment(_) => {}
        NodeData::Element(data) => {
            if data.is_template() {
                fields.insert("type".into(), "template".into());
            }
            fields.insert("localName".into(), data.local_name.as_str().into());
            if let Some(namespace) = data.namespace {
                fields.insert("namespace".into(), namespace.as_str().into());
            }
            insert_position(&mut fields, data.position);
            if let Some(flags) = data.parse_flags {
                fields.insert("parseFlags".into(), flags.bits().into());
            }
            if let Some(attributes) = &data.attributes {
                let attributes = attributes.into_iter().map(attribute_value).collect();
                fields.insert("attributes".into(), Value::Array(attributes));
            }
        }
    }

    fields
}

fn attribute_value(attribute: &Attribute) -> Value {
    let mut fields = Map::new();
    fields.insert("name".into(), attribute.name.as_str().into());
    fields.insert("value".into(), attribute.value.as_str().into());
    if let Some(prefix) = attribute.prefix() {
        fields.insert("prefix".into(), prefix.into());
    }
    insert_position(&mut fields, attribute.position);
    Value::Object(fields)
}

fn insert_position(fields: &mut Map<String, Value>, position: Option<Position>) {
    if let Some(position) = position {
        fields.insert(
            "position".into(),
            json!({
                "line": position.line,
                "column": position.column,
                "offset": position.offset,
            }),
        );
    }
}
