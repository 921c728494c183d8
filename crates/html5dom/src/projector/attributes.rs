use crate::node::data::attributes::{Attribute, AttributeList};
use html5dom_shared::parse_tree::RawAttribute;

/// Builds the attribute list of an element in source order.
///
/// An element without attributes gets no list at all, so callers can tell "no attributes" apart
/// from an (impossible) empty list.
pub fn project_attributes(raw: &[RawAttribute]) -> Option<AttributeList> {
    if raw.is_empty() {
        return None;
    }

    let mut attributes = AttributeList::with_capacity(raw.len());
    for attr in raw {
        attributes.push(Attribute {
            name: attr.name.clone(),
            value: attr.value.clone(),
            namespace: attr.namespace,
            position: attr.name_start.known(),
        });
    }

    Some(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5dom_shared::node::Position;
    use html5dom_shared::types::AttributeNamespace;

    #[test]
    fn empty_list_is_omitted() {
        assert!(project_attributes(&[]).is_none());
    }

    #[test]
    fn keeps_source_order_and_values() {
        let raw = vec![
            RawAttribute::new("id", "main").with_position(Position::new(1, 6, 5)),
            RawAttribute::new("class", "a b"),
            RawAttribute::new("hidden", ""),
        ];

        let attributes = project_attributes(&raw).unwrap();
        assert_eq!(attributes.len(), 3);

        let names: Vec<&str> = attributes.iter().map(|attr| attr.name.as_str()).collect();
        assert_eq!(names, vec!["id", "class", "hidden"]);

        assert_eq!(attributes.value("class"), Some("a b"));
        assert_eq!(attributes.value("hidden"), Some(""));
        assert_eq!(attributes.get(0).unwrap().position, Some(Position::new(1, 6, 5)));
        assert_eq!(attributes.get(1).unwrap().position, None);
    }

    #[test]
    fn namespaced_attributes_get_a_prefix() {
        let raw = vec![
            RawAttribute::new("href", "#a").with_namespace(AttributeNamespace::XLink),
            RawAttribute::new("width", "10"),
        ];

        let attributes = project_attributes(&raw).unwrap();
        assert_eq!(attributes.named("href").unwrap().prefix(), Some("xlink"));
        assert_eq!(attributes.named("width").unwrap().prefix(), None);
    }

    #[test]
    fn duplicate_names_keep_every_slot() {
        let raw = vec![RawAttribute::new("a", "1"), RawAttribute::new("a", "2")];

        let attributes = project_attributes(&raw).unwrap();
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get(0).unwrap().value, "1");
        assert_eq!(attributes.value("a"), Some("2"));
    }
}
