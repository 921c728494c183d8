use html5dom_shared::node::Position;

/// The kind of character data the parser reported for a text node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextKind {
    #[default]
    Text,
    /// Text consisting of whitespace only
    Whitespace,
    /// Contents of a `<![CDATA[...]]>` section in foreign content
    CData,
}

impl TextKind {
    /// Subtype label. Plain text has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            TextKind::Text => None,
            TextKind::Whitespace => Some("whitespace"),
            TextKind::CData => Some("cdata"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Data structure for text nodes
pub struct TextData {
    /// Actual text
    pub value: String,
    pub position: Option<Position>,
    pub kind: TextKind,
}

impl TextData {
    pub(crate) fn new(value: &str, position: Option<Position>, kind: TextKind) -> Self {
        Self {
            value: value.to_owned(),
            position,
            kind,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
