use html5dom_shared::node::Position;

#[derive(Clone, Debug, PartialEq)]
/// Data structure for comment nodes
pub struct CommentData {
    /// The actual comment
    pub value: String,
    pub position: Option<Position>,
}

impl CommentData {
    pub(crate) fn new(value: &str, position: Option<Position>) -> Self {
        Self {
            value: value.to_owned(),
            position,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}
