use crate::parse_tree::ParseTree;
use crate::tags::Tag;
use crate::types::Namespace;

/// Options handed to a [`TreeParser`], after they have been validated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Tab width used when computing column numbers
    pub tab_stop: u32,
    /// When set, the input is parsed as the contents of an element with this tag
    pub fragment_context: Option<Tag>,
    /// Namespace of the fragment context element
    pub fragment_namespace: Namespace,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            tab_stop: 8,
            fragment_context: None,
            fragment_namespace: Namespace::Html,
        }
    }
}

/// An HTML5 parser (tokenizer and tree construction) that can feed the projection.
///
/// A parser either produces a complete tree or nothing at all; there is no error detail and no
/// partial output. Every output returned by [`TreeParser::parse`] must be handed back to
/// [`TreeParser::release`] exactly once.
pub trait TreeParser {
    type Output: AsRef<ParseTree>;

    fn parse(&self, input: &[u8], options: &ResolvedOptions) -> Option<Self::Output>;

    fn release(&self, output: Self::Output);
}
