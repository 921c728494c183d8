//! Entry points that run a parser and project its output.
//!
//! The parser output is owned by an [`OutputGuard`] for the whole projection, which hands it
//! back to the parser exactly once, whether the projection succeeds, fails or panics.
use crate::config::ParseOptions;
use crate::document::Document;
use crate::errors::{Error, Result};
use crate::projector::document::assemble;
use html5dom_shared::traits::parser::TreeParser;

pub mod html5ever_parser;

pub use html5ever_parser::Html5everParser;

/// Parses a complete HTML document with the default options
pub fn parse<I: AsRef<[u8]>>(input: I) -> Result<Document> {
    parse_with_options(input, &ParseOptions::default())
}

/// Parses HTML with the html5ever tree builder
pub fn parse_with_options<I: AsRef<[u8]>>(input: I, options: &ParseOptions) -> Result<Document> {
    parse_with(&Html5everParser::new(), input, options)
}

/// Parses HTML with any parser and projects its tree into a [`Document`].
///
/// Options are validated before the parser is invoked, so an invalid option never reaches it.
pub fn parse_with<P: TreeParser, I: AsRef<[u8]>>(parser: &P, input: I, options: &ParseOptions) -> Result<Document> {
    let input = input.as_ref();
    let resolved = options.resolve()?;

    log::debug!(
        "parsing {} bytes (fragment context: {:?}, namespace: {})",
        input.len(),
        resolved.fragment_context,
        resolved.fragment_namespace
    );

    let Some(output) = parser.parse(input, &resolved) else {
        log::warn!("parser did not produce a tree for {} bytes of input", input.len());
        return Err(Error::ParseFailure);
    };

    let guard = OutputGuard::new(parser, output);
    let result = guard
        .tree()
        .map_or(Err(Error::ParseFailure), |output| assemble(output.as_ref()));

    match result {
        Ok(document) => {
            log::debug!("projected {} nodes", document.node_count());
            Ok(document)
        }
        Err(err) => {
            log::warn!("projection failed: {err}");
            Err(err)
        }
    }
}

/// Owns a parser output until it is dropped, then releases it through the parser
struct OutputGuard<'p, P: TreeParser> {
    parser: &'p P,
    output: Option<P::Output>,
}

impl<'p, P: TreeParser> OutputGuard<'p, P> {
    fn new(parser: &'p P, output: P::Output) -> Self {
        Self {
            parser,
            output: Some(output),
        }
    }

    fn tree(&self) -> Option<&P::Output> {
        self.output.as_ref()
    }
}

impl<P: TreeParser> Drop for OutputGuard<'_, P> {
    fn drop(&mut self) {
        if let Some(output) = self.output.take() {
            self.parser.release(output);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5dom_shared::parse_tree::{ParseTree, RawElement, RawNodeData, RawText};
    use html5dom_shared::tags::Tag;
    use html5dom_shared::traits::parser::ResolvedOptions;
    use html5dom_shared::types::Namespace;
    use std::cell::{Cell, RefCell};

    /// Hands out a prepared tree and counts how often it is called
    struct CountingParser {
        tree: Option<ParseTree>,
        parsed: Cell<usize>,
        released: Cell<usize>,
        seen_options: RefCell<Option<ResolvedOptions>>,
    }

    impl CountingParser {
        fn new(tree: Option<ParseTree>) -> Self {
            Self {
                tree,
                parsed: Cell::new(0),
                released: Cell::new(0),
                seen_options: RefCell::new(None),
            }
        }
    }

    impl TreeParser for CountingParser {
        type Output = ParseTree;

        fn parse(&self, _input: &[u8], options: &ResolvedOptions) -> Option<ParseTree> {
            self.parsed.set(self.parsed.get() + 1);
            *self.seen_options.borrow_mut() = Some(options.clone());
            self.tree.clone()
        }

        fn release(&self, _output: ParseTree) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn simple_tree() -> ParseTree {
        let mut tree = ParseTree::new();
        let doc = tree.document_id();
        let p = tree.append_node(doc, RawNodeData::Element(RawElement::html("p")));
        tree.append_node(p, RawNodeData::Text(RawText::new("A")));
        tree
    }

    fn too_deep_tree() -> ParseTree {
        let mut tree = ParseTree::new();
        let mut parent = tree.document_id();
        for _ in 0..801 {
            parent = tree.append_node(parent, RawNodeData::Element(RawElement::html("div")));
        }
        tree
    }

    #[test]
    fn releases_once_on_success() {
        let parser = CountingParser::new(Some(simple_tree()));
        let document = parse_with(&parser, "<p>A", &ParseOptions::default()).unwrap();

        assert_eq!(document.child_nodes().len(), 1);
        assert_eq!(parser.parsed.get(), 1);
        assert_eq!(parser.released.get(), 1);
    }

    #[test]
    fn releases_once_on_projection_error() {
        let parser = CountingParser::new(Some(too_deep_tree()));
        let err = parse_with(&parser, "", &ParseOptions::default()).unwrap_err();

        assert!(matches!(err, Error::ResourceLimitExceeded { limit: 800 }));
        assert_eq!(parser.released.get(), 1);
    }

    #[test]
    fn parse_failure_has_nothing_to_release() {
        let parser = CountingParser::new(None);
        let err = parse_with(&parser, "<p>", &ParseOptions::default()).unwrap_err();

        assert!(matches!(err, Error::ParseFailure));
        assert_eq!(err.to_string(), "Failed to parse");
        assert_eq!(parser.parsed.get(), 1);
        assert_eq!(parser.released.get(), 0);
    }

    #[test]
    fn invalid_namespace_never_reaches_the_parser() {
        let parser = CountingParser::new(Some(simple_tree()));
        let options = ParseOptions::default().with_fragment_context("div", "xml");
        let err = parse_with(&parser, "<p>", &options).unwrap_err();

        assert!(matches!(err, Error::InvalidOption(ref value) if value == "xml"));
        assert_eq!(parser.parsed.get(), 0);
        assert_eq!(parser.released.get(), 0);
    }

    #[test]
    fn parser_receives_resolved_options() {
        let parser = CountingParser::new(Some(simple_tree()));
        let options = ParseOptions::default()
            .with_tab_stop(4)
            .with_fragment_context("TR", "html");
        parse_with(&parser, "<td>x", &options).unwrap();

        let seen = parser.seen_options.borrow().clone().unwrap();
        assert_eq!(seen.tab_stop, 4);
        assert_eq!(seen.fragment_context, Some(Tag::Tr));
        assert_eq!(seen.fragment_namespace, Namespace::Html);
    }

    #[test]
    fn repeated_parses_release_every_tree() {
        let parser = CountingParser::new(Some(simple_tree()));
        for _ in 0..3 {
            parse_with(&parser, "<p>A", &ParseOptions::default()).unwrap();
        }
        assert!(parse_with(&CountingParser::new(Some(too_deep_tree())), "", &ParseOptions::default()).is_err());

        assert_eq!(parser.parsed.get(), 3);
        assert_eq!(parser.released.get(), 3);
    }
}
