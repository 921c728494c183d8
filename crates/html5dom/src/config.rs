//! Parse options
//!
//! `ParseOptions` is what a caller hands to [`crate::parser::parse_with_options`]. The values are
//! kept as given and only checked in [`ParseOptions::resolve`], right before the parser runs, so a
//! bad option never reaches the parser.
use crate::errors::{Error, Result};
use html5dom_shared::errors::VocabularyError;
use html5dom_shared::tags::Tag;
use html5dom_shared::traits::parser::ResolvedOptions;
use html5dom_shared::types::Namespace;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Tab width the parser uses when computing columns
    pub tab_stop: u32,
    /// Tag name of the element the input is parsed into. `None` parses a full document.
    pub fragment_context: Option<String>,
    /// Namespace of the fragment context element: "html", "svg" or "math"
    pub fragment_namespace: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_stop: 8,
            fragment_context: None,
            fragment_namespace: Namespace::Html.as_str().to_owned(),
        }
    }
}

impl ParseOptions {
    pub fn with_tab_stop(mut self, tab_stop: u32) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    /// Parse the input as the contents of a `tag` element in the given namespace
    pub fn with_fragment_context(mut self, tag: &str, namespace: &str) -> Self {
        self.fragment_context = Some(tag.to_owned());
        self.fragment_namespace = namespace.to_owned();
        self
    }

    /// Loads options from a JSON object. Missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the options and resolves the names into what a parser works with
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let fragment_namespace = self
            .fragment_namespace
            .parse::<Namespace>()
            .map_err(|VocabularyError::UnknownNamespace(value)| Error::InvalidOption(value))?;

        Ok(ResolvedOptions {
            tab_stop: self.tab_stop,
            fragment_context: self.fragment_context.as_deref().map(Tag::from_name),
            fragment_namespace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.tab_stop, 8);
        assert_eq!(options.fragment_context, None);
        assert_eq!(options.fragment_namespace, "html");

        assert_eq!(options.resolve().unwrap(), ResolvedOptions::default());
    }

    #[test_case("td", "html", Tag::Td, Namespace::Html)]
    #[test_case("DIV", "html", Tag::Div, Namespace::Html)]
    #[test_case("svg", "svg", Tag::Svg, Namespace::Svg)]
    #[test_case("my-widget", "math", Tag::Unknown, Namespace::MathMl)]
    fn resolves_fragment_context(tag: &str, namespace: &str, expected_tag: Tag, expected_ns: Namespace) {
        let resolved = ParseOptions::default()
            .with_fragment_context(tag, namespace)
            .resolve()
            .unwrap();

        assert_eq!(resolved.fragment_context, Some(expected_tag));
        assert_eq!(resolved.fragment_namespace, expected_ns);
    }

    #[test]
    fn rejects_unknown_namespace() {
        let options = ParseOptions::default().with_fragment_context("div", "xhtml");
        let err = options.resolve().unwrap_err();

        assert!(matches!(err, Error::InvalidOption(ref value) if value == "xhtml"));
        assert_eq!(err.to_string(), "invalid option 'xhtml' for fragment namespace");
    }

    #[test]
    fn loads_from_json() {
        let options = ParseOptions::from_json(r#"{"tabStop": 4, "fragmentContext": "tr"}"#).unwrap();
        assert_eq!(options.tab_stop, 4);
        assert_eq!(options.fragment_context.as_deref(), Some("tr"));
        assert_eq!(options.fragment_namespace, "html");

        let options = ParseOptions::from_json("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ParseOptions::from_json(r#"{"tabStop": "wide"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
