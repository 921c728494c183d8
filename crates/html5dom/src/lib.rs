//! HTML5 parse tree projection
//!
//! An HTML5 parser turns bytes into a parse tree that it owns. This crate projects that tree
//! into a [`Document`]: an owned graph of elements, text, comments, a document type and
//! template content fragments, with parent links and attribute lookup by name. The parse tree is
//! handed back to its parser as soon as the projection is done, whether it succeeded or not.
//!
//! ```
//! let document = html5dom::parse("<p>A</p><p>B</p>").unwrap();
//! assert_eq!(document.get_elements_by_tag_name("p").len(), 2);
//! ```
pub mod config;
pub mod document;
pub mod errors;
pub mod node;
pub mod parser;
pub mod projector;
pub mod writer;

pub use config::ParseOptions;
pub use document::Document;
pub use errors::{Error, Result};
pub use parser::{parse, parse_with, parse_with_options, Html5everParser};
pub use writer::DocumentWriter;
