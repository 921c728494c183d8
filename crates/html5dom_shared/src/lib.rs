//! Shared functionality
//!
//! This crate supplies the vocabulary shared between the projection core and the parsers that
//! feed it: node identifiers, source positions, the static tag table, namespace and quirks
//! enumerations, and the parse tree an external HTML5 parser hands over.
//!

pub mod errors;
pub mod node;
pub mod parse_tree;
pub mod tags;
pub mod traits;
pub mod types;
