//! Error results that can be returned from parsing and projection
use thiserror::Error;

/// Errors that end a parse call. A caller gets either a complete document or one of these;
/// there is never a partially projected tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The fragment namespace option named something other than html, svg or math
    #[error("invalid option '{0}' for fragment namespace")]
    InvalidOption(String),

    /// The parser did not produce a tree
    #[error("Failed to parse")]
    ParseFailure,

    #[error("Tree depth limit of {limit} exceeded")]
    ResourceLimitExceeded { limit: usize },

    /// The parser reported a node type the projection does not handle
    #[error("node type value out of bounds: {0}")]
    UnrecognizedNodeType(u32),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, Error>;
