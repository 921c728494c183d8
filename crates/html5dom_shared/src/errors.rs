//! Errors produced while interpreting shared vocabulary
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("invalid option '{0}'")]
    UnknownNamespace(String),
}
