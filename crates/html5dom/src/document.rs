pub mod document_impl;
pub mod json;
pub mod query;

pub use document_impl::Document;
