pub mod attributes;
pub mod comment;
pub mod doctype;
pub mod element;
pub mod fragment;
pub mod text;
