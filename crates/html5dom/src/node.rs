pub mod arena;
pub mod data;
pub mod list;
pub mod node_impl;
pub mod visitor;

pub use list::NodeList;
pub use node_impl::{Node, NodeData, NodeType};
