#![doc = include_str!("../README.md")]

pub mod edge;
pub mod error;
pub mod file_format;
pub mod node;
pub mod virtual_network;

pub use edge::VirtualEdge;
pub use error::{FormatError, RequestError};
pub use node::VirtualNode;
pub use virtual_network::VirtualNetwork;
