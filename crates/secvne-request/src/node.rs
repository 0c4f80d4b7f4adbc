//! Virtual node.

use serde::Serialize;

/// A node of a virtual network request.
///
/// The position of a node in the request's node list is its node index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VirtualNode {
    /// Node name.
    pub name: String,
    /// CPU demand of this node.
    pub cpu: f64,
    /// Minimum security level demanded by this node.
    pub security: f64,
}

impl VirtualNode {
    /// Creates a new virtual node.
    pub fn new(name: &str, cpu: f64, security: f64) -> Self {
        Self {
            name: name.to_string(),
            cpu,
            security,
        }
    }
}
