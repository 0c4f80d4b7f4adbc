//! Virtual edge.

use serde::Serialize;

/// An edge (virtual link) between two nodes of a virtual network request.
///
/// Endpoints reference nodes by name, not by index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VirtualEdge {
    /// Name of the source node.
    pub from: String,
    /// Name of the destination node.
    pub to: String,
    /// Bandwidth demand of this edge.
    pub bandwidth: f64,
    /// Minimum security level demanded by this edge.
    pub security: f64,
}

impl VirtualEdge {
    /// Creates a new virtual edge.
    pub fn new(from: &str, to: &str, bandwidth: f64, security: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            bandwidth,
            security,
        }
    }
}
