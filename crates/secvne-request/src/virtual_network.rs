//! Virtual network request.

use serde::Serialize;

use crate::edge::VirtualEdge;
use crate::error::RequestError;
use crate::node::VirtualNode;

/// Holds the total information of one virtual network request.
///
/// A request consists of virtual nodes and edges with their resource and security demands,
/// the security levels offered at the candidate cloud locations, optional backup placement
/// preferences and scheduling metadata (arrival time and lifetime).
///
/// The request grows append-only while it is built by a topology generator. After that,
/// attribute columns may be bulk-replaced through the `set_*` operations (e.g. by an
/// optimizer recomputing resource allocations); collection accessors return read-only
/// views, so bulk replacement is the only external mutation path.
///
/// Cloning a request yields an independent deep copy: mutating the clone never affects
/// the original.
#[derive(Clone, Debug, Serialize)]
pub struct VirtualNetwork {
    duration: u64,
    arrival: u64,
    nodes: Vec<VirtualNode>,
    edges: Vec<VirtualEdge>,
    clouds_security: Vec<f64>,
    backup_localization: Vec<usize>,
    want_backup: bool,
}

impl VirtualNetwork {
    /// Creates an empty virtual network request with the given lifetime.
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            arrival: 0,
            nodes: Vec::new(),
            edges: Vec::new(),
            clouds_security: Vec::new(),
            backup_localization: Vec::new(),
            want_backup: false,
        }
    }

    /// Adds a node with its CPU demand and demanded security level, returns the node index.
    pub fn add_node(&mut self, name: &str, cpu: f64, security: f64) -> usize {
        let node_id = self.nodes.len();
        self.nodes.push(VirtualNode::new(name, cpu, security));
        node_id
    }

    /// Adds an edge with its bandwidth demand and demanded security level, returns the
    /// edge index.
    ///
    /// Both endpoints must name existing nodes of this request.
    pub fn add_edge(&mut self, from: &str, to: &str, bandwidth: f64, security: f64) -> usize {
        assert!(self.find_node(from).is_some(), "unknown edge endpoint {}", from);
        assert!(self.find_node(to).is_some(), "unknown edge endpoint {}", to);
        let edge_id = self.edges.len();
        self.edges.push(VirtualEdge::new(from, to, bandwidth, security));
        edge_id
    }

    /// Adds the security level offered at the next candidate cloud location.
    pub fn add_cloud_security(&mut self, level: f64) {
        self.clouds_security.push(level);
    }

    /// Adds a desired physical location for placing a backup instance.
    pub fn add_backup_localization(&mut self, location: usize) {
        self.backup_localization.push(location);
    }

    /// Returns the index of the node with the given name.
    pub fn find_node(&self, name: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.name == name)
    }

    pub fn get_node(&self, index: usize) -> &VirtualNode {
        &self.nodes[index]
    }

    pub fn get_nodes(&self) -> &[VirtualNode] {
        &self.nodes
    }

    pub fn get_node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get_edge(&self, index: usize) -> &VirtualEdge {
        &self.edges[index]
    }

    pub fn get_edges(&self) -> &[VirtualEdge] {
        &self.edges
    }

    pub fn get_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the security level offered at the given cloud location.
    pub fn get_cloud_security(&self, index: usize) -> f64 {
        self.clouds_security[index]
    }

    pub fn get_clouds_security(&self) -> &[f64] {
        &self.clouds_security
    }

    pub fn get_backup_localization(&self, index: usize) -> usize {
        self.backup_localization[index]
    }

    /// Returns the desired backup locations.
    ///
    /// The entries are only meaningful when [`wants_backup`](Self::wants_backup) is true.
    pub fn get_backups_localization(&self) -> &[usize] {
        &self.backup_localization
    }

    /// Returns the lifetime of the request in simulation time units.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn set_duration(&mut self, duration: u64) {
        self.duration = duration;
    }

    /// Returns the simulation instant at which the request enters the system.
    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    pub fn set_arrival(&mut self, arrival: u64) {
        self.arrival = arrival;
    }

    /// Returns whether backup placement is requested for this network.
    pub fn wants_backup(&self) -> bool {
        self.want_backup
    }

    pub fn set_want_backup(&mut self, want_backup: bool) {
        self.want_backup = want_backup;
    }

    /// Replaces the CPU demands of all nodes.
    ///
    /// The replacement must have exactly one entry per node.
    pub fn set_nodes_cpu(&mut self, cpu: Vec<f64>) -> Result<(), RequestError> {
        if cpu.len() != self.nodes.len() {
            return Err(RequestError::LengthMismatch {
                collection: "nodes cpu",
                expected: self.nodes.len(),
                actual: cpu.len(),
            });
        }
        for (node, cpu) in self.nodes.iter_mut().zip(cpu) {
            node.cpu = cpu;
        }
        Ok(())
    }

    /// Replaces the demanded security levels of all nodes.
    ///
    /// The replacement must have exactly one entry per node.
    pub fn set_nodes_security(&mut self, security: Vec<f64>) -> Result<(), RequestError> {
        if security.len() != self.nodes.len() {
            return Err(RequestError::LengthMismatch {
                collection: "nodes security",
                expected: self.nodes.len(),
                actual: security.len(),
            });
        }
        for (node, security) in self.nodes.iter_mut().zip(security) {
            node.security = security;
        }
        Ok(())
    }

    /// Replaces the bandwidth demands of all edges.
    ///
    /// The replacement must have exactly one entry per edge.
    pub fn set_edges_bandwidth(&mut self, bandwidth: Vec<f64>) -> Result<(), RequestError> {
        if bandwidth.len() != self.edges.len() {
            return Err(RequestError::LengthMismatch {
                collection: "edges bandwidth",
                expected: self.edges.len(),
                actual: bandwidth.len(),
            });
        }
        for (edge, bandwidth) in self.edges.iter_mut().zip(bandwidth) {
            edge.bandwidth = bandwidth;
        }
        Ok(())
    }

    /// Replaces the demanded security levels of all edges.
    ///
    /// The replacement must have exactly one entry per edge.
    pub fn set_edges_security(&mut self, security: Vec<f64>) -> Result<(), RequestError> {
        if security.len() != self.edges.len() {
            return Err(RequestError::LengthMismatch {
                collection: "edges security",
                expected: self.edges.len(),
                actual: security.len(),
            });
        }
        for (edge, security) in self.edges.iter_mut().zip(security) {
            edge.security = security;
        }
        Ok(())
    }

    /// Replaces the offered cloud security levels.
    ///
    /// Clouds are indexed independently of nodes, so any size is accepted.
    pub fn set_clouds_security(&mut self, clouds_security: Vec<f64>) {
        self.clouds_security = clouds_security;
    }

    /// Replaces the desired backup locations.
    pub fn set_backup_localization(&mut self, backup_localization: Vec<usize>) {
        self.backup_localization = backup_localization;
    }

    /// Returns the revenue generated for the provider if the request is accepted.
    ///
    /// Each node contributes its CPU demand weighted by its demanded security level and by
    /// the security level offered at the corresponding candidate cloud. Each edge
    /// contributes its bandwidth demand weighted by its own demanded security level only,
    /// since edges have no hosting location.
    ///
    /// Fails if fewer cloud security levels are offered than the request has nodes.
    pub fn revenue(&self) -> Result<f64, RequestError> {
        if self.clouds_security.len() < self.nodes.len() {
            return Err(RequestError::MissingCloudSecurity {
                nodes: self.nodes.len(),
                clouds: self.clouds_security.len(),
            });
        }
        let nodes_revenue: f64 = self
            .nodes
            .iter()
            .zip(&self.clouds_security)
            .map(|(node, cloud_security)| node.cpu * node.security * cloud_security)
            .sum();
        let edges_revenue: f64 = self.edges.iter().map(|edge| edge.bandwidth * edge.security).sum();
        Ok(nodes_revenue + edges_revenue)
    }
}
