use crate::graph::edge::Edge;
use crate::graph::node::NodeId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("edge {from} -> {to} has negative capacity {capacity}")]
    NegativeCapacity { from: usize, to: usize, capacity: f64 },
}

/// Residual multigraph. Every forward edge is stored together with a paired
/// reverse edge in the destination's list; the two capacities always sum to
/// the forward edge's original capacity.
pub struct Graph {
    adj: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); node_count],
        }
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: f64) -> Result<(), GraphError> {
        for node in [from, to] {
            if node.index() >= self.node_count() {
                return Err(GraphError::NodeOutOfRange {
                    node: node.index(),
                    node_count: self.node_count(),
                });
            }
        }
        if capacity < 0.0 || capacity.is_nan() {
            return Err(GraphError::NegativeCapacity {
                from: from.index(),
                to: to.index(),
                capacity,
            });
        }

        // a self-loop lands both halves in the same list
        let forward_pos = self.adj[from.index()].len();
        let backward_pos = self.adj[to.index()].len() + usize::from(from == to);
        self.adj[from.index()].push(Edge::forward(to, capacity, backward_pos));
        self.adj[to.index()].push(Edge::backward(from, forward_pos));
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    pub fn outgoing(&self, id: NodeId) -> &[Edge] {
        &self.adj[id.index()]
    }

    pub fn reverse(&self, edge: &Edge) -> &Edge {
        &self.adj[edge.to().index()][edge.rev()]
    }

    /// Only the solver writes capacities. Pushes `amount` along `from`'s edge at `pos` and credits its pair.
    pub(crate) fn augment(&mut self, from: NodeId, pos: usize, amount: f64) {
        let edge = &mut self.adj[from.index()][pos];
        edge.push(amount);
        let (to, rev) = (edge.to(), edge.rev());
        self.adj[to.index()][rev].pull(amount);
    }

    /// Flow entering `id`. Each incoming edge leaves a reverse half in this
    /// node's list whose capacity equals the flow it carries.
    pub fn inflow(&self, id: NodeId) -> f64 {
        self.outgoing(id)
            .iter()
            .filter(|e| e.is_reverse())
            .map(|e| e.capacity())
            .sum()
    }

    pub fn outflow(&self, id: NodeId) -> f64 {
        self.outgoing(id)
            .iter()
            .filter(|e| !e.is_reverse())
            .map(|e| e.flow())
            .sum()
    }
}
