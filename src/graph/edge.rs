use crate::graph::node::NodeId;

#[derive(Clone, Debug)]
pub struct Edge {
    to: NodeId,
    /// remaining capacity >= 0.0
    capacity: f64,
    /// capacity at creation, 0.0 for the reverse half
    original: f64,
    /// position of the paired edge in `to`'s adjacency list
    rev: usize,
    reverse: bool,
}

impl Edge {
    pub fn forward(to: NodeId, capacity: f64, rev: usize) -> Self {
        Self {
            to,
            capacity,
            original: capacity,
            rev,
            reverse: false,
        }
    }

    pub fn backward(to: NodeId, rev: usize) -> Self {
        Self {
            to,
            capacity: 0.0,
            original: 0.0,
            rev,
            reverse: true,
        }
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn original(&self) -> f64 {
        self.original
    }

    pub fn rev(&self) -> usize {
        self.rev
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn has_capacity(&self) -> bool {
        self.capacity > 0.0
    }

    /// Flow sent through a forward edge.
    pub fn flow(&self) -> f64 {
        self.original() - self.capacity()
    }

    pub(crate) fn push(&mut self, amount: f64) {
        self.capacity -= amount;
    }

    pub(crate) fn pull(&mut self, amount: f64) {
        self.capacity += amount;
    }
}
