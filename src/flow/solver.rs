use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Ford-Fulkerson with breadth-first path search. Each node's edges are
/// visited in a freshly shuffled order, so ties between equally short paths
/// are broken by `rng`.
pub struct MaxFlowSolver<R: Rng> {
    rng: R,
}

impl MaxFlowSolver<StdRng> {
    /// Fixed seed for reproducible runs, entropy otherwise.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> MaxFlowSolver<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Saturates `graph` in place and returns the total flow pushed.
    pub fn solve(&mut self, graph: &mut Graph, source: NodeId, sink: NodeId) -> f64 {
        if source == sink {
            return 0.0;
        }

        let mut parent = vec![None; graph.node_count()];
        let mut path = Vec::new();
        let mut total = 0.0;
        let mut augmentations = 0usize;

        while self.find_path(graph, source, sink, &mut parent) {
            path.clear();
            let mut v = sink;
            while let Some((u, pos)) = parent[v.index()] {
                path.push((u, pos));
                v = u;
            }

            let bottleneck = path
                .iter()
                .map(|&(u, pos)| graph.outgoing(u)[pos].capacity())
                .fold(f64::INFINITY, f64::min);

            for &(u, pos) in &path {
                graph.augment(u, pos, bottleneck);
            }
            total += bottleneck;
            augmentations += 1;
            trace!("augmented {} along {} edges", bottleneck, path.len());
        }

        debug!("max flow {} after {} augmentations", total, augmentations);
        total
    }

    /// Records for every reached node the (predecessor, edge position) it was
    /// reached through. Stops as soon as the sink is reached.
    fn find_path(
        &mut self,
        graph: &Graph,
        source: NodeId,
        sink: NodeId,
        parent: &mut [Option<(NodeId, usize)>],
    ) -> bool {
        parent.fill(None);
        let mut visited = vec![false; graph.node_count()];
        visited[source.index()] = true;

        let mut order = Vec::new();
        let mut queue = VecDeque::from([source]);
        while let Some(u) = queue.pop_front() {
            let edges = graph.outgoing(u);
            order.clear();
            order.extend(0..edges.len());
            order.shuffle(&mut self.rng);

            for &pos in &order {
                let e = &edges[pos];
                let to = e.to();
                if visited[to.index()] || !e.has_capacity() {
                    continue;
                }
                visited[to.index()] = true;
                parent[to.index()] = Some((u, pos));
                if to == sink {
                    return true;
                }
                queue.push_back(to);
            }
        }
        false
    }
}
