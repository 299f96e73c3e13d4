use crate::graph::graph::{Graph, GraphError};
use crate::graph::node::NodeId;
use crate::model::professor::{CourseId, Professor, ProfessorId, SLOT_LOAD};
use log::debug;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Flow one course puts into the network.
pub const COURSE_UNIT: f64 = 1.0;

#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("course {0} is listed more than once")]
    DuplicateCourse(CourseId),

    #[error("professor {professor} prefers unknown course {course}")]
    UnknownCourse { professor: ProfessorId, course: CourseId },

    #[error("professor {0} is listed more than once")]
    DuplicateProfessor(ProfessorId),

    #[error("network would need more nodes than can be addressed")]
    TooManyNodes,

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A built assignment network. Layout: source, one node per course in input
/// order, each professor's slots in professor order, sink.
pub struct Network {
    graph: Graph,
    source: NodeId,
    sink: NodeId,
    courses: Vec<(CourseId, NodeId)>,
    slot_owner: Vec<Option<ProfessorId>>,
}

impl Network {
    pub fn node_count(courses: &[CourseId], professors: &[Professor]) -> Option<usize> {
        professors
            .iter()
            .try_fold(courses.len().checked_add(2)?, |n, p| n.checked_add(p.slot_count()))
    }

    /// Builds a fresh graph for one scenario and repopulates every
    /// professor's slot list.
    pub fn build(courses: &[CourseId], professors: &mut [Professor]) -> Result<Self, BuildError> {
        let node_count = Self::node_count(courses, professors).ok_or(BuildError::TooManyNodes)?;
        let mut graph = Graph::new(node_count);
        let source = NodeId(0);
        let sink = NodeId(node_count - 1);
        let mut slot_owner = vec![None; node_count];

        let mut course_nodes = HashMap::with_capacity(courses.len());
        let mut next = 1usize;
        for &course in courses {
            let node = NodeId(next);
            if course_nodes.insert(course, node).is_some() {
                return Err(BuildError::DuplicateCourse(course));
            }
            graph.add_edge(source, node, COURSE_UNIT)?;
            next += 1;
        }

        let mut seen = HashSet::with_capacity(professors.len());
        for prof in professors.iter_mut() {
            let id = prof.id();
            if !seen.insert(id) {
                return Err(BuildError::DuplicateProfessor(id));
            }
            let slot_count = prof.slot_count();
            let slots = prof.slots_mut();
            slots.clear();
            for _ in 0..slot_count {
                let slot = NodeId(next);
                graph.add_edge(slot, sink, SLOT_LOAD)?;
                slots.push(slot);
                slot_owner[next] = Some(id);
                next += 1;
            }

            for &course in prof.preferred_courses() {
                let course_node = *course_nodes
                    .get(&course)
                    .ok_or(BuildError::UnknownCourse { professor: id, course })?;
                for &slot in prof.slots() {
                    graph.add_edge(course_node, slot, SLOT_LOAD)?;
                }
            }
        }

        debug!(
            "built network: {} nodes, {} edge halves, {} courses, {} professors",
            graph.node_count(),
            graph.edge_count(),
            courses.len(),
            professors.len()
        );

        Ok(Self {
            graph,
            source,
            sink,
            courses: courses.iter().map(|c| (*c, course_nodes[c])).collect(),
            slot_owner,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// Courses with their nodes, in input order.
    pub fn courses(&self) -> &[(CourseId, NodeId)] {
        &self.courses
    }

    pub fn slot_owner(&self, node: NodeId) -> Option<ProfessorId> {
        self.slot_owner.get(node.index()).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn targets(network: &Network, node: usize) -> Vec<(usize, f64)> {
        network
            .graph()
            .outgoing(NodeId(node))
            .iter()
            .filter(|e| !e.is_reverse())
            .map(|e| (e.to().index(), e.capacity()))
            .collect()
    }

    #[test]
    fn test_layout_for_single_full_load_professor() {
        let mut profs = vec![Professor::new(1, 1.0, 1.0, vec![1, 2]).unwrap()];
        let network = Network::build(&[1, 2], &mut profs).unwrap();

        // source, 2 courses, 2 slots, sink
        assert_eq!(6, network.graph().node_count());
        assert_eq!(NodeId(5), network.sink());
        assert_eq!(&[NodeId(3), NodeId(4)], profs[0].slots());

        assert_eq!(vec![(1, 1.0), (2, 1.0)], targets(&network, 0));
        assert_eq!(vec![(3, 0.5), (4, 0.5)], targets(&network, 1));
        assert_eq!(vec![(3, 0.5), (4, 0.5)], targets(&network, 2));
        assert_eq!(vec![(5, 0.5)], targets(&network, 3));
        assert_eq!(vec![(5, 0.5)], targets(&network, 4));

        assert_eq!(Some(1), network.slot_owner(NodeId(3)));
        assert_eq!(None, network.slot_owner(NodeId(1)));
    }

    #[test]
    fn test_rebuild_clears_slots() {
        let mut profs = vec![
            Professor::new(1, 0.5, 0.5, vec![1]).unwrap(),
            Professor::new(2, 1.5, 1.0, vec![1]).unwrap(),
        ];
        Network::build(&[1], &mut profs).unwrap();
        let network = Network::build(&[1], &mut profs).unwrap();

        assert_eq!(&[NodeId(2)], profs[0].slots());
        assert_eq!(&[NodeId(3), NodeId(4), NodeId(5)], profs[1].slots());
        assert_eq!(7, network.graph().node_count());

        let slot_capacity: f64 = (2..6)
            .flat_map(|n| targets(&network, n))
            .map(|(_, c)| c)
            .sum();
        assert_relative_eq!(2.0, slot_capacity);
    }

    #[test]
    fn test_course_ids_map_to_input_order() {
        let mut profs = vec![Professor::new(7, 0.5, 0.5, vec![30]).unwrap()];
        let network = Network::build(&[10, 30], &mut profs).unwrap();

        assert_eq!(&[(10, NodeId(1)), (30, NodeId(2))], network.courses());
        assert_eq!(vec![(3, 0.5)], targets(&network, 2));
        assert!(targets(&network, 1).is_empty());
    }

    #[test]
    fn test_node_count_counts_every_slot() {
        let profs = vec![Professor::new(1, 1.5, 1.0, vec![]).unwrap()];
        assert_eq!(Some(6), Network::node_count(&[1], &profs));
        assert_eq!(Some(2), Network::node_count(&[], &[]));
    }

    #[test]
    fn test_rejects_bad_course_lists() {
        let mut profs = vec![Professor::new(1, 1.0, 1.0, vec![3]).unwrap()];
        assert_eq!(
            Some(BuildError::UnknownCourse { professor: 1, course: 3 }),
            Network::build(&[1, 2], &mut profs).err()
        );
        let mut twice = vec![
            Professor::new(2, 0.5, 0.5, vec![1]).unwrap(),
            Professor::new(2, 1.0, 1.0, vec![2]).unwrap(),
        ];
        assert_eq!(
            Some(BuildError::DuplicateProfessor(2)),
            Network::build(&[1, 2], &mut twice).err()
        );
        assert_eq!(
            Some(BuildError::DuplicateCourse(1)),
            Network::build(&[1, 1], &mut []).err()
        );
    }
}
