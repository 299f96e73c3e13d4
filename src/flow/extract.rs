use crate::model::professor::{CourseId, Professor, ProfessorId, SLOT_LOAD};
use crate::network::builder::Network;
use std::collections::BTreeMap;

pub type CourseAssignments = BTreeMap<CourseId, Vec<ProfessorId>>;
pub type UtilizedSlots = BTreeMap<ProfessorId, usize>;

/// For every course that carries flow, the professor owning the first slot
/// the course sends flow into. Courses without flow are absent.
pub fn course_assignments(network: &Network) -> CourseAssignments {
    let graph = network.graph();
    network
        .courses()
        .iter()
        .filter_map(|&(course, node)| {
            graph
                .outgoing(node)
                .iter()
                .filter(|e| !e.is_reverse())
                .find_map(|e| {
                    let owner = network.slot_owner(e.to())?;
                    graph.reverse(e).has_capacity().then_some(owner)
                })
                .map(|prof| (course, vec![prof]))
        })
        .collect()
}

/// Slots whose edge into the sink is saturated, per professor.
pub fn utilized_slots(network: &Network, professors: &[Professor]) -> UtilizedSlots {
    let graph = network.graph();
    professors
        .iter()
        .map(|prof| {
            let count = prof
                .slots()
                .iter()
                .filter(|slot| {
                    graph
                        .outgoing(**slot)
                        .iter()
                        .find(|e| e.to() == network.sink() && !e.is_reverse())
                        .is_some_and(|e| graph.reverse(e).capacity() == SLOT_LOAD)
                })
                .count();
            (prof.id(), count)
        })
        .collect()
}
