use crate::flow::extract::UtilizedSlots;
use crate::model::professor::{Professor, ProfessorId};
use crate::repair::action::{RepairAction, SyntheticCourse};
use log::{debug, warn};
use std::mem;

/// Slots making up one whole course.
const WHOLE_COURSE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadKind {
    /// min = max = 1
    Full,
    /// min = 1, max = 1.5
    Flexible,
    /// min = max = 0.5
    Half,
    Other,
}

impl LoadKind {
    pub fn of(prof: &Professor) -> Self {
        match (prof.min_parts(), prof.max_parts()) {
            (2, 2) => LoadKind::Full,
            (2, 3) => LoadKind::Flexible,
            (1, 1) => LoadKind::Half,
            _ => LoadKind::Other,
        }
    }
}

/// Professors waiting for a partner. Each pool is a stack: partners of last
/// resort are taken from the end.
#[derive(Debug, Default, PartialEq)]
pub struct Buckets {
    full: Vec<ProfessorId>,
    flexible: Vec<ProfessorId>,
    half: Vec<ProfessorId>,
}

/// Counts and actions threaded through the repair stages.
#[derive(Clone, Debug, PartialEq)]
pub struct RepairOutcome {
    counts: UtilizedSlots,
    actions: Vec<RepairAction>,
    next_course: u32,
}

impl RepairOutcome {
    fn new(counts: UtilizedSlots) -> Self {
        Self {
            counts,
            actions: Vec::new(),
            next_course: 1,
        }
    }

    pub fn counts(&self) -> &UtilizedSlots {
        &self.counts
    }

    pub fn actions(&self) -> &[RepairAction] {
        &self.actions
    }

    pub fn unsatisfiable(&self) -> impl Iterator<Item = ProfessorId> + '_ {
        self.actions.iter().filter_map(|a| match a {
            RepairAction::Unsatisfiable { professor } => Some(*professor),
            _ => None,
        })
    }

    fn count(&self, id: ProfessorId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    fn take_course(&mut self) -> SyntheticCourse {
        let course = SyntheticCourse(self.next_course);
        self.next_course += 1;
        course
    }

    fn add(&mut self, id: ProfessorId, parts: usize) {
        *self.counts.entry(id).or_insert(0) += parts;
    }

    fn assign(mut self, professor: ProfessorId, parts: usize) -> Self {
        let course = self.take_course();
        self.add(professor, parts);
        debug!("professor {} takes new course {}", professor, course);
        self.actions.push(RepairAction::Assigned { professor, course });
        self
    }

    fn pair(mut self, first: ProfessorId, second: ProfessorId) -> Self {
        let course = self.take_course();
        self.add(first, 1);
        self.add(second, 1);
        debug!("professors {} and {} share new course {}", first, second, course);
        self.actions.push(RepairAction::Paired {
            first,
            second,
            course,
        });
        self
    }

    fn give_up(mut self, professor: ProfessorId) -> Self {
        warn!("load constraints cannot be satisfied for professor {}", professor);
        self.actions.push(RepairAction::Unsatisfiable { professor });
        self
    }
}

/// Completes the partial loads the flow left behind, running the stages
/// below in order. Synthetic course numbers are shared by all stages.
pub fn repair(counts: &UtilizedSlots, professors: &[Professor]) -> RepairOutcome {
    let outcome = RepairOutcome::new(counts.clone());
    let (outcome, buckets) = classify(outcome, professors);
    let (outcome, buckets) = pair_half_load(outcome, buckets);
    let (outcome, buckets) = pair_full_load(outcome, buckets);
    complete_flexible(outcome, buckets)
}

/// Sorts professors into pools. Full-load professors with nothing assigned
/// get a whole new course on the spot.
pub fn classify(mut outcome: RepairOutcome, professors: &[Professor]) -> (RepairOutcome, Buckets) {
    let mut buckets = Buckets::default();
    for prof in professors {
        let id = prof.id();
        let used = outcome.count(id);
        match (LoadKind::of(prof), used) {
            (LoadKind::Full, 1) => buckets.full.push(id),
            (LoadKind::Full, 0) => outcome = outcome.assign(id, WHOLE_COURSE),
            (LoadKind::Flexible, 0..=2) => buckets.flexible.push(id),
            (LoadKind::Half, 0) => buckets.half.push(id),
            (LoadKind::Other, _) => {
                warn!(
                    "professor {} (min {}, max {}) fits no repair bucket",
                    id,
                    prof.min_load(),
                    prof.max_load()
                );
            }
            _ => {}
        }
    }
    (outcome, buckets)
}

pub fn pair_half_load(outcome: RepairOutcome, mut buckets: Buckets) -> (RepairOutcome, Buckets) {
    let half = mem::take(&mut buckets.half);
    let outcome = pair_pool(
        outcome,
        &half,
        &mut [&mut buckets.full, &mut buckets.flexible],
    );
    (outcome, buckets)
}

pub fn pair_full_load(outcome: RepairOutcome, mut buckets: Buckets) -> (RepairOutcome, Buckets) {
    let full = mem::take(&mut buckets.full);
    let outcome = pair_pool(outcome, &full, &mut [&mut buckets.flexible]);
    (outcome, buckets)
}

pub fn complete_flexible(mut outcome: RepairOutcome, buckets: Buckets) -> RepairOutcome {
    for id in buckets.flexible {
        if outcome.count(id) <= 1 {
            outcome = outcome.assign(id, WHOLE_COURSE);
        }
    }
    outcome
}

/// Pairs `pool` two at a time. An odd leftover pairs with the top of the
/// first non-empty partner stack.
fn pair_pool(
    mut outcome: RepairOutcome,
    pool: &[ProfessorId],
    partners: &mut [&mut Vec<ProfessorId>],
) -> RepairOutcome {
    for chunk in pool.chunks(2) {
        outcome = match *chunk {
            [first, second] => outcome.pair(first, second),
            [single] => match partners.iter_mut().find_map(|stack| stack.pop()) {
                Some(partner) => outcome.pair(single, partner),
                None => outcome.give_up(single),
            },
            _ => outcome,
        };
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prof(id: ProfessorId, max: f64, min: f64) -> Professor {
        Professor::new(id, max, min, vec![]).unwrap()
    }

    fn counts(pairs: &[(ProfessorId, usize)]) -> UtilizedSlots {
        pairs.iter().copied().collect()
    }

    fn paired(first: ProfessorId, second: ProfessorId, course: u32) -> RepairAction {
        RepairAction::Paired {
            first,
            second,
            course: SyntheticCourse(course),
        }
    }

    fn assigned(professor: ProfessorId, course: u32) -> RepairAction {
        RepairAction::Assigned {
            professor,
            course: SyntheticCourse(course),
        }
    }

    #[test]
    fn test_two_half_load_professors_share_a_course() {
        let profs = vec![prof(1, 0.5, 0.5), prof(2, 0.5, 0.5)];
        let outcome = repair(&counts(&[(1, 0), (2, 0)]), &profs);

        assert_eq!(&[paired(1, 2, 1)], outcome.actions());
        assert_eq!(&counts(&[(1, 1), (2, 1)]), outcome.counts());
    }

    #[test]
    fn test_satisfied_input_emits_nothing() {
        let profs = vec![
            prof(1, 1.0, 1.0),
            prof(2, 1.5, 1.0),
            prof(3, 0.5, 0.5),
            prof(4, 1.5, 1.0),
        ];
        let before = counts(&[(1, 2), (2, 2), (3, 1), (4, 2)]);
        let outcome = repair(&before, &profs);

        assert!(outcome.actions().is_empty());
        assert_eq!(&before, outcome.counts());
    }

    #[test]
    fn test_idle_full_load_professor_gets_course_first() {
        let profs = vec![prof(1, 0.5, 0.5), prof(2, 0.5, 0.5), prof(3, 1.0, 1.0)];
        let outcome = repair(&counts(&[(1, 0), (2, 0), (3, 0)]), &profs);

        assert_eq!(&[assigned(3, 1), paired(1, 2, 2)], outcome.actions());
        assert_eq!(Some(&2), outcome.counts().get(&3));
    }

    #[test]
    fn test_odd_half_load_takes_latest_full_load_partner() {
        let profs = vec![
            prof(3, 1.0, 1.0),
            prof(4, 1.0, 1.0),
            prof(5, 1.0, 1.0),
            prof(1, 0.5, 0.5),
        ];
        let outcome = repair(&counts(&[(1, 0), (3, 1), (4, 1), (5, 1)]), &profs);

        assert_eq!(&[paired(1, 5, 1), paired(3, 4, 2)], outcome.actions());
        assert_eq!(&counts(&[(1, 1), (3, 2), (4, 2), (5, 2)]), outcome.counts());
    }

    #[test]
    fn test_falls_back_to_flexible_pool() {
        let profs = vec![
            prof(1, 0.5, 0.5),
            prof(2, 1.5, 1.0),
            prof(3, 1.5, 1.0),
            prof(4, 1.0, 1.0),
        ];
        let outcome = repair(&counts(&[(1, 0), (2, 1), (3, 0), (4, 1)]), &profs);

        // half-load 1 takes full-load 4, nothing left for step two, then the
        // flexible pool is completed in order
        assert_eq!(
            &[paired(1, 4, 1), assigned(2, 2), assigned(3, 3)],
            outcome.actions()
        );
        assert_eq!(&counts(&[(1, 1), (2, 3), (3, 2), (4, 2)]), outcome.counts());
    }

    #[test]
    fn test_leftover_full_load_pairs_with_flexible() {
        let profs = vec![prof(1, 1.0, 1.0), prof(2, 1.5, 1.0), prof(3, 1.5, 1.0)];
        let outcome = repair(&counts(&[(1, 1), (2, 1), (3, 2)]), &profs);

        assert_eq!(&[paired(1, 3, 1), assigned(2, 2)], outcome.actions());
        assert_eq!(&counts(&[(1, 2), (2, 3), (3, 3)]), outcome.counts());
    }

    #[test]
    fn test_unsatisfiable_is_reported_and_processing_continues() {
        let profs = vec![prof(1, 0.5, 0.5), prof(2, 1.0, 1.0), prof(3, 1.0, 1.0), prof(4, 1.0, 1.0)];
        let outcome = repair(&counts(&[(1, 0), (2, 1), (3, 1), (4, 1)]), &profs);
        assert_eq!(&[paired(1, 4, 1), paired(2, 3, 2)], outcome.actions());

        let profs = vec![prof(1, 0.5, 0.5), prof(2, 1.0, 1.0)];
        let outcome = repair(&counts(&[(1, 0), (2, 0)]), &profs);
        assert_eq!(
            &[
                assigned(2, 1),
                RepairAction::Unsatisfiable { professor: 1 }
            ],
            outcome.actions()
        );
        assert_eq!(vec![1], outcome.unsatisfiable().collect::<Vec<_>>());
        assert_eq!(Some(&0), outcome.counts().get(&1));

        let profs = vec![prof(1, 1.0, 1.0), prof(2, 1.0, 1.0), prof(3, 1.0, 1.0)];
        let outcome = repair(&counts(&[(1, 1), (2, 1), (3, 1)]), &profs);
        assert_eq!(
            &[paired(1, 2, 1), RepairAction::Unsatisfiable { professor: 3 }],
            outcome.actions()
        );
    }

    #[test]
    fn test_professors_outside_buckets_are_left_alone() {
        let profs = vec![prof(1, 2.0, 1.0), prof(2, 1.0, 0.5), prof(3, 0.5, 0.0)];
        let outcome = repair(&counts(&[(1, 0), (2, 0), (3, 0)]), &profs);

        assert!(outcome.actions().is_empty());
        assert_eq!(LoadKind::Other, LoadKind::of(&profs[0]));
    }

    #[test]
    fn test_stages_compose() {
        let profs = vec![prof(1, 0.5, 0.5), prof(2, 0.5, 0.5), prof(3, 0.5, 0.5)];
        let (outcome, buckets) = classify(
            RepairOutcome::new(counts(&[(1, 0), (2, 0), (3, 0)])),
            &profs,
        );
        assert!(outcome.actions().is_empty());
        assert_eq!(vec![1, 2, 3], buckets.half);

        let (outcome, buckets) = pair_half_load(outcome, buckets);
        assert_eq!(Buckets::default(), buckets);
        assert_eq!(
            &[paired(1, 2, 1), RepairAction::Unsatisfiable { professor: 3 }],
            outcome.actions()
        );
    }
}
