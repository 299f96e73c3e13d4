use crate::model::professor::{CourseId, ProfessorId, SLOT_LOAD};
use crate::state::report::Report;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoadStatus {
    Satisfied,
    Under,
    Over,
    /// the repair pass found no partner
    Unresolved,
}

pub struct ProfessorSummary {
    id: ProfessorId,
    min_load: f64,
    max_load: f64,
    flow_load: f64,
    final_load: f64,
    courses: Vec<CourseId>,
    new_courses: usize,
    status: LoadStatus,
}

impl ProfessorSummary {
    pub fn id(&self) -> ProfessorId {
        self.id
    }

    pub fn min_load(&self) -> f64 {
        self.min_load
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    /// Load carried by saturated slots after the flow.
    pub fn flow_load(&self) -> f64 {
        self.flow_load
    }

    /// Load after repair.
    pub fn final_load(&self) -> f64 {
        self.final_load
    }

    pub fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    pub fn new_courses(&self) -> usize {
        self.new_courses
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }
}

pub fn summarize(report: &Report) -> Vec<ProfessorSummary> {
    let actions = report.repair().actions();
    report
        .professors()
        .iter()
        .map(|prof| {
            let id = prof.id();
            let flow_parts = report.utilized().get(&id).copied().unwrap_or(0);
            let final_parts = report.repair().counts().get(&id).copied().unwrap_or(0);
            let involved = actions.iter().filter(|a| a.involves(id));
            let unresolved = involved.clone().any(|a| a.course().is_none());

            let status = if unresolved {
                LoadStatus::Unresolved
            } else if final_parts < prof.min_parts() {
                LoadStatus::Under
            } else if final_parts > prof.max_parts() {
                LoadStatus::Over
            } else {
                LoadStatus::Satisfied
            };

            ProfessorSummary {
                id,
                min_load: prof.min_load(),
                max_load: prof.max_load(),
                flow_load: flow_parts as f64 * SLOT_LOAD,
                final_load: final_parts as f64 * SLOT_LOAD,
                courses: report
                    .assignments()
                    .iter()
                    .filter(|(_, profs)| profs.contains(&id))
                    .map(|(course, _)| *course)
                    .collect(),
                new_courses: involved.filter(|a| a.course().is_some()).count(),
                status,
            }
        })
        .collect()
}
