use crate::model::professor::ProfessorId;
use std::fmt;

/// Placeholder for load assigned outside the input course list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SyntheticCourse(pub u32);

impl fmt::Display for SyntheticCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEW{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RepairAction {
    Assigned {
        professor: ProfessorId,
        course: SyntheticCourse,
    },
    Paired {
        first: ProfessorId,
        second: ProfessorId,
        course: SyntheticCourse,
    },
    /// No partner was left for this professor.
    Unsatisfiable { professor: ProfessorId },
}

impl RepairAction {
    pub fn course(&self) -> Option<SyntheticCourse> {
        match self {
            RepairAction::Assigned { course, .. } | RepairAction::Paired { course, .. } => {
                Some(*course)
            }
            RepairAction::Unsatisfiable { .. } => None,
        }
    }

    pub fn involves(&self, id: ProfessorId) -> bool {
        match *self {
            RepairAction::Assigned { professor, .. } => professor == id,
            RepairAction::Paired { first, second, .. } => first == id || second == id,
            RepairAction::Unsatisfiable { professor } => professor == id,
        }
    }
}
