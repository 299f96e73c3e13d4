use crate::flow::extract::{CourseAssignments, UtilizedSlots};
use crate::model::professor::Professor;
use crate::repair::action::RepairAction;
use crate::repair::repair::RepairOutcome;
use std::fmt;

/// Everything one successful run produced.
pub struct Report {
    run: usize,
    max_flow: f64,
    course_count: usize,
    professors: Vec<Professor>,
    assignments: CourseAssignments,
    utilized: UtilizedSlots,
    repair: RepairOutcome,
}

impl Report {
    pub fn new(
        run: usize,
        max_flow: f64,
        course_count: usize,
        professors: Vec<Professor>,
        assignments: CourseAssignments,
        utilized: UtilizedSlots,
        repair: RepairOutcome,
    ) -> Self {
        Self {
            run,
            max_flow,
            course_count,
            professors,
            assignments,
            utilized,
            repair,
        }
    }

    pub fn run(&self) -> usize {
        self.run
    }

    pub fn max_flow(&self) -> f64 {
        self.max_flow
    }

    pub fn course_count(&self) -> usize {
        self.course_count
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn assignments(&self) -> &CourseAssignments {
        &self.assignments
    }

    /// Slot counts straight out of the flow, before repair.
    pub fn utilized(&self) -> &UtilizedSlots {
        &self.utilized
    }

    pub fn repair(&self) -> &RepairOutcome {
        &self.repair
    }
}

pub fn describe_action(action: &RepairAction) -> String {
    match action {
        RepairAction::Assigned { professor, course } => {
            format!("Professor ID {} is assigned a new course {}", professor, course)
        }
        RepairAction::Paired {
            first,
            second,
            course,
        } => format!(
            "Professors ID {} and {} are both assigned a new course {}",
            first, second, course
        ),
        RepairAction::Unsatisfiable { professor } => format!(
            "Constraints could not be satisfied for professor ID {}",
            professor
        ),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run {}", self.run)?;
        writeln!(f, "Maximum Flow: {}", self.max_flow)?;
        for (id, parts) in &self.utilized {
            writeln!(f, "Professor ID: {} - Utilized Parts: {}", id, parts)?;
        }
        writeln!(f, "Course to Professor Mapping:")?;
        for (course, profs) in &self.assignments {
            let ids = profs.iter().map(|p| p.to_string()).collect::<Vec<_>>();
            writeln!(f, "Course {} assigned to Professor(s): {}", course, ids.join(" "))?;
        }
        for action in self.repair.actions() {
            writeln!(f, "{}", describe_action(action))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repair::action::SyntheticCourse;
    use crate::repair::repair::repair;

    #[test]
    fn test_plain_rendering() {
        let profs = vec![
            Professor::new(1, 0.5, 0.5, vec![1]).unwrap(),
            Professor::new(2, 0.5, 0.5, vec![]).unwrap(),
            Professor::new(3, 0.5, 0.5, vec![]).unwrap(),
        ];
        let utilized: UtilizedSlots = [(1, 1), (2, 0), (3, 0)].into_iter().collect();
        let assignments: CourseAssignments = [(1, vec![1])].into_iter().collect();
        let outcome = repair(&utilized, &profs);
        let report = Report::new(4, 0.5, 1, profs, assignments, utilized, outcome);

        let text = report.to_string();
        assert!(text.contains("Maximum Flow: 0.5"));
        assert!(text.contains("Professor ID: 1 - Utilized Parts: 1"));
        assert!(text.contains("Course 1 assigned to Professor(s): 1"));
        assert!(text.contains("Professors ID 2 and 3 are both assigned a new course NEW1"));
    }

    #[test]
    fn test_action_wording() {
        assert_eq!(
            "Professor ID 7 is assigned a new course NEW3",
            describe_action(&RepairAction::Assigned {
                professor: 7,
                course: SyntheticCourse(3)
            })
        );
        assert_eq!(
            "Constraints could not be satisfied for professor ID 2",
            describe_action(&RepairAction::Unsatisfiable { professor: 2 })
        );
    }
}
