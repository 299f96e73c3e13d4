use crate::flow::extract::{course_assignments, utilized_slots};
use crate::flow::solver::MaxFlowSolver;
use crate::model::professor::{CourseId, Professor};
use crate::network::builder::{BuildError, Network};
use crate::repair::repair::repair;
use crate::scenario::scenario::{RecordError, RecordSource};
use crate::state::report::Report;
use log::{debug, info, warn};
use rand::Rng;
use std::mem;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("maximum flow {max_flow} cannot cover {course_count} courses")]
    InfeasibleFlow { max_flow: f64, course_count: usize },

    #[error(transparent)]
    Records(#[from] RecordError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

pub type RunResult = Result<Report, ScenarioError>;

/// One full pass on a fresh graph: build, solve, check coverage, extract,
/// repair.
pub fn run_scenario<R: Rng>(
    run: usize,
    courses: &[CourseId],
    mut professors: Vec<Professor>,
    solver: &mut MaxFlowSolver<R>,
) -> RunResult {
    let mut network = Network::build(courses, &mut professors)?;
    let (source, sink) = (network.source(), network.sink());
    let max_flow = solver.solve(network.graph_mut(), source, sink);
    debug!(
        "source emits {}, sink receives {}",
        network.graph().outflow(source),
        network.graph().inflow(sink)
    );

    if max_flow < courses.len() as f64 {
        return Err(ScenarioError::InfeasibleFlow {
            max_flow,
            course_count: courses.len(),
        });
    }

    let assignments = course_assignments(&network);
    let utilized = utilized_slots(&network, &professors);
    let outcome = repair(&utilized, &professors);

    Ok(Report::new(
        run,
        max_flow,
        courses.len(),
        professors,
        assignments,
        utilized,
        outcome,
    ))
}

/// Re-reads the records and re-solves on every step, keeping the last two
/// results around.
pub struct AssignmentEngine<R: Rng> {
    source: Box<dyn RecordSource>,
    solver: MaxFlowSolver<R>,
    runs: usize,
    previous: Option<RunResult>,
    current: Option<RunResult>,
}

impl<R: Rng> AssignmentEngine<R> {
    pub fn new(source: Box<dyn RecordSource>, solver: MaxFlowSolver<R>) -> Self {
        Self {
            source,
            solver,
            runs: 0,
            previous: None,
            current: None,
        }
    }

    pub fn source(&self) -> &dyn RecordSource {
        self.source.as_ref()
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn step(&mut self) {
        self.runs += 1;
        let run = self.runs;

        let result = self
            .source
            .professors()
            .map_err(ScenarioError::from)
            .and_then(|profs| run_scenario(run, self.source.courses(), profs, &mut self.solver));

        match &result {
            Ok(report) => info!(
                "run {}: flow {} over {} courses, {} repair actions, {} unresolved",
                report.run(),
                report.max_flow(),
                report.course_count(),
                report.repair().actions().len(),
                report.repair().unsatisfiable().count()
            ),
            Err(e) => warn!("run {} aborted: {}", run, e),
        }

        let old = mem::replace(&mut self.current, Some(result));
        self.previous = old;
    }

    pub fn current(&self) -> Option<&RunResult> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&RunResult> {
        self.previous.as_ref()
    }
}
