use crate::model::professor::{CourseId, LoadError, Professor, ProfessorId};
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: professor {id} is listed more than once")]
    DuplicateId { line: usize, id: ProfessorId },

    #[error("line {line}: {source}")]
    InvalidLoad {
        line: usize,
        #[source]
        source: LoadError,
    },
}

/// Where a run's input comes from. Professors are fetched anew for every
/// run so each run starts from untouched records.
pub trait RecordSource {
    fn name(&self) -> &str;
    fn courses(&self) -> &[CourseId];
    fn professors(&self) -> Result<Vec<Professor>, RecordError>;
}

/// Course list of the stock data set.
pub fn default_courses() -> Vec<CourseId> {
    (1..=25).collect()
}
