use crate::model::professor::{CourseId, Professor};
use crate::scenario::scenario::{RecordError, RecordSource};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Professors read from `id,maxLoad,minLoad,course,course,...` lines.
pub struct CsvSource {
    name: String,
    path: PathBuf,
    courses: Vec<CourseId>,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>, courses: Vec<CourseId>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            courses,
        }
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    fn professors(&self) -> Result<Vec<Professor>, RecordError> {
        let text = fs::read_to_string(&self.path).map_err(|source| RecordError::Io {
            path: self.name.clone(),
            source,
        })?;
        parse_professors(&text)
    }
}

/// Parses every non-blank line; the first bad line fails the whole input.
pub fn parse_professors(text: &str) -> Result<Vec<Professor>, RecordError> {
    let mut seen = HashSet::new();
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            let prof = parse_line(line_no, line)?;
            if !seen.insert(prof.id()) {
                return Err(RecordError::DuplicateId {
                    line: line_no,
                    id: prof.id(),
                });
            }
            Ok(prof)
        })
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<Professor, RecordError> {
    let mut fields = text.trim_end_matches(',').split(',').map(str::trim);

    let id = field(line, &mut fields, "id")?;
    let max_load = field(line, &mut fields, "max load")?;
    let min_load = field(line, &mut fields, "min load")?;
    let preferred = fields
        .map(|value| parse(line, "preferred course", value))
        .collect::<Result<Vec<CourseId>, _>>()?;

    Professor::new(id, max_load, min_load, preferred)
        .map_err(|source| RecordError::InvalidLoad { line, source })
}

fn field<'a, T: FromStr>(
    line: usize,
    fields: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<T, RecordError> {
    let value = fields
        .next()
        .filter(|v| !v.is_empty())
        .ok_or(RecordError::MissingField { line, field: name })?;
    parse(line, name, value)
}

fn parse<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
