use crate::model::professor::{CourseId, Professor};
use crate::scenario::scenario::{RecordError, RecordSource};

/// Small built-in department: ten courses, a mix of every load kind.
pub struct BasicSource {
    courses: Vec<CourseId>,
}

impl BasicSource {
    pub fn new() -> Self {
        Self {
            courses: (1..=10).collect(),
        }
    }
}

impl RecordSource for BasicSource {
    fn name(&self) -> &str {
        "basic"
    }

    fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    fn professors(&self) -> Result<Vec<Professor>, RecordError> {
        let rows: [(u32, f64, f64, &[CourseId]); 10] = [
            (1, 1.5, 1.0, &[1, 2, 3]),
            (2, 1.5, 1.0, &[2, 4, 6]),
            (3, 1.0, 1.0, &[1, 5]),
            (4, 1.0, 1.0, &[3, 7, 8]),
            (5, 1.0, 1.0, &[9, 10]),
            (6, 0.5, 0.5, &[4, 9]),
            (7, 0.5, 0.5, &[5, 6]),
            (8, 0.5, 0.5, &[7, 10]),
            (9, 1.5, 1.0, &[8, 9, 10]),
            (10, 1.5, 1.0, &[1, 6, 10]),
        ];
        rows.iter()
            .enumerate()
            .map(|(i, (id, max, min, prefs))| {
                Professor::new(*id, *max, *min, prefs.to_vec())
                    .map_err(|source| RecordError::InvalidLoad { line: i + 1, source })
            })
            .collect()
    }
}
