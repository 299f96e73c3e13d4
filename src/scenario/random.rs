use crate::model::professor::{CourseId, Professor};
use crate::scenario::scenario::{RecordError, RecordSource};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// (max load, min load) of the three load kinds the department uses.
const LOAD_KINDS: [(f64, f64); 3] = [(1.0, 1.0), (1.5, 1.0), (0.5, 0.5)];

/// Generated department. The same seed always yields the same professors.
pub struct RandomSource {
    name: String,
    seed: u64,
    courses: Vec<CourseId>,
    professor_count: usize,
}

impl RandomSource {
    pub fn new(seed: u64, courses: Vec<CourseId>, professor_count: usize) -> Self {
        Self {
            name: format!("random-{}", seed),
            seed,
            courses,
            professor_count,
        }
    }
}

impl RecordSource for RandomSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn courses(&self) -> &[CourseId] {
        &self.courses
    }

    fn professors(&self) -> Result<Vec<Professor>, RecordError> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        (0..self.professor_count)
            .map(|i| {
                let (max, min) = LOAD_KINDS[rng.gen_range(0..LOAD_KINDS.len())];
                let wanted = rng.gen_range(1..=4).min(self.courses.len());
                let preferred = self
                    .courses
                    .choose_multiple(&mut rng, wanted)
                    .copied()
                    .collect();
                Professor::new(i as u32 + 1, max, min, preferred)
                    .map_err(|source| RecordError::InvalidLoad { line: i + 1, source })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_professors() {
        let a = RandomSource::new(3, (1..=12).collect(), 10);
        let b = RandomSource::new(3, (1..=12).collect(), 10);
        assert_eq!(a.professors().unwrap(), b.professors().unwrap());
        assert_eq!(a.professors().unwrap(), a.professors().unwrap());
    }

    #[test]
    fn test_preferences_reference_known_courses() {
        let source = RandomSource::new(11, vec![4, 8, 15], 20);
        let profs = source.professors().unwrap();

        assert_eq!(20, profs.len());
        for prof in &profs {
            assert!(!prof.preferred_courses().is_empty());
            assert!(prof.preferred_courses().len() <= 3);
            assert!(prof
                .preferred_courses()
                .iter()
                .all(|c| source.courses().contains(c)));
        }
    }
}
