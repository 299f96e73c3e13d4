use crate::graph::node::NodeId;
use thiserror::Error;

pub type ProfessorId = u32;
pub type CourseId = u32;

/// Load carried by one slot node; loads are quantized in these units.
pub const SLOT_LOAD: f64 = 0.5;

/// Largest load a single professor may carry.
pub const MAX_LOAD: f64 = 64.0;

#[derive(Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("load {0} is not a non-negative multiple of 0.5")]
    NotAMultiple(f64),

    #[error("load {0} exceeds the limit of 64")]
    TooLarge(f64),

    #[error("minimum load {min} exceeds maximum load {max}")]
    MinAboveMax { min: f64, max: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Professor {
    id: ProfessorId,
    max_load: f64,
    min_load: f64,
    preferred_courses: Vec<CourseId>,
    /// one node per slot, filled in by the network builder
    slots: Vec<NodeId>,
}

impl Professor {
    pub fn new(
        id: ProfessorId,
        max_load: f64,
        min_load: f64,
        preferred_courses: Vec<CourseId>,
    ) -> Result<Self, LoadError> {
        for load in [max_load, min_load] {
            if !is_slot_multiple(load) {
                return Err(LoadError::NotAMultiple(load));
            }
            if load > MAX_LOAD {
                return Err(LoadError::TooLarge(load));
            }
        }
        if min_load > max_load {
            return Err(LoadError::MinAboveMax {
                min: min_load,
                max: max_load,
            });
        }
        Ok(Self {
            id,
            max_load,
            min_load,
            preferred_courses,
            slots: Vec::new(),
        })
    }

    pub fn id(&self) -> ProfessorId {
        self.id
    }

    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    pub fn min_load(&self) -> f64 {
        self.min_load
    }

    pub fn preferred_courses(&self) -> &[CourseId] {
        &self.preferred_courses
    }

    pub fn slot_count(&self) -> usize {
        (self.max_load / SLOT_LOAD).ceil() as usize
    }

    /// Minimum load expressed in slots.
    pub fn min_parts(&self) -> usize {
        (self.min_load / SLOT_LOAD).ceil() as usize
    }

    pub fn max_parts(&self) -> usize {
        self.slot_count()
    }

    pub fn slots(&self) -> &[NodeId] {
        &self.slots
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.slots
    }
}

fn is_slot_multiple(load: f64) -> bool {
    load.is_finite() && load >= 0.0 && (load / SLOT_LOAD).fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count_follows_max_load() {
        let p = Professor::new(1, 1.5, 1.0, vec![1, 2]).unwrap();
        assert_eq!(3, p.slot_count());
        assert_eq!(2, p.min_parts());
        assert!(p.slots().is_empty());

        let p = Professor::new(2, 0.0, 0.0, vec![]).unwrap();
        assert_eq!(0, p.slot_count());
    }

    #[test]
    fn test_rejects_invalid_loads() {
        assert_eq!(
            Err(LoadError::NotAMultiple(0.7)),
            Professor::new(1, 0.7, 0.5, vec![])
        );
        assert_eq!(
            Err(LoadError::NotAMultiple(-0.5)),
            Professor::new(1, 1.0, -0.5, vec![])
        );
        assert!(matches!(
            Professor::new(1, f64::NAN, 0.5, vec![]),
            Err(LoadError::NotAMultiple(_))
        ));
        assert_eq!(
            Err(LoadError::TooLarge(1e20)),
            Professor::new(1, 1e20, 1.0, vec![])
        );
        assert!(Professor::new(1, MAX_LOAD, 1.0, vec![]).is_ok());
        assert_eq!(
            Err(LoadError::MinAboveMax { min: 1.5, max: 1.0 }),
            Professor::new(1, 1.0, 1.5, vec![])
        );
    }
}
