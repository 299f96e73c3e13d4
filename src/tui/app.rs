use crate::simulation::engine::AssignmentEngine;
use rand::rngs::StdRng;

pub enum SortMode {
    Id,
    Load,
    Status,
}

impl SortMode {
    pub fn next(&self) -> Self {
        match self {
            SortMode::Id => SortMode::Load,
            SortMode::Load => SortMode::Status,
            SortMode::Status => SortMode::Id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Id => "id",
            SortMode::Load => "load",
            SortMode::Status => "status",
        }
    }
}

pub struct App {
    pub engine: AssignmentEngine<StdRng>,
    pub sort_mode: SortMode,
}

impl App {
    pub fn new(engine: AssignmentEngine<StdRng>) -> Self {
        Self {
            engine,
            sort_mode: SortMode::Id,
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
