pub mod extract;
pub mod solver;
