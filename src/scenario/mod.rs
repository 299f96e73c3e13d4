pub mod basic;
pub mod csv;
pub mod random;
pub mod scenario;
