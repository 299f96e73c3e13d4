pub mod action;
pub mod repair;
