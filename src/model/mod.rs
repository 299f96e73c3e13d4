pub mod professor;
