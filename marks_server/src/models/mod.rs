//! Student marks data models.

pub mod student;
