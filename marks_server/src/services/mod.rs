//! Business logic between the route handlers and the student store.

pub mod student_service;
