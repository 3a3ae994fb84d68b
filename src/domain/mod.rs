//! Domain Layer
//!
//! Core entities and the repository traits the infrastructure implements.

pub mod entities;

pub use entities::{Course, CourseFilter, CourseRepository, Student, StudentFilter, StudentRepository};
