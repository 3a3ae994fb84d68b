//! Domain Entities

pub mod course;
pub mod student;

pub use course::{Course, CourseFilter, CourseRepository};
pub use student::{Student, StudentFilter, StudentRepository};
