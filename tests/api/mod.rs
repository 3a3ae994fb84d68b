//! REST API Tests

pub mod health_tests;
pub mod student_tests;
