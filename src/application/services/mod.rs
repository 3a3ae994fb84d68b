//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CourseService**: Course catalog CRUD and listing filters
//! - **StudentService**: Student CRUD

pub mod course_service;
pub mod student_service;

// Re-export course service types
pub use course_service::{
    CourseDto, CourseError, CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};

// Re-export student service types
pub use student_service::{
    CreateStudentDto, StudentDto, StudentError, StudentService, StudentServiceImpl,
    UpdateStudentDto,
};
