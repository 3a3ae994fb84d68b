//! Repository Implementations
//!
//! SQLite implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **CourseRepository** - Course catalog CRUD and equality filtering
//! - **StudentRepository** - Student roster CRUD

pub mod course_repository;
pub mod student_repository;

pub use course_repository::SqliteCourseRepository;
pub use student_repository::SqliteStudentRepository;
