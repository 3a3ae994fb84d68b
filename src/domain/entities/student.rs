//! Student entity and repository trait.
//!
//! Maps to the `students` table in the database schema.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a student.
///
/// Maps to the `students` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - name: TEXT NOT NULL
/// - birth_date: TEXT NULL (ISO-8601 date)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identifier (primary key)
    pub id: i64,

    /// Student name (1-100 characters)
    pub name: String,

    /// Date of birth, if known
    pub birth_date: Option<NaiveDate>,
}

/// Equality filter applied to student listings.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Repository trait for Student data access operations.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find a student by their identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, AppError>;

    /// List students matching the filter, in insertion order.
    async fn find_all(&self, filter: &StudentFilter) -> Result<Vec<Student>, AppError>;

    /// Persist a new student and return them with their assigned identifier.
    async fn create(&self, name: &str, birth_date: Option<NaiveDate>) -> Result<Student, AppError>;

    /// Update an existing student.
    async fn update(&self, student: &Student) -> Result<Student, AppError>;

    /// Delete a student by identifier.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
