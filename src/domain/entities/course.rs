//! Course entity and repository trait.
//!
//! Maps to the `courses` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a course in the catalog.
///
/// Maps to the `courses` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - name: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier (primary key)
    pub id: i64,

    /// Course name (1-100 characters)
    pub name: String,
}

/// Equality filter applied to course listings.
///
/// Each field restricts the result set to exact matches; fields left as
/// `None` do not constrain the listing.
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Repository trait for Course data access operations.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// List courses matching the filter, in insertion order.
    async fn find_all(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError>;

    /// Persist a new course and return it with its assigned identifier.
    async fn create(&self, name: &str) -> Result<Course, AppError>;

    /// Update an existing course.
    async fn update(&self, course: &Course) -> Result<Course, AppError>;

    /// Delete a course by identifier.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Count stored courses.
    async fn count(&self) -> Result<i64, AppError>;
}
