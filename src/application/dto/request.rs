//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Create course request.
///
/// `name` is optional at the serde level so that an absent field reaches the
/// handler and is reported as a validation failure (400) rather than being
/// rejected during body extraction.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
}

/// Partial course update request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
}

/// Course list query parameters (exact-match filters)
#[derive(Debug, Default, Deserialize)]
pub struct CourseQueryParams {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// Create student request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub birth_date: Option<NaiveDate>,
}

/// Partial student update request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    pub birth_date: Option<NaiveDate>,
}

/// Student list query parameters (exact-match filters)
#[derive(Debug, Default, Deserialize)]
pub struct StudentQueryParams {
    pub id: Option<i64>,
    pub name: Option<String>,
}
