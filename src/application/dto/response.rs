//! Response DTOs
//!
//! Data structures for API response bodies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::services::{CourseDto, StudentDto};

/// Course response
///
/// `Deserialize` is derived so the integration suite can read bodies back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
}

impl From<CourseDto> for CourseResponse {
    fn from(dto: CourseDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

/// Student response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

impl From<StudentDto> for StudentResponse {
    fn from(dto: StudentDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            birth_date: dto.birth_date,
        }
    }
}
