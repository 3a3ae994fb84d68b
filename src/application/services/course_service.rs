//! Course Service
//!
//! Handles course catalog operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Course, CourseFilter, CourseRepository};
use crate::shared::error::AppError;

/// Course service trait
#[async_trait]
pub trait CourseService: Send + Sync {
    /// List courses, optionally restricted by equality filters
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<CourseDto>, CourseError>;

    /// Get course by ID
    async fn get_course(&self, course_id: i64) -> Result<CourseDto, CourseError>;

    /// Create a new course
    async fn create_course(&self, request: CreateCourseDto) -> Result<CourseDto, CourseError>;

    /// Partially update a course
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseDto,
    ) -> Result<CourseDto, CourseError>;

    /// Delete a course
    async fn delete_course(&self, course_id: i64) -> Result<(), CourseError>;
}

/// Create course request
#[derive(Debug, Clone)]
pub struct CreateCourseDto {
    pub name: String,
}

/// Partial course update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
}

/// Course data transfer object
#[derive(Debug, Clone)]
pub struct CourseDto {
    pub id: i64,
    pub name: String,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
        }
    }
}

/// Course service errors
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Course not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for CourseError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::NotFound(_) => CourseError::NotFound,
            e => CourseError::Internal(e.to_string()),
        }
    }
}

/// CourseService implementation
pub struct CourseServiceImpl<R>
where
    R: CourseRepository,
{
    course_repo: Arc<R>,
}

impl<R> CourseServiceImpl<R>
where
    R: CourseRepository,
{
    pub fn new(course_repo: Arc<R>) -> Self {
        Self { course_repo }
    }
}

#[async_trait]
impl<R> CourseService for CourseServiceImpl<R>
where
    R: CourseRepository,
{
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<CourseDto>, CourseError> {
        let courses = self.course_repo.find_all(&filter).await?;
        Ok(courses.into_iter().map(CourseDto::from).collect())
    }

    async fn get_course(&self, course_id: i64) -> Result<CourseDto, CourseError> {
        let course = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)?;

        Ok(CourseDto::from(course))
    }

    async fn create_course(&self, request: CreateCourseDto) -> Result<CourseDto, CourseError> {
        let course = self.course_repo.create(&request.name).await?;

        tracing::debug!(course_id = course.id, "Course created");

        Ok(CourseDto::from(course))
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseDto,
    ) -> Result<CourseDto, CourseError> {
        let mut course = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound)?;

        // Apply only the supplied fields
        if let Some(name) = update.name {
            course.name = name;
        }

        let course = self.course_repo.update(&course).await?;

        Ok(CourseDto::from(course))
    }

    async fn delete_course(&self, course_id: i64) -> Result<(), CourseError> {
        self.course_repo.delete(course_id).await?;

        tracing::debug!(course_id, "Course deleted");

        Ok(())
    }
}
