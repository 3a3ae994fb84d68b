//! Student Service
//!
//! Handles student roster operations.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Student, StudentFilter, StudentRepository};
use crate::shared::error::AppError;

/// Student service trait
#[async_trait]
pub trait StudentService: Send + Sync {
    /// List students, optionally restricted by equality filters
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<StudentDto>, StudentError>;

    /// Get student by ID
    async fn get_student(&self, student_id: i64) -> Result<StudentDto, StudentError>;

    /// Create a new student
    async fn create_student(&self, request: CreateStudentDto) -> Result<StudentDto, StudentError>;

    /// Partially update a student
    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentDto,
    ) -> Result<StudentDto, StudentError>;

    /// Delete a student
    async fn delete_student(&self, student_id: i64) -> Result<(), StudentError>;
}

/// Create student request
#[derive(Debug, Clone)]
pub struct CreateStudentDto {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

/// Partial student update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Student data transfer object
#[derive(Debug, Clone)]
pub struct StudentDto {
    pub id: i64,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            birth_date: student.birth_date,
        }
    }
}

/// Student service errors
#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("Student not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for StudentError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::NotFound(_) => StudentError::NotFound,
            e => StudentError::Internal(e.to_string()),
        }
    }
}

/// StudentService implementation
pub struct StudentServiceImpl<R>
where
    R: StudentRepository,
{
    student_repo: Arc<R>,
}

impl<R> StudentServiceImpl<R>
where
    R: StudentRepository,
{
    pub fn new(student_repo: Arc<R>) -> Self {
        Self { student_repo }
    }
}

#[async_trait]
impl<R> StudentService for StudentServiceImpl<R>
where
    R: StudentRepository,
{
    async fn list_students(&self, filter: StudentFilter) -> Result<Vec<StudentDto>, StudentError> {
        let students = self.student_repo.find_all(&filter).await?;
        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    async fn get_student(&self, student_id: i64) -> Result<StudentDto, StudentError> {
        let student = self
            .student_repo
            .find_by_id(student_id)
            .await?
            .ok_or(StudentError::NotFound)?;

        Ok(StudentDto::from(student))
    }

    async fn create_student(&self, request: CreateStudentDto) -> Result<StudentDto, StudentError> {
        let student = self
            .student_repo
            .create(&request.name, request.birth_date)
            .await?;

        tracing::debug!(student_id = student.id, "Student created");

        Ok(StudentDto::from(student))
    }

    async fn update_student(
        &self,
        student_id: i64,
        update: UpdateStudentDto,
    ) -> Result<StudentDto, StudentError> {
        let mut student = self
            .student_repo
            .find_by_id(student_id)
            .await?
            .ok_or(StudentError::NotFound)?;

        // Apply only the supplied fields
        if let Some(name) = update.name {
            student.name = name;
        }
        if let Some(birth_date) = update.birth_date {
            student.birth_date = Some(birth_date);
        }

        let student = self.student_repo.update(&student).await?;

        Ok(StudentDto::from(student))
    }

    async fn delete_student(&self, student_id: i64) -> Result<(), StudentError> {
        self.student_repo.delete(student_id).await?;

        tracing::debug!(student_id, "Student deleted");

        Ok(())
    }
}
