//! Student Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::application::dto::response::StudentResponse;
use crate::application::services::{
    CreateStudentDto, StudentError, StudentService, StudentServiceImpl, UpdateStudentDto,
};
use crate::domain::StudentFilter;
use crate::infrastructure::repositories::SqliteStudentRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn student_service(state: &AppState) -> StudentServiceImpl<SqliteStudentRepository> {
    let student_repo = Arc::new(SqliteStudentRepository::new(state.db.clone()));
    StudentServiceImpl::new(student_repo)
}

fn parse_student_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid student ID".into()))
}

/// List students, honoring optional `id` / `name` equality filters
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<StudentQueryParams>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let filter = StudentFilter {
        id: params.id,
        name: params.name,
    };

    let students = student_service(&state)
        .list_students(filter)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let responses: Vec<StudentResponse> = students.into_iter().map(StudentResponse::from).collect();

    Ok(Json(responses))
}

/// Get student by ID
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentResponse>, AppError> {
    let student_id = parse_student_id(&student_id)?;

    let student = student_service(&state)
        .get_student(student_id)
        .await
        .map_err(|e| match e {
            StudentError::NotFound => AppError::NotFound("Student not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(StudentResponse::from(student)))
}

/// Create a new student
pub async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = body
        .name
        .ok_or_else(|| AppError::Validation("name is required".into()))?;

    let student = student_service(&state)
        .create_student(CreateStudentDto {
            name,
            birth_date: body.birth_date,
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(StudentResponse::from(student))))
}

/// Partially update a student
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(body): Json<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>, AppError> {
    let student_id = parse_student_id(&student_id)?;

    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = UpdateStudentDto {
        name: body.name,
        birth_date: body.birth_date,
    };

    let student = student_service(&state)
        .update_student(student_id, update)
        .await
        .map_err(|e| match e {
            StudentError::NotFound => AppError::NotFound("Student not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(StudentResponse::from(student)))
}

/// Delete a student
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let student_id = parse_student_id(&student_id)?;

    student_service(&state)
        .delete_student(student_id)
        .await
        .map_err(|e| match e {
            StudentError::NotFound => AppError::NotFound("Student not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
