//! Course Handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::application::dto::request::{
    CourseQueryParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::application::dto::response::CourseResponse;
use crate::application::services::{
    CourseError, CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};
use crate::domain::CourseFilter;
use crate::infrastructure::repositories::SqliteCourseRepository;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn course_service(state: &AppState) -> CourseServiceImpl<SqliteCourseRepository> {
    let course_repo = Arc::new(SqliteCourseRepository::new(state.db.clone()));
    CourseServiceImpl::new(course_repo)
}

fn parse_course_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest("Invalid course ID".into()))
}

/// List courses, honoring optional `id` / `name` equality filters
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<CourseQueryParams>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let filter = CourseFilter {
        id: params.id,
        name: params.name,
    };

    let courses = course_service(&state)
        .list_courses(filter)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let responses: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();

    Ok(Json(responses))
}

/// Get course by ID
pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    let course = course_service(&state)
        .get_course(course_id)
        .await
        .map_err(|e| match e {
            CourseError::NotFound => AppError::NotFound("Course not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(CourseResponse::from(course)))
}

/// Create a new course
pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), AppError> {
    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = body
        .name
        .ok_or_else(|| AppError::Validation("name is required".into()))?;

    let course = course_service(&state)
        .create_course(CreateCourseDto { name })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}

/// Partially update a course
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(body): Json<UpdateCourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    let course_id = parse_course_id(&course_id)?;

    // Validate request
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = UpdateCourseDto { name: body.name };

    let course = course_service(&state)
        .update_course(course_id, update)
        .await
        .map_err(|e| match e {
            CourseError::NotFound => AppError::NotFound("Course not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(CourseResponse::from(course)))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let course_id = parse_course_id(&course_id)?;

    course_service(&state)
        .delete_course(course_id)
        .await
        .map_err(|e| match e {
            CourseError::NotFound => AppError::NotFound("Course not found".into()),
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(StatusCode::NO_CONTENT)
}
