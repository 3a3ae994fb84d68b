//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    routing::{delete, get, patch},
    Router,
};

use super::handlers;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(course_routes())
        .merge(student_routes())
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .with_state(state)
}

/// Course routes
///
/// Trailing slashes are part of the published contract.
fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses/",
            get(handlers::course::list_courses).post(handlers::course::create_course),
        )
        .route("/courses/{course_id}/", get(handlers::course::get_course))
        .route("/courses/{course_id}/", patch(handlers::course::update_course))
        .route("/courses/{course_id}/", delete(handlers::course::delete_course))
}

/// Student routes
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students/",
            get(handlers::student::list_students).post(handlers::student::create_student),
        )
        .route("/students/{student_id}/", get(handlers::student::get_student))
        .route("/students/{student_id}/", patch(handlers::student::update_student))
        .route("/students/{student_id}/", delete(handlers::student::delete_student))
}
