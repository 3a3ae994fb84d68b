//! Student API Tests
//!
//! End-to-end coverage of the `/students/` resource.

use axum::http::StatusCode;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

use students_api::application::dto::response::StudentResponse;

use crate::common::{seed_students, TestApp};

/// Retrieving a student by their identifier echoes that identifier
#[tokio::test]
async fn test_get_a_student() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 10).await;
    let id = students[0].id;

    // Act
    let response = app.server.get(&format!("/students/{}/", id)).await;

    // Assert
    response.assert_status(StatusCode::OK);
    let data: StudentResponse = response.json();
    assert_eq!(data.id, id);
}

/// Listing returns every stored student in insertion order
#[tokio::test]
async fn test_get_students() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 10).await;

    // Act
    let response = app.server.get("/students/").await;

    // Assert
    response.assert_status(StatusCode::OK);
    let data: Vec<StudentResponse> = response.json();
    assert_eq!(data.len(), students.len());
    for (value, student) in data.iter().zip(&students) {
        assert_eq!(value.id, student.id);
        assert_eq!(value.name, student.name);
        assert_eq!(value.birth_date, student.birth_date);
    }
}

/// `?name=` filtering returns exactly the students with that name
#[tokio::test]
async fn test_filter_students_by_name() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 10).await;
    let name = students[0].name.clone();

    // Act
    let response = app
        .server
        .get("/students/")
        .add_query_param("name", &name)
        .await;

    // Assert
    response.assert_status(StatusCode::OK);
    let data: Vec<StudentResponse> = response.json();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].name, name);
}

/// Creating a student echoes the submitted fields and the assigned id
#[tokio::test]
async fn test_create_student() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/students/")
        .json(&json!({ "name": "Ivan Petrov", "birth_date": "2001-09-01" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let data: StudentResponse = response.json();
    assert_eq!(data.name, "Ivan Petrov");
    assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(2001, 9, 1));
}

/// Creating without a name is a validation failure
#[tokio::test]
async fn test_create_student_without_name_fails() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/students/")
        .json(&json!({ "birth_date": "2001-09-01" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// Patching the name leaves the birth date untouched
#[tokio::test]
async fn test_patch_student_name_only() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 3).await;
    let student = &students[0];

    // Act
    let response = app
        .server
        .patch(&format!("/students/{}/", student.id))
        .json(&json!({ "name": "Renamed Student" }))
        .await;

    // Assert
    response.assert_status(StatusCode::OK);
    let data: StudentResponse = response.json();
    assert_eq!(data.name, "Renamed Student");
    assert_eq!(data.birth_date, student.birth_date);
}

/// Patching the birth date leaves the name untouched
#[tokio::test]
async fn test_patch_student_birth_date_only() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 3).await;
    let student = &students[0];

    // Act
    let response = app
        .server
        .patch(&format!("/students/{}/", student.id))
        .json(&json!({ "birth_date": "1999-12-31" }))
        .await;

    // Assert
    response.assert_status(StatusCode::OK);
    let data: StudentResponse = response.json();
    assert_eq!(data.name, student.name);
    assert_eq!(data.birth_date, NaiveDate::from_ymd_opt(1999, 12, 31));
}

/// Deleting a student returns 204 and the identifier stops resolving
#[tokio::test]
async fn test_delete_student() {
    // Arrange
    let app = TestApp::new().await;
    let students = seed_students(&app.db, 10).await;
    let id = students[0].id;

    // Act
    let response = app.server.delete(&format!("/students/{}/", id)).await;

    // Assert
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.text(), "");

    let response = app.server.get(&format!("/students/{}/", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Unknown identifiers yield Not-Found on retrieve, update, and delete
#[tokio::test]
async fn test_unknown_student_id_is_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/students/9999/").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = app
        .server
        .patch("/students/9999/")
        .json(&json!({ "name": "Ghost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = app.server.delete("/students/9999/").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// A non-integer identifier segment is a bad request
#[tokio::test]
async fn test_non_integer_student_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.server.get("/students/abc/").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
