use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::extractors::StudentId;
use crate::api::state::AppState;
use crate::domain::student::{next_id, validate_student, Student};

/// List every student
///
/// GET /api/students
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.repository().read_all().await;
    tracing::debug!(count = students.len(), "Listing students");

    Json(students)
}

/// Get a student by ID
///
/// GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    student_id: StudentId,
) -> Result<Json<Student>, ApiError> {
    let students = state.repository().read_all().await;
    let student = student_id
        .value
        .and_then(|id| students.into_iter().find(|s| s.id() == id))
        .ok_or_else(|| ApiError::student_not_found(&student_id.raw))?;

    Ok(Json(student))
}

/// Create a new student
///
/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(body) = body?;
    let draft = validate_student(&body)?;

    let _guard = state.lock_writes().await;
    let mut students = state.repository().read_all().await;

    let student = Student::new(next_id(&students), draft);
    students.push(student.clone());
    state.repository().write_all(&students).await?;

    tracing::info!(student_id = student.id(), nom = %student.nom(), "Student created");
    Ok(Json(student))
}

/// Replace a student's fields, keeping its ID
///
/// PUT /api/students/:id
pub async fn update_student(
    State(state): State<AppState>,
    student_id: StudentId,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(body) = body?;
    let draft = validate_student(&body)?;

    let _guard = state.lock_writes().await;
    let mut students = state.repository().read_all().await;

    let student = student_id
        .value
        .and_then(|id| students.iter_mut().find(|s| s.id() == id))
        .ok_or_else(|| ApiError::student_not_found(&student_id.raw))?;
    student.replace(draft);
    let updated = student.clone();

    state.repository().write_all(&students).await?;

    tracing::info!(student_id = updated.id(), "Student updated");
    Ok(Json(updated))
}

/// Delete a student
///
/// DELETE /api/students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    student_id: StudentId,
) -> Result<String, ApiError> {
    let _guard = state.lock_writes().await;
    let mut students = state.repository().read_all().await;

    let index = student_id
        .value
        .and_then(|id| students.iter().position(|s| s.id() == id))
        .ok_or_else(|| ApiError::student_not_found(&student_id.raw))?;
    let removed = students.remove(index);

    state.repository().write_all(&students).await?;

    tracing::info!(student_id = removed.id(), "Student deleted");
    Ok(format!(
        "L'étudiant avec l'ID {} a été supprimé.",
        student_id.raw
    ))
}
