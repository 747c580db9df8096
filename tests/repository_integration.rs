//! Integration tests for the JSON file repository
//!
//! These tests verify that the flat-file repository reads and writes real
//! files, falls back to an empty collection on missing or corrupt storage,
//! and serves the HTTP API end to end.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use students_api::api::{router, AppState};
use students_api::domain::repositories::StudentRepository;
use students_api::domain::student::{Module, Student, StudentDraft};
use students_api::infrastructure::repositories::JsonFileStudentRepository;
use tempfile::TempDir;
use tower::util::ServiceExt; // for oneshot

/// Repository over `Students.json` inside a fresh temporary directory
fn setup_repo() -> (TempDir, JsonFileStudentRepository) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let repo = JsonFileStudentRepository::new(dir.path().join("Students.json"));
    (dir, repo)
}

fn student(id: u64, nom: &str, notes: &[f64]) -> Student {
    Student::new(
        id,
        StudentDraft {
            nom: nom.to_string(),
            classe: "A".to_string(),
            modules: notes
                .iter()
                .enumerate()
                .map(|(i, n)| Module::new(format!("Module {}", i), *n))
                .collect(),
        },
    )
}

#[tokio::test]
async fn test_missing_file_reads_as_empty() {
    let (_dir, repo) = setup_repo();

    assert!(repo.read_all().await.is_empty());
}

#[tokio::test]
async fn test_corrupt_file_reads_as_empty() {
    let (_dir, repo) = setup_repo();
    std::fs::write(repo.path(), "{ not json").unwrap();

    assert!(repo.read_all().await.is_empty());
}

#[tokio::test]
async fn test_wrong_shape_reads_as_empty() {
    let (_dir, repo) = setup_repo();
    std::fs::write(repo.path(), r#"{"id": 1}"#).unwrap();

    assert!(repo.read_all().await.is_empty());
}

#[tokio::test]
async fn test_write_then_read_keeps_order() {
    let (_dir, repo) = setup_repo();
    let students = vec![student(3, "Ali", &[10.0, 16.0]), student(1, "Sara", &[17.0])];

    repo.write_all(&students).await.unwrap();

    assert_eq!(repo.read_all().await, students);
}

#[tokio::test]
async fn test_write_replaces_previous_content() {
    let (_dir, repo) = setup_repo();
    repo.write_all(&[student(0, "Ali", &[10.0]), student(1, "Sara", &[12.0])])
        .await
        .unwrap();

    repo.write_all(&[student(1, "Sara", &[12.0])]).await.unwrap();

    let stored = repo.read_all().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nom(), "Sara");
}

#[tokio::test]
async fn test_write_leaves_no_temporary_file() {
    let (dir, repo) = setup_repo();

    repo.write_all(&[student(0, "Ali", &[10.0])]).await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("Students.json")]);
}

#[tokio::test]
async fn test_file_holds_plain_student_array() {
    let (_dir, repo) = setup_repo();

    repo.write_all(&[student(0, "Ali", &[10.0, 16.0])]).await.unwrap();

    let raw: Value = serde_json::from_slice(&std::fs::read(repo.path()).unwrap()).unwrap();
    assert_eq!(raw[0]["id"], 0);
    assert_eq!(raw[0]["nom"], "Ali");
    assert_eq!(raw[0]["classe"], "A");
    assert_eq!(raw[0]["modules"][1]["module"], "Module 1");
    assert_eq!(raw[0]["moyenne"].as_f64(), Some(13.0));
}

#[tokio::test]
async fn test_reads_hand_written_file() {
    let (_dir, repo) = setup_repo();
    std::fs::write(
        repo.path(),
        r#"[{"id":1,"nom":"Ali","classe":"A","modules":[{"module":"Math","note":10},{"module":"Phys","note":16}],"moyenne":13}]"#,
    )
    .unwrap();

    let stored = repo.read_all().await;

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), 1);
    assert_eq!(stored[0].modules()[1], Module::new("Phys", 16.0));
    assert_eq!(stored[0].moyenne(), Some(13.0));
}

#[tokio::test]
async fn test_reads_file_with_text_notes() {
    let (_dir, repo) = setup_repo();
    std::fs::write(
        repo.path(),
        r#"[{"id":1,"nom":"Ali","classe":"A","modules":[{"module":"Math","note":"12"}],"moyenne":12},{"id":2,"nom":"Sara","classe":"B","modules":[{"module":"Phys","note":15}],"moyenne":15}]"#,
    )
    .unwrap();

    let stored = repo.read_all().await;

    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].modules()[0], Module::new("Math", 12.0));
    assert_eq!(stored[1].id(), 2);
}

#[tokio::test]
async fn test_create_keeps_records_with_text_notes() {
    let (_dir, repo) = setup_repo();
    std::fs::write(
        repo.path(),
        r#"[{"id":1,"nom":"Ali","classe":"A","modules":[{"module":"Math","note":"12"}],"moyenne":12},{"id":2,"nom":"Sara","classe":"B","modules":[{"module":"Phys","note":15}],"moyenne":15}]"#,
    )
    .unwrap();
    let path = repo.path().to_path_buf();
    let app = router(AppState::new(Arc::new(repo)));

    let payload = json!({ "nom": "Omar", "classe": "C", "modules": [{ "module": "Bio", "note": 9 }] });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/students")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let stored = JsonFileStudentRepository::new(path).read_all().await;
    let ids: Vec<u64> = stored.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(stored[0].modules()[0].note, 12.0);
}

#[tokio::test]
async fn test_failed_rename_removes_temporary_file() {
    let (dir, repo) = setup_repo();
    // A directory in place of the storage file makes the rename fail
    std::fs::create_dir(repo.path()).unwrap();

    assert!(repo.write_all(&[student(0, "Ali", &[10.0])]).await.is_err());
    assert!(!dir.path().join("Students.json.tmp").exists());
}

#[tokio::test]
async fn test_write_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileStudentRepository::new(dir.path().join("missing").join("Students.json"));

    assert!(repo.write_all(&[student(0, "Ali", &[10.0])]).await.is_err());
}

#[tokio::test]
async fn test_api_persists_to_file() {
    let (_dir, repo) = setup_repo();
    let path = repo.path().to_path_buf();
    let app = router(AppState::new(Arc::new(repo)));

    let payload = json!({
        "nom": "Ali",
        "classe": "A",
        "modules": [{ "module": "Math", "note": 10 }, { "module": "Phys", "note": 16 }]
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/students")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // A fresh repository over the same file sees the record
    let reopened = JsonFileStudentRepository::new(path);
    let stored = reopened.read_all().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), 0);
    assert_eq!(stored[0].moyenne(), Some(13.0));
}

#[tokio::test]
async fn test_api_reports_write_failure() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileStudentRepository::new(dir.path().join("missing").join("Students.json"));
    let app = router(AppState::new(Arc::new(repo)));

    let payload = json!({ "nom": "Ali", "classe": "A", "modules": [] });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/students")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
