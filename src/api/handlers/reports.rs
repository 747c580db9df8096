use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::domain::student::reports::{best_and_worst_modules, global_average, ModuleExtremes};

/// Best and worst module of every student
///
/// GET /students/best-worst-modules
pub async fn best_worst_modules(State(state): State<AppState>) -> Json<Vec<ModuleExtremes>> {
    let students = state.repository().read_all().await;

    Json(best_and_worst_modules(&students))
}

/// Mean of all students' averages, as a sentence
///
/// GET /students/average
pub async fn average(State(state): State<AppState>) -> String {
    let students = state.repository().read_all().await;
    let average = global_average(&students);

    format!("La moyenne de tous les étudiants est : {}", average)
}
