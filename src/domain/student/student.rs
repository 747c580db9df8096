use serde::{Deserialize, Serialize};

use super::validation::StudentDraft;
use super::value_objects::Module;

/// Student record
///
/// Identifies a person, their class and the scores obtained per module.
///
/// # Invariants
/// - `id` never changes once the record exists
/// - `moyenne` is the mean of `modules[].note` as of the last write,
///   `None` when there are no modules
///
/// # Example
/// ```
/// use students_api::domain::student::{Module, Student, StudentDraft};
///
/// let draft = StudentDraft {
///     nom: "Ali".to_string(),
///     classe: "A".to_string(),
///     modules: vec![Module::new("Math", 10.0), Module::new("Phys", 16.0)],
/// };
/// let student = Student::new(0, draft);
///
/// assert_eq!(student.moyenne(), Some(13.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    id: u64,
    nom: String,
    classe: String,
    modules: Vec<Module>,
    moyenne: Option<f64>,
}

impl Student {
    /// Creates a student from a validated draft, deriving its average
    pub fn new(id: u64, draft: StudentDraft) -> Self {
        let moyenne = average(&draft.modules);
        Self {
            id,
            nom: draft.nom,
            classe: draft.classe,
            modules: draft.modules,
            moyenne,
        }
    }

    /// Replaces every field except the id and recomputes the average
    pub fn replace(&mut self, draft: StudentDraft) {
        *self = Self::new(self.id, draft);
    }

    // ===== Getters =====

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn nom(&self) -> &str {
        &self.nom
    }

    pub fn classe(&self) -> &str {
        &self.classe
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Returns the stored average, `None` for a student without modules
    pub fn moyenne(&self) -> Option<f64> {
        self.moyenne
    }
}

/// Returns the id to give the next student appended to `students`
///
/// The id follows the *last* element's id, not the maximum. An empty
/// collection yields `0`.
pub fn next_id(students: &[Student]) -> u64 {
    students.last().map_or(0, |last| last.id + 1)
}

/// Arithmetic mean of the module scores, `None` for an empty slice
pub fn average(modules: &[Module]) -> Option<f64> {
    if modules.is_empty() {
        return None;
    }

    let sum: f64 = modules.iter().map(|m| m.note).sum();
    Some(sum / modules.len() as f64)
}
