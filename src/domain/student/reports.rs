use serde::Serialize;

use super::student::Student;
use super::value_objects::Module;

/// Best and worst module of one student
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleExtremes {
    pub id: u64,
    pub nom: String,
    pub meilleur_module: Option<String>,
    pub pire_module: Option<String>,
}

impl From<&Student> for ModuleExtremes {
    fn from(student: &Student) -> Self {
        let modules = student.modules();
        Self {
            id: student.id(),
            nom: student.nom().to_string(),
            meilleur_module: pick(modules, |current, best| current.note > best.note),
            pire_module: pick(modules, |current, worst| current.note < worst.note),
        }
    }
}

/// Keeps the first module and swaps only when `better` holds strictly,
/// so ties resolve to the earliest entry.
fn pick(modules: &[Module], better: impl Fn(&Module, &Module) -> bool) -> Option<String> {
    let (first, rest) = modules.split_first()?;
    let chosen = rest
        .iter()
        .fold(first, |kept, current| if better(current, kept) { current } else { kept });
    Some(chosen.module.clone())
}

/// Best/worst module for every student, in storage order
pub fn best_and_worst_modules(students: &[Student]) -> Vec<ModuleExtremes> {
    students.iter().map(ModuleExtremes::from).collect()
}

/// Mean of the students' averages
///
/// Every student counts; one without an average contributes `0`.
/// Returns `NaN` for an empty collection.
pub fn global_average(students: &[Student]) -> f64 {
    let sum: f64 = students.iter().map(|s| s.moyenne().unwrap_or(0.0)).sum();
    sum / students.len() as f64
}
