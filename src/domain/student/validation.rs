use serde_json::{Map, Value};
use thiserror::Error;

use super::value_objects::{parse_note_text, Module, MAX_NOTE, MIN_NOTE};

/// Top-level keys accepted in a student body, in checking order
const STUDENT_KEYS: [&str; 3] = ["nom", "classe", "modules"];

/// Keys accepted in each `modules[]` element, in checking order
const MODULE_KEYS: [&str; 2] = ["module", "note"];

/// Rejection of a request body, naming the first failing field
///
/// # Example
/// ```
/// use serde_json::json;
/// use students_api::domain::student::validation::validate_student;
///
/// let err = validate_student(&json!({ "classe": "A", "modules": [] })).unwrap_err();
/// assert_eq!(err.to_string(), "\"nom\" is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    fn new(label: &str, reason: &str) -> Self {
        Self(format!("\"{}\" {}", label, reason))
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Validated content of a create or update body
///
/// Carries every student field a client may set; the id and the
/// average are never client-supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub nom: String,
    pub classe: String,
    pub modules: Vec<Module>,
}

/// Checks a request body against the student schema
///
/// # Schema
/// - `nom`: required, non-empty string
/// - `classe`: required, non-empty string
/// - `modules`: required array of `{ module: non-empty string, note: number in [0, 20] }`
/// - no other keys, at either level
///
/// Numeric strings are accepted for `note` and converted. Checking stops at
/// the first violation.
pub fn validate_student(body: &Value) -> Result<StudentDraft, ValidationError> {
    let object = as_object(body, "value")?;

    let nom = string_field(object, "nom", "nom")?;
    let classe = string_field(object, "classe", "classe")?;
    let modules = modules_field(object)?;
    reject_unknown_keys(object, &STUDENT_KEYS, None)?;

    Ok(StudentDraft {
        nom,
        classe,
        modules,
    })
}

fn as_object<'a>(value: &'a Value, label: &str) -> Result<&'a Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::new(label, "must be of type object"))
}

fn required<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    label: &str,
) -> Result<&'a Value, ValidationError> {
    object
        .get(key)
        .ok_or_else(|| ValidationError::new(label, "is required"))
}

fn string_field(
    object: &Map<String, Value>,
    key: &str,
    label: &str,
) -> Result<String, ValidationError> {
    match required(object, key, label)? {
        Value::String(s) if s.is_empty() => {
            Err(ValidationError::new(label, "is not allowed to be empty"))
        }
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::new(label, "must be a string")),
    }
}

fn note_field(object: &Map<String, Value>, key: &str, label: &str) -> Result<f64, ValidationError> {
    let note = match required(object, key, label)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_note_text(s),
        _ => None,
    }
    .ok_or_else(|| ValidationError::new(label, "must be a number"))?;

    if note < MIN_NOTE {
        return Err(ValidationError::new(
            label,
            &format!("must be greater than or equal to {}", MIN_NOTE),
        ));
    }
    if note > MAX_NOTE {
        return Err(ValidationError::new(
            label,
            &format!("must be less than or equal to {}", MAX_NOTE),
        ));
    }

    Ok(note)
}

fn modules_field(object: &Map<String, Value>) -> Result<Vec<Module>, ValidationError> {
    let items = required(object, "modules", "modules")?
        .as_array()
        .ok_or_else(|| ValidationError::new("modules", "must be an array"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Module, ValidationError> {
            let label = format!("modules[{}]", index);
            let entry = as_object(item, &label)?;

            let module = string_field(entry, "module", &format!("{}.module", label))?;
            let note = note_field(entry, "note", &format!("{}.note", label))?;
            reject_unknown_keys(entry, &MODULE_KEYS, Some(&label))?;

            Ok(Module { module, note })
        })
        .collect()
}

fn reject_unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    parent: Option<&str>,
) -> Result<(), ValidationError> {
    match object.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => {
            let label = match parent {
                Some(parent) => format!("{}.{}", parent, key),
                None => key.clone(),
            };
            Err(ValidationError::new(&label, "is not allowed"))
        }
        None => Ok(()),
    }
}
