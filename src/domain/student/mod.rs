// Student domain module
// Contains the student record, module scores, body validation and reports

#![allow(clippy::module_inception)]

pub mod reports;
pub mod student;
pub mod validation;
pub mod value_objects;

// Re-export main types for convenience
pub use student::{average, next_id, Student};
pub use validation::{validate_student, StudentDraft, ValidationError};
pub use value_objects::Module;
