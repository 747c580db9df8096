use async_trait::async_trait;
use thiserror::Error;

use crate::domain::student::Student;

/// Errors raised while persisting the student collection
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Repository trait for the student collection
///
/// The collection is always handled whole: loaded in full at the start of a
/// request and rewritten in full after a mutation.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Load every student, in storage order
    ///
    /// Unreadable or missing storage yields an empty collection.
    async fn read_all(&self) -> Vec<Student>;

    /// Replace the stored collection with `students`
    async fn write_all(&self, students: &[Student]) -> Result<(), StoreError>;
}
