use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::repositories::{StoreError, StudentRepository};
use crate::domain::student::Student;

/// In-memory implementation of StudentRepository
///
/// Holds the collection behind a lock instead of a file. Used to exercise
/// handlers without touching the filesystem.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with `students`
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn read_all(&self) -> Vec<Student> {
        self.students.read().await.clone()
    }

    async fn write_all(&self, students: &[Student]) -> Result<(), StoreError> {
        *self.students.write().await = students.to_vec();
        Ok(())
    }
}
