use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repositories::{StoreError, StudentRepository};
use crate::domain::student::Student;

/// Flat-file implementation of StudentRepository
///
/// Keeps the whole collection as one JSON array. Writes go to a sibling
/// `<file>.tmp` which is then renamed over the target, so a reader sees
/// either the previous or the new collection, never a partial one.
pub struct JsonFileStudentRepository {
    path: PathBuf,
}

impl JsonFileStudentRepository {
    /// Creates a repository backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the storage file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("students"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl StudentRepository for JsonFileStudentRepository {
    async fn read_all(&self) -> Vec<Student> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Storage file missing, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read storage file");
                return Vec::new();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Storage file is not a student array");
            Vec::new()
        })
    }

    async fn write_all(&self, students: &[Student]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(students)?;
        let temp = self.temp_path();

        tokio::fs::write(&temp, &bytes).await?;
        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = students.len(), "Student collection written");
        Ok(())
    }
}
