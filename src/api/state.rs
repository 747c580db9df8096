use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::repositories::StudentRepository;

/// Shared state handed to every handler
///
/// Mutating handlers hold `write_lock` across their whole
/// read-modify-write so concurrent writers cannot overwrite each other.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn StudentRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn repository(&self) -> &dyn StudentRepository {
        self.repository.as_ref()
    }

    /// Waits for exclusive access to the collection for a mutation
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
