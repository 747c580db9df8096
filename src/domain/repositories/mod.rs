// Repository contracts implemented by the infrastructure layer

pub mod student_repository;

pub use student_repository::{StoreError, StudentRepository};
