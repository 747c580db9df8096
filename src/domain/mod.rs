// Domain layer module exports
// Domain is independent of storage and transport concerns

pub mod repositories;
pub mod student;
