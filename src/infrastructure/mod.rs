// Infrastructure layer module
// Contains storage adapters for the domain repository contracts

pub mod repositories;
