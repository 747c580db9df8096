//! Student Records API Library
//!
//! CRUD service over student records kept in a flat JSON file, with
//! best/worst module and global average reports.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
