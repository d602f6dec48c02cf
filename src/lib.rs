pub mod config;
pub mod domain;
pub mod forms;
pub mod repository;
pub mod services;
pub mod storage;

/// Identifier of the fixed demo owner assigned to every record.
pub const DEMO_OWNER_ID: &str = "1";
