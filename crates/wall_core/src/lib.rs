//! Core domain logic for the wall store.
//! This crate is the single source of truth for wall invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, start_logging, LogConfig, LoggingError,
};
pub use model::record::{Comment, Note, Record, RecordId, RecordKind, UserId, UNASSIGNED_ID};
pub use model::user::User;
pub use repo::record_repo::{InMemoryRecordRepository, RecordListQuery, RecordRepository};
pub use service::wall_service::{DeletedTarget, WallError, WallResult, WallService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
