//! Wall domain model.
//!
//! # Responsibility
//! - Define the record shapes stored by the wall and the users who own them.
//!
//! # Invariants
//! - Notes and comments share one id space.
//! - Deletion is represented by soft-delete tombstones, not hard delete.

pub mod record;
pub mod user;
