//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into wall-level operations.
//! - Enforce soft-delete rules before anything reaches storage.

pub mod wall_service;
