//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the storage contract the wall service is written against.
//! - Keep collection and id-counter details out of business orchestration.
//!
//! # Invariants
//! - Repositories store what they are given; wall rules live in the service.

pub mod record_repo;
