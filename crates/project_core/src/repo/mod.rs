//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the persistence contract consumed by use-case services.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repositories are pure stores: validation belongs to the model.
//! - Missing ids are `Ok(None)` on lookup and `NotFound` on delete.

pub mod project_repo;
