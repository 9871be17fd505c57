//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own field validation so no invalid project can be constructed.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Deletion is a hard removal from the store; there are no tombstones.

pub mod project;
