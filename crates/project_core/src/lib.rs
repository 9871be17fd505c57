//! Core domain logic for the project tracker.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::project::{
    Project, ProjectId, ProjectStatus, ProjectUpdate, ProjectValidationError,
    MAX_DESCRIPTION_CHARS, MAX_NAME_CHARS,
};
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository, RepoError, RepoResult};
pub use service::project_service::{
    CreateProjectRequest, ProjectService, ServiceError, ServiceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
