//! Project use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete entry points for core callers.
//! - Translate missing lookups into typed `NotFound` errors.
//!
//! # Invariants
//! - Service APIs never bypass model validation.
//! - Service layer remains storage-agnostic.
//! - Log lines carry ids and outcomes only, never project text.

use crate::model::project::{
    Project, ProjectId, ProjectStatus, ProjectUpdate, ProjectValidationError,
};
use crate::repo::project_repo::{ProjectRepository, RepoError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for project use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Provided fields violate project invariants.
    Validation(ProjectValidationError),
    /// Target project does not exist.
    NotFound(ProjectId),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Project with id '{id}' not found"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ProjectValidationError> for ServiceError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Request model for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    /// Defaults to `PLANNED` when absent.
    pub status: Option<ProjectStatus>,
}

/// Use-case service over an injected repository.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every project, newest first.
    pub fn list_projects(&self) -> ServiceResult<Vec<Project>> {
        let projects = self.repo.find_all()?;
        debug!(
            "event=project_list module=service status=ok count={}",
            projects.len()
        );
        Ok(projects)
    }

    /// Gets one project by ID.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no project has this ID.
    pub fn get_project(&self, id: ProjectId) -> ServiceResult<Project> {
        self.repo.find_by_id(id)?.ok_or_else(|| {
            debug!("event=project_get module=service status=not_found id={id}");
            ServiceError::NotFound(id)
        })
    }

    /// Validates and stores a new project.
    pub fn create_project(&self, request: CreateProjectRequest) -> ServiceResult<Project> {
        let status = request.status.unwrap_or_default();
        let project = Project::new(&request.name, &request.description, status).map_err(|err| {
            warn!("event=project_create module=service status=invalid reason=\"{err}\"");
            err
        })?;

        let saved = self.repo.save(&project)?;
        info!(
            "event=project_create module=service status=ok id={} project_status={}",
            saved.id(),
            saved.status()
        );
        Ok(saved)
    }

    /// Applies a partial update to an existing project.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no project has this ID.
    /// - `ServiceError::Validation` when a provided field is invalid; the
    ///   stored project is left unchanged.
    /// - `ServiceError::NotFound` also when the project is deleted between
    ///   the read and the write; the update does not bring it back.
    pub fn update_project(&self, id: ProjectId, changes: ProjectUpdate) -> ServiceResult<Project> {
        let mut project = self.get_project(id)?;
        project.update(changes).map_err(|err| {
            warn!("event=project_update module=service status=invalid id={id} reason=\"{err}\"");
            err
        })?;

        let saved = self.repo.update(&project)?;
        info!(
            "event=project_update module=service status=ok id={id} project_status={}",
            saved.status()
        );
        Ok(saved)
    }

    /// Deletes a project by ID.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no project has this ID.
    pub fn delete_project(&self, id: ProjectId) -> ServiceResult<()> {
        self.repo.delete(id)?;
        info!("event=project_delete module=service status=ok id={id}");
        Ok(())
    }
}
