//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record and its status lifecycle.
//! - Enforce text invariants at construction and on every update.
//!
//! # Invariants
//! - `id` is stable, non-nil and never reassigned.
//! - `name` and `description` are stored trimmed and are never blank.
//! - `created_at` is fixed at construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Maximum project name length, in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 200;
/// Maximum project description length, in characters, after trimming.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

/// Work state of a project.
///
/// Any status may be set from any other; there are no transition rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Not started yet.
    #[default]
    Planned,
    /// Work is underway.
    InProgress,
    /// Finished.
    Done,
}

impl ProjectStatus {
    /// Wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "PLANNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for project fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilId,
    EmptyName,
    EmptyDescription,
    NameTooLong { chars: usize },
    DescriptionTooLong { chars: usize },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "Project id cannot be nil"),
            Self::EmptyName => write!(f, "Project name cannot be empty"),
            Self::EmptyDescription => write!(f, "Project description cannot be empty"),
            Self::NameTooLong { chars } => write!(
                f,
                "Project name is {chars} characters; maximum is {MAX_NAME_CHARS}"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "Project description is {chars} characters; maximum is {MAX_DESCRIPTION_CHARS}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}

/// Partial change set for [`Project::update`].
///
/// `None` fields are left untouched. Doubles as the `PUT` request body, so
/// absent JSON keys deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProjectRecord")]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
}

/// Unchecked wire shape; converted through validation on deserialize.
#[derive(Deserialize)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    description: String,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = ProjectValidationError;

    fn try_from(record: ProjectRecord) -> Result<Self, Self::Error> {
        Project::with_id(
            record.id,
            record.name,
            record.description,
            record.status,
            record.created_at,
        )
    }
}

impl Project {
    /// Creates a project with a generated ID and the current time.
    ///
    /// # Errors
    /// - Returns a validation error when name or description is blank or too
    ///   long. No project is produced in that case.
    pub fn new(
        name: impl AsRef<str>,
        description: impl AsRef<str>,
        status: ProjectStatus,
    ) -> Result<Self, ProjectValidationError> {
        Self::with_id(Uuid::new_v4(), name, description, status, Utc::now())
    }

    /// Creates a project with caller-provided identity and creation time.
    ///
    /// Used by import paths and tests that need deterministic ordering.
    pub fn with_id(
        id: ProjectId,
        name: impl AsRef<str>,
        description: impl AsRef<str>,
        status: ProjectStatus,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ProjectValidationError> {
        if id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        let name = normalize_name(name.as_ref())?;
        let description = normalize_description(description.as_ref())?;

        Ok(Self {
            id,
            name,
            description,
            status,
            created_at,
        })
    }

    /// Applies the provided fields of `changes`.
    ///
    /// All provided fields are validated before any is applied, so a failing
    /// update leaves the project exactly as it was.
    pub fn update(&mut self, changes: ProjectUpdate) -> Result<(), ProjectValidationError> {
        let name = changes.name.as_deref().map(normalize_name).transpose()?;
        let description = changes
            .description
            .as_deref()
            .map(normalize_description)
            .transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        Ok(())
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

fn normalize_name(value: &str) -> Result<String, ProjectValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProjectValidationError::EmptyName);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_NAME_CHARS {
        return Err(ProjectValidationError::NameTooLong { chars });
    }
    Ok(trimmed.to_string())
}

fn normalize_description(value: &str) -> Result<String, ProjectValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProjectValidationError::EmptyDescription);
    }
    let chars = trimmed.chars().count();
    if chars > MAX_DESCRIPTION_CHARS {
        return Err(ProjectValidationError::DescriptionTooLong { chars });
    }
    Ok(trimmed.to_string())
}
