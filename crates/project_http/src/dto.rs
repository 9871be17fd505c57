//! Wire shapes for the projects API.

use chrono::SecondsFormat;
use project_core::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Externally serialized project.
///
/// `createdAt` is RFC 3339 in UTC with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: String,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            description: project.description().to_string(),
            status: project.status(),
            created_at: project
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self::from(&project)
    }
}

/// `POST /projects` body. Presence of text fields is checked by the handler
/// so a missing field gets the "required" message instead of a serde error.
/// `PUT` bodies deserialize straight into `project_core::ProjectUpdate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProjectBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
