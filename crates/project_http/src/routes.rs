//! Project API handlers.
//!
//! # Responsibility
//! - Map HTTP requests onto `ProjectService` use-cases.
//! - Shape results as `ProjectDto` JSON and errors as `{"error": ...}`.
//!
//! # Invariants
//! - Handlers never panic on client input.
//! - An id that is not a UUID cannot exist and is answered with 404.

use crate::dto::{CreateProjectBody, HealthResponse, ProjectDto};
use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use project_core::{
    CreateProjectRequest, ProjectId, ProjectRepository, ProjectService, ProjectUpdate,
};
use std::sync::Arc;

type SharedService<R> = Arc<ProjectService<R>>;

/// Project routes relative to the API prefix.
pub fn project_routes<R: ProjectRepository + 'static>(service: SharedService<R>) -> Router {
    Router::new()
        .route("/projects", get(list_projects::<R>).post(create_project::<R>))
        .route(
            "/projects/:id",
            get(get_project::<R>)
                .put(update_project::<R>)
                .delete(delete_project::<R>),
        )
        .with_state(service)
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn list_projects<R: ProjectRepository + 'static>(
    State(service): State<SharedService<R>>,
) -> Result<Json<Vec<ProjectDto>>, ApiError> {
    let projects = service.list_projects()?;
    Ok(Json(projects.iter().map(ProjectDto::from).collect()))
}

async fn get_project<R: ProjectRepository + 'static>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<ProjectDto>, ApiError> {
    let id = parse_project_id(&raw_id)?;
    let project = service.get_project(id)?;
    Ok(Json(project.into()))
}

async fn create_project<R: ProjectRepository + 'static>(
    State(service): State<SharedService<R>>,
    body: Result<Json<CreateProjectBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ProjectDto>), ApiError> {
    let Json(body) = body?;
    let (Some(name), Some(description)) = (body.name, body.description) else {
        return Err(ApiError::BadRequest(
            "Name and description are required".to_string(),
        ));
    };

    let project = service.create_project(CreateProjectRequest {
        name,
        description,
        status: body.status,
    })?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

async fn update_project<R: ProjectRepository + 'static>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
    body: Result<Json<ProjectUpdate>, JsonRejection>,
) -> Result<Json<ProjectDto>, ApiError> {
    let id = parse_project_id(&raw_id)?;
    let Json(changes) = body?;
    let project = service.update_project(id, changes)?;
    Ok(Json(project.into()))
}

async fn delete_project<R: ProjectRepository + 'static>(
    State(service): State<SharedService<R>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_project_id(&raw_id)?;
    service.delete_project(id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    ProjectId::parse_str(raw)
        .map_err(|_| ApiError::NotFound(format!("Project with id '{raw}' not found")))
}
