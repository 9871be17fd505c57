use project_core::{
    CreateProjectRequest, InMemoryProjectRepository, Project, ProjectId, ProjectRepository,
    ProjectService, ProjectStatus, ProjectUpdate, ProjectValidationError, RepoResult,
    ServiceError,
};
use std::sync::Arc;
use uuid::Uuid;

fn service() -> ProjectService<InMemoryProjectRepository> {
    ProjectService::new(InMemoryProjectRepository::new())
}

fn create_request(name: &str, description: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        description: description.to_string(),
        status: None,
    }
}

#[test]
fn create_defaults_status_to_planned_and_persists() {
    let repo = Arc::new(InMemoryProjectRepository::new());
    let service = ProjectService::new(Arc::clone(&repo));

    let created = service
        .create_project(create_request("Site Redesign", "Refresh homepage"))
        .unwrap();

    assert_eq!(created.status(), ProjectStatus::Planned);
    assert!(repo.exists(created.id()).unwrap());
    assert_eq!(service.get_project(created.id()).unwrap(), created);
}

#[test]
fn create_keeps_explicit_status() {
    let service = service();
    let created = service
        .create_project(CreateProjectRequest {
            status: Some(ProjectStatus::Done),
            ..create_request("Alpha", "first")
        })
        .unwrap();
    assert_eq!(created.status(), ProjectStatus::Done);
}

#[test]
fn create_invalid_project_is_not_stored() {
    let service = service();

    let err = service
        .create_project(create_request("   ", "desc"))
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Validation(ProjectValidationError::EmptyName)
    );
    assert!(service.list_projects().unwrap().is_empty());
}

#[test]
fn get_missing_returns_not_found() {
    let service = service();
    let id = Uuid::new_v4();

    assert_eq!(service.get_project(id).unwrap_err(), ServiceError::NotFound(id));
}

#[test]
fn update_changes_only_provided_fields() {
    let service = service();
    let created = service
        .create_project(create_request("Alpha", "first"))
        .unwrap();

    let updated = service
        .update_project(
            created.id(),
            ProjectUpdate {
                status: Some(ProjectStatus::InProgress),
                ..ProjectUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status(), ProjectStatus::InProgress);
    assert_eq!(updated.name(), "Alpha");
    assert_eq!(updated.description(), "first");
    assert_eq!(service.get_project(created.id()).unwrap(), updated);
}

#[test]
fn update_missing_returns_not_found() {
    let service = service();
    let id = Uuid::new_v4();

    let err = service
        .update_project(id, ProjectUpdate::default())
        .unwrap_err();
    assert_eq!(err, ServiceError::NotFound(id));
}

/// Deletes the looked-up project right after handing it out, simulating a
/// `DELETE` request that lands between the read and write of an update.
struct DeleteAfterRead {
    inner: InMemoryProjectRepository,
}

impl ProjectRepository for DeleteAfterRead {
    fn find_all(&self) -> RepoResult<Vec<Project>> {
        self.inner.find_all()
    }

    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let found = self.inner.find_by_id(id)?;
        if found.is_some() {
            self.inner.delete(id)?;
        }
        Ok(found)
    }

    fn save(&self, project: &Project) -> RepoResult<Project> {
        self.inner.save(project)
    }

    fn update(&self, project: &Project) -> RepoResult<Project> {
        self.inner.update(project)
    }

    fn delete(&self, id: ProjectId) -> RepoResult<()> {
        self.inner.delete(id)
    }

    fn exists(&self, id: ProjectId) -> RepoResult<bool> {
        self.inner.exists(id)
    }
}

#[test]
fn update_racing_delete_does_not_resurrect_project() {
    let repo = Arc::new(DeleteAfterRead {
        inner: InMemoryProjectRepository::new(),
    });
    let service = ProjectService::new(Arc::clone(&repo));
    let created = service
        .create_project(create_request("Alpha", "first"))
        .unwrap();

    let err = service
        .update_project(
            created.id(),
            ProjectUpdate {
                status: Some(ProjectStatus::Done),
                ..ProjectUpdate::default()
            },
        )
        .unwrap_err();

    assert_eq!(err, ServiceError::NotFound(created.id()));
    assert!(!repo.exists(created.id()).unwrap());
}

#[test]
fn invalid_update_leaves_stored_project_unchanged() {
    let service = service();
    let created = service
        .create_project(create_request("Alpha", "first"))
        .unwrap();

    let err = service
        .update_project(
            created.id(),
            ProjectUpdate {
                name: Some(" ".to_string()),
                status: Some(ProjectStatus::Done),
                ..ProjectUpdate::default()
            },
        )
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Validation(ProjectValidationError::EmptyName)
    );
    assert_eq!(service.get_project(created.id()).unwrap(), created);
}

#[test]
fn delete_removes_project_and_second_delete_is_not_found() {
    let service = service();
    let created = service
        .create_project(create_request("Alpha", "first"))
        .unwrap();

    service.delete_project(created.id()).unwrap();

    assert_eq!(
        service.get_project(created.id()).unwrap_err(),
        ServiceError::NotFound(created.id())
    );
    assert_eq!(
        service.delete_project(created.id()).unwrap_err(),
        ServiceError::NotFound(created.id())
    );
}

#[test]
fn list_returns_newest_first() {
    let service = service();
    let first = service.create_project(create_request("one", "d")).unwrap();
    let second = service.create_project(create_request("two", "d")).unwrap();

    let listed = service.list_projects().unwrap();
    assert_eq!(listed.len(), 2);
    // Creation timestamps may be equal; ties keep insertion order.
    if first.created_at() == second.created_at() {
        assert_eq!(listed[0].id(), first.id());
    } else {
        assert_eq!(listed[0].id(), second.id());
    }
}

#[test]
fn service_errors_render_human_readable_messages() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    assert_eq!(
        ServiceError::NotFound(id).to_string(),
        "Project with id '11111111-2222-4333-8444-555555555555' not found"
    );
    assert_eq!(
        ServiceError::Validation(ProjectValidationError::EmptyDescription).to_string(),
        "Project description cannot be empty"
    );
}
