use chrono::{DateTime, Utc};
use project_core::{
    Project, ProjectStatus, ProjectUpdate, ProjectValidationError, MAX_DESCRIPTION_CHARS,
};
use std::collections::HashSet;
use uuid::Uuid;

fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

#[test]
fn project_new_trims_and_sets_defaults() {
    let project = Project::new("  Alpha  ", "\tfirst project\n", ProjectStatus::Planned).unwrap();

    assert!(!project.id().is_nil());
    assert_eq!(project.name(), "Alpha");
    assert_eq!(project.description(), "first project");
    assert_eq!(project.status(), ProjectStatus::Planned);
    assert!(project.created_at() <= Utc::now());
}

#[test]
fn project_new_rejects_blank_name_and_description() {
    for blank in ["", "   ", "\n\t "] {
        let err = Project::new(blank, "valid", ProjectStatus::Planned).unwrap_err();
        assert_eq!(err, ProjectValidationError::EmptyName);

        let err = Project::new("valid", blank, ProjectStatus::Planned).unwrap_err();
        assert_eq!(err, ProjectValidationError::EmptyDescription);
    }
}

#[test]
fn project_new_rejects_overlong_description() {
    let long = "d".repeat(MAX_DESCRIPTION_CHARS + 1);
    let err = Project::new("Alpha", long, ProjectStatus::Planned).unwrap_err();
    assert_eq!(
        err,
        ProjectValidationError::DescriptionTooLong {
            chars: MAX_DESCRIPTION_CHARS + 1
        }
    );
}

#[test]
fn projects_created_in_sequence_get_distinct_ids() {
    let ids: HashSet<Uuid> = (0..100)
        .map(|i| {
            Project::new(format!("p{i}"), "desc", ProjectStatus::Planned)
                .unwrap()
                .id()
        })
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn with_id_keeps_identity_and_rejects_nil_id() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project =
        Project::with_id(id, "Alpha", "desc", ProjectStatus::Done, fixed_time()).unwrap();
    assert_eq!(project.id(), id);
    assert_eq!(project.created_at(), fixed_time());

    let err = Project::with_id(Uuid::nil(), "Alpha", "desc", ProjectStatus::Done, fixed_time())
        .unwrap_err();
    assert_eq!(err, ProjectValidationError::NilId);
}

#[test]
fn update_status_only_leaves_text_untouched() {
    let mut project = Project::new("Alpha", "first", ProjectStatus::Planned).unwrap();
    let before = project.clone();

    project
        .update(ProjectUpdate {
            status: Some(ProjectStatus::InProgress),
            ..ProjectUpdate::default()
        })
        .unwrap();

    assert_eq!(project.status(), ProjectStatus::InProgress);
    assert_eq!(project.name(), "Alpha");
    assert_eq!(project.description(), "first");
    assert_eq!(project.id(), before.id());
    assert_eq!(project.created_at(), before.created_at());
}

#[test]
fn update_allows_any_status_transition() {
    let mut project = Project::new("Alpha", "first", ProjectStatus::Done).unwrap();
    for status in [
        ProjectStatus::Planned,
        ProjectStatus::Done,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ] {
        project
            .update(ProjectUpdate {
                status: Some(status),
                ..ProjectUpdate::default()
            })
            .unwrap();
        assert_eq!(project.status(), status);
    }
}

#[test]
fn update_trims_provided_text() {
    let mut project = Project::new("Alpha", "first", ProjectStatus::Planned).unwrap();
    project
        .update(ProjectUpdate {
            name: Some("  Beta ".to_string()),
            description: Some(" second ".to_string()),
            status: None,
        })
        .unwrap();

    assert_eq!(project.name(), "Beta");
    assert_eq!(project.description(), "second");
}

// Updates validate every field before applying any of them.
#[test]
fn failed_update_leaves_project_unchanged() {
    let mut project = Project::new("Alpha", "first", ProjectStatus::Planned).unwrap();
    let before = project.clone();

    let err = project
        .update(ProjectUpdate {
            name: Some("Renamed".to_string()),
            description: Some("   ".to_string()),
            status: Some(ProjectStatus::Done),
        })
        .unwrap_err();

    assert_eq!(err, ProjectValidationError::EmptyDescription);
    assert_eq!(project, before);
}

#[test]
fn empty_update_is_a_no_op() {
    let mut project = Project::new("Alpha", "first", ProjectStatus::Planned).unwrap();
    let before = project.clone();

    project.update(ProjectUpdate::default()).unwrap();
    assert_eq!(project, before);
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project =
        Project::with_id(id, "Alpha", "desc", ProjectStatus::InProgress, fixed_time()).unwrap();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Alpha");
    assert_eq!(json["status"], "IN_PROGRESS");
    assert_eq!(json["created_at"], "2023-11-14T22:13:20Z");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "  ",
        "description": "desc",
        "status": "DONE",
        "created_at": "2023-11-14T22:13:20Z"
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(
        err.to_string().contains("Project name cannot be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Alpha",
        "description": "desc",
        "status": "ARCHIVED",
        "created_at": "2023-11-14T22:13:20Z"
    });

    assert!(serde_json::from_value::<Project>(value).is_err());
}
