//! Project repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable find/save/update/delete/exists/list APIs over projects.
//! - Keep storage details behind the `ProjectRepository` trait.
//!
//! # Invariants
//! - Stored and returned projects are owned copies; a caller mutating a
//!   returned project does not change stored state until it is saved.
//! - `find_all` is ordered by `created_at DESC`, then insertion order.
//! - Overwriting an existing id keeps its original insertion position.

use crate::model::project::{Project, ProjectId};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::RwLock;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(ProjectId),
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "project not found: {id}"),
            Self::LockPoisoned(operation) => {
                write!(f, "project store lock poisoned during {operation}")
            }
        }
    }
}

impl Error for RepoError {}

/// Persistence port for project records.
pub trait ProjectRepository: Send + Sync {
    /// Returns every stored project, newest first.
    fn find_all(&self) -> RepoResult<Vec<Project>>;
    /// Looks up one project. A missing id is `Ok(None)`, not an error.
    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    /// Inserts or replaces the project keyed by its id.
    fn save(&self, project: &Project) -> RepoResult<Project>;
    /// Replaces an already stored project; fails with `NotFound` when the id
    /// is absent, so a concurrently deleted project is never re-inserted.
    fn update(&self, project: &Project) -> RepoResult<Project>;
    /// Removes a project; fails with `NotFound` when the id is absent.
    fn delete(&self, id: ProjectId) -> RepoResult<()>;
    fn exists(&self, id: ProjectId) -> RepoResult<bool>;
}

impl<R: ProjectRepository + ?Sized> ProjectRepository for std::sync::Arc<R> {
    fn find_all(&self) -> RepoResult<Vec<Project>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        (**self).find_by_id(id)
    }

    fn save(&self, project: &Project) -> RepoResult<Project> {
        (**self).save(project)
    }

    fn update(&self, project: &Project) -> RepoResult<Project> {
        (**self).update(project)
    }

    fn delete(&self, id: ProjectId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn exists(&self, id: ProjectId) -> RepoResult<bool> {
        (**self).exists(id)
    }
}

struct StoredProject {
    seq: u64,
    project: Project,
}

#[derive(Default)]
struct Store {
    next_seq: u64,
    entries: HashMap<ProjectId, StoredProject>,
}

/// Keyed in-memory project store. State is lost when dropped.
#[derive(Default)]
pub struct InMemoryProjectRepository {
    store: RwLock<Store>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn find_all(&self) -> RepoResult<Vec<Project>> {
        let store = self
            .store
            .read()
            .map_err(|_| RepoError::LockPoisoned("find_all"))?;

        let mut entries: Vec<&StoredProject> = store.entries.values().collect();
        entries.sort_by_key(|entry| (Reverse(entry.project.created_at()), entry.seq));

        Ok(entries
            .into_iter()
            .map(|entry| entry.project.clone())
            .collect())
    }

    fn find_by_id(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let store = self
            .store
            .read()
            .map_err(|_| RepoError::LockPoisoned("find_by_id"))?;
        Ok(store.entries.get(&id).map(|entry| entry.project.clone()))
    }

    fn save(&self, project: &Project) -> RepoResult<Project> {
        let mut store = self
            .store
            .write()
            .map_err(|_| RepoError::LockPoisoned("save"))?;

        let Store { next_seq, entries } = &mut *store;
        match entries.get_mut(&project.id()) {
            Some(entry) => entry.project = project.clone(),
            None => {
                let seq = *next_seq;
                *next_seq += 1;
                entries.insert(
                    project.id(),
                    StoredProject {
                        seq,
                        project: project.clone(),
                    },
                );
            }
        }

        Ok(project.clone())
    }

    fn update(&self, project: &Project) -> RepoResult<Project> {
        let mut store = self
            .store
            .write()
            .map_err(|_| RepoError::LockPoisoned("update"))?;

        let entry = store
            .entries
            .get_mut(&project.id())
            .ok_or(RepoError::NotFound(project.id()))?;
        entry.project = project.clone();
        Ok(project.clone())
    }

    fn delete(&self, id: ProjectId) -> RepoResult<()> {
        let mut store = self
            .store
            .write()
            .map_err(|_| RepoError::LockPoisoned("delete"))?;

        if store.entries.remove(&id).is_none() {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn exists(&self, id: ProjectId) -> RepoResult<bool> {
        let store = self
            .store
            .read()
            .map_err(|_| RepoError::LockPoisoned("exists"))?;
        Ok(store.entries.contains_key(&id))
    }
}
