use crate::{
    domain::project::{Project, ProjectId, ProjectStatus},
    error::{BoardError, Result},
};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, trace};

pub mod snapshot;

pub use snapshot::Snapshot;

/// Shared handle to the board's single store
pub type SharedStore = Arc<ProjectStore>;

type Listener = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Handle returned by [`ProjectStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of [`ProjectStore::move_project`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified
    Moved,
    /// Project already had the requested status
    Unchanged,
    /// No project with that id
    NotFound,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved)
    }

    /// Error form for callers that treat a missing project as a failure
    pub fn into_result(self, id: &ProjectId) -> Result<Self> {
        match self {
            Self::NotFound => Err(BoardError::ProjectNotFound(id.to_string())),
            other => Ok(other),
        }
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

/// Observable in-memory table of projects
///
/// Listeners run synchronously, in registration order, after every
/// effective mutation. They receive a copy of the collection, and no lock
/// is held while they run, so a listener may call back into the store.
#[derive(Default)]
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
    listeners: Mutex<Listeners>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the store behind a shared handle
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    /// Adds a new active project and notifies listeners
    ///
    /// Inputs are expected to be validated already; see
    /// [`ProjectForm`](crate::domain::form::ProjectForm).
    pub fn add_project(&self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id.clone();

        let total = {
            let mut projects = lock(&self.projects);
            projects.push(project);
            projects.len()
        };

        debug!(project_id = %id, total, "project added");
        self.notify();
        id
    }

    /// Moves a project to `new_status`
    ///
    /// Unknown ids and moves to the current status change nothing and
    /// notify nobody.
    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) -> MoveOutcome {
        {
            let mut projects = lock(&self.projects);
            let Some(project) = projects.iter_mut().find(|p| &p.id == id) else {
                debug!(project_id = %id, "move ignored, project not found");
                return MoveOutcome::NotFound;
            };
            if project.status == new_status {
                trace!(project_id = %id, status = %new_status, "move ignored, status unchanged");
                return MoveOutcome::Unchanged;
            }
            project.status = new_status;
        }

        debug!(project_id = %id, status = %new_status, "project moved");
        self.notify();
        MoveOutcome::Moved
    }

    /// Registers a listener for future changes
    ///
    /// Past state is not replayed; use [`snapshot`](Self::snapshot) for the
    /// initial render.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        let mut listeners = lock(&self.listeners);
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener; returns false when it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.listeners);
        let before = listeners.entries.len();
        listeners.entries.retain(|(entry, _)| *entry != id);
        listeners.entries.len() != before
    }

    /// Copy of the current collection
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(lock(&self.projects).clone())
    }

    pub fn len(&self) -> usize {
        lock(&self.projects).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.projects).is_empty()
    }

    // Each listener gets a snapshot taken right before it runs, so a
    // listener that mutates the store never leaves a later one on stale data.
    fn notify(&self) {
        let listeners: Vec<Listener> = lock(&self.listeners)
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        trace!(listeners = listeners.len(), "notifying listeners");
        for listener in listeners {
            listener(&self.snapshot());
        }
    }
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &lock(&self.projects).len())
            .field("listeners", &lock(&self.listeners).entries.len())
            .finish()
    }
}

// A listener that panics must not take the board down with it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
