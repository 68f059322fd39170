use crate::{
    dnd::DragDropCoordinator,
    domain::{
        board::{BoardConfig, Lane},
        form::ProjectForm,
        project::{Project, ProjectId},
    },
    error::Result,
    store::{ProjectStore, SharedStore, SubscriptionId},
};
use std::path::Path;
use tracing::info;

/// Everything one running board needs, built once at startup
///
/// Owns the single [`ProjectStore`] and hands out clones of its handle, so
/// every component of a board shares the same project table while
/// separate sessions (and tests) stay isolated.
#[derive(Debug, Clone)]
pub struct BoardSession {
    config: BoardConfig,
    store: SharedStore,
    coordinator: DragDropCoordinator,
}

impl BoardSession {
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::start(config))
    }

    // Callers must pass a validated config.
    fn start(config: BoardConfig) -> Self {
        let store = ProjectStore::shared();
        let coordinator = DragDropCoordinator::new(SharedStore::clone(&store));
        info!(board = %config.name, "board session started");
        Self {
            config,
            store,
            coordinator,
        }
    }

    /// Starts a session from a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(BoardConfig::load(path).await?)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn coordinator(&self) -> &DragDropCoordinator {
        &self.coordinator
    }

    /// Validates the form against the configured rules and adds the project
    pub fn submit(&self, form: &mut ProjectForm) -> Result<ProjectId> {
        form.submit(&self.store, &self.config.rules)
    }

    /// Current contents of one lane
    pub fn lane_view(&self, lane: Lane) -> Vec<Project> {
        self.store
            .snapshot()
            .in_lane(lane)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Subscribes a lane renderer to the projects of its lane
    pub fn subscribe_lane<F>(&self, lane: Lane, render: F) -> SubscriptionId
    where
        F: Fn(&[&Project]) + Send + Sync + 'static,
    {
        self.store
            .subscribe(move |snapshot| render(&snapshot.in_lane(lane)))
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::start(BoardConfig::default())
    }
}
