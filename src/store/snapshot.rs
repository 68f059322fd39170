use crate::domain::{
    board::Lane,
    project::{Project, ProjectId},
};
use serde::Serialize;

/// Immutable copy of every project, in creation order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    projects: Vec<Project>,
}

impl Snapshot {
    pub(crate) fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    pub fn as_slice(&self) -> &[Project] {
        &self.projects
    }

    /// Finds a project by id
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Projects shown in `lane`, keeping creation order
    pub fn in_lane(&self, lane: Lane) -> Vec<&Project> {
        let status = lane.status();
        self.projects.iter().filter(|p| p.status == status).collect()
    }

    /// Serializes the snapshot for a host UI bridge
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectStatus;

    fn sample() -> Snapshot {
        let first = Project::new("First".to_string(), "First project".to_string(), 1);
        let mut second = Project::new("Second".to_string(), "Second project".to_string(), 2);
        second.status = ProjectStatus::Finished;
        let third = Project::new("Third".to_string(), "Third project".to_string(), 3);
        Snapshot::new(vec![first, second, third])
    }

    #[test]
    fn test_in_lane_filters_by_status() {
        let snapshot = sample();

        let active: Vec<&str> = snapshot
            .in_lane(Lane::Active)
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(active, vec!["First", "Third"]);

        let finished = snapshot.in_lane(Lane::Finished);
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].title, "Second");
    }

    #[test]
    fn test_get_by_id() {
        let snapshot = sample();
        let id = snapshot.as_slice()[1].id.clone();
        assert_eq!(snapshot.get(&id).unwrap().title, "Second");
        assert!(snapshot.get(&ProjectId::generate()).is_none());
    }

    #[test]
    fn test_to_json_is_a_plain_array() {
        let snapshot = sample();
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1]["status"], "finished");
        assert_eq!(items[2]["people"], 3);
    }
}
