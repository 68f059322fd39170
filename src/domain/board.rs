use crate::{
    domain::project::ProjectStatus,
    domain::validation::Constraints,
    error::{BoardError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};
use tokio::fs;

/// One of the two fixed buckets projects are grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Active,
    Finished,
}

impl Lane {
    pub const ALL: [Lane; 2] = [Lane::Active, Lane::Finished];

    /// Lane identifier as used by the presentation layer
    pub fn id(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Status a project takes when dropped into this lane
    pub fn status(&self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }

    /// Lane that displays projects with the given status
    pub fn for_status(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => Self::Active,
            ProjectStatus::Finished => Self::Finished,
        }
    }

    /// Element id of the lane's list, e.g. `active-projects-list`
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.id())
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Lane {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(BoardError::InvalidLane(s.to_string())),
        }
    }
}

/// Display configuration for a lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    pub lane: Lane,
    pub title: String,
}

impl LaneConfig {
    pub fn new(lane: Lane, title: String) -> Self {
        Self { lane, title }
    }
}

/// Constraint sets applied to the project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: Constraints::required(),
            // min_length is exclusive: five characters are not enough
            description: Constraints::required().with_min_length(5),
            people: Constraints::required().with_min(1.0).with_max(5.0),
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub lanes: Vec<LaneConfig>,
    #[serde(default)]
    pub rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Project Board".to_string(),
            lanes: vec![
                LaneConfig::new(Lane::Active, "ACTIVE PROJECTS".to_string()),
                LaneConfig::new(Lane::Finished, "FINISHED PROJECTS".to_string()),
            ],
            rules: FormRules::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_json(&contents)
    }

    /// Ensures each lane is configured exactly once
    pub fn validate(&self) -> Result<()> {
        for lane in Lane::ALL {
            let count = self.lanes.iter().filter(|cfg| cfg.lane == lane).count();
            if count != 1 {
                return Err(BoardError::ConfigError(format!(
                    "lane '{}' must be configured exactly once, found {}",
                    lane, count
                )));
            }
        }
        Ok(())
    }

    /// Gets the configuration for a lane
    pub fn lane_config(&self, lane: Lane) -> Option<&LaneConfig> {
        self.lanes.iter().find(|cfg| cfg.lane == lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_lane_ids_and_statuses() {
        assert_eq!(Lane::Active.id(), "active");
        assert_eq!(Lane::Finished.id(), "finished");
        assert_eq!(Lane::Active.status(), ProjectStatus::Active);
        assert_eq!(Lane::Finished.status(), ProjectStatus::Finished);
        assert_eq!(Lane::for_status(ProjectStatus::Finished), Lane::Finished);
        assert_eq!(Lane::Finished.list_id(), "finished-projects-list");
    }

    #[test]
    fn test_lane_parsing() {
        assert_eq!(Lane::from_str("active").unwrap(), Lane::Active);
        assert_eq!(Lane::from_str(" Finished ").unwrap(), Lane::Finished);
        assert!(matches!(
            Lane::from_str("archived"),
            Err(BoardError::InvalidLane(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.lane_config(Lane::Active).unwrap().title,
            "ACTIVE PROJECTS"
        );
        assert_eq!(config.rules.description.min_length, Some(5));
        assert_eq!(config.rules.people.min, Some(1.0));
        assert_eq!(config.rules.people.max, Some(5.0));
    }

    #[test]
    fn test_config_from_json_uses_default_rules() {
        let json = r#"{
            "name": "Team Board",
            "lanes": [
                { "lane": "active", "title": "Doing" },
                { "lane": "finished", "title": "Done" }
            ]
        }"#;

        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(config.name, "Team Board");
        assert_eq!(config.lane_config(Lane::Finished).unwrap().title, "Done");
        assert_eq!(config.rules, FormRules::default());
    }

    #[test]
    fn test_config_rejects_missing_lane() {
        let json = r#"{
            "name": "Broken",
            "lanes": [{ "lane": "active", "title": "Doing" }]
        }"#;

        assert!(matches!(
            BoardConfig::from_json(json),
            Err(BoardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_config_rejects_duplicate_lane() {
        let mut config = BoardConfig::default();
        config
            .lanes
            .push(LaneConfig::new(Lane::Active, "Again".to_string()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        assert!(matches!(
            BoardConfig::from_json("{ not json"),
            Err(BoardError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_config_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");

        let mut config = BoardConfig::default();
        config.rules.people = Constraints::required().with_min(1.0).with_max(10.0);
        tokio::fs::write(&path, serde_json::to_string_pretty(&config).unwrap())
            .await
            .unwrap();

        let loaded = BoardConfig::load(&path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_config_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = BoardConfig::load(temp_dir.path().join("missing.json")).await;
        assert!(matches!(result, Err(BoardError::IoError(_))));
    }
}
