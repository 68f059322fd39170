use crate::{
    domain::board::FormRules,
    domain::project::ProjectId,
    domain::validation::{check, Rule, Validatable},
    error::{BoardError, Result},
    store::ProjectStore,
};
use tracing::{debug, warn};

/// Validated input for a new project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Raw field values of the "add project" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl ProjectForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates every field and returns the typed input
    ///
    /// Title and description are kept exactly as validated. The people field is coerced to a number before its rules are
    /// checked; it must also be a whole number.
    pub fn gather(&self, rules: &FormRules) -> Result<ProjectInput> {
        if let Some(rule) = check(Validatable::Text(&self.title), &rules.title) {
            return Err(BoardError::validation("title", rule.to_string()));
        }
        if let Some(rule) = check(Validatable::Text(&self.description), &rules.description) {
            return Err(BoardError::validation("description", rule.to_string()));
        }

        let people = self.parse_people()?;
        if let Some(rule) = check(Validatable::Number(people), &rules.people) {
            return Err(BoardError::validation("people", rule.to_string()));
        }
        if people.fract() != 0.0 || people < 0.0 || people > u32::MAX as f64 {
            return Err(BoardError::validation("people", "must be a whole number"));
        }

        Ok(ProjectInput {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Validates the form and adds the project to the store
    ///
    /// On success the fields are cleared. On failure the store is left
    /// untouched, no listener runs, and the fields keep their values.
    pub fn submit(&mut self, store: &ProjectStore, rules: &FormRules) -> Result<ProjectId> {
        let input = match self.gather(rules) {
            Ok(input) => input,
            Err(err) => {
                warn!(error = %err, "project form rejected");
                return Err(err);
            }
        };

        let id = store.add_project(input.title, input.description, input.people);
        debug!(project_id = %id, "project form submitted");
        self.clear();
        Ok(id)
    }

    /// Resets every field to empty
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    fn parse_people(&self) -> Result<f64> {
        let raw = self.people.trim();
        if raw.is_empty() {
            return Err(BoardError::validation("people", Rule::Required.to_string()));
        }
        raw.parse::<f64>()
            .map_err(|_| BoardError::validation("people", "must be a number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::ProjectStatus;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn counting_store() -> (ProjectStore, Arc<AtomicUsize>) {
        let store = ProjectStore::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (store, calls)
    }

    fn field_of(err: BoardError) -> String {
        match err {
            BoardError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_gather_valid_input() {
        let form = ProjectForm::new("Build API", "Design the backend", "3");
        let input = form.gather(&FormRules::default()).unwrap();

        assert_eq!(input.title, "Build API");
        assert_eq!(input.description, "Design the backend");
        assert_eq!(input.people, 3);
    }

    #[test]
    fn test_gather_rejects_empty_title() {
        let form = ProjectForm::new("   ", "Design the backend", "3");
        let err = form.gather(&FormRules::default()).unwrap_err();
        assert_eq!(field_of(err), "title");
    }

    #[test]
    fn test_gather_rejects_description_at_min_length() {
        // "short" has exactly five characters and the bound is exclusive
        let form = ProjectForm::new("X", "short", "2");
        let err = form.gather(&FormRules::default()).unwrap_err();
        assert_eq!(field_of(err), "description");

        let form = ProjectForm::new("X", "shorts", "2");
        assert!(form.gather(&FormRules::default()).is_ok());
    }

    #[test]
    fn test_stored_description_satisfies_its_rule() {
        let (store, _) = counting_store();
        let rules = FormRules::default();
        let mut form = ProjectForm::new("T", "  abcd", "2");

        let id = form.submit(&store, &rules).unwrap();

        let snapshot = store.snapshot();
        let stored = &snapshot.get(&id).unwrap().description;
        assert_eq!(stored, "  abcd");
        assert!(crate::domain::validation::validate(
            Validatable::Text(stored),
            &rules.description
        ));
    }

    #[test]
    fn test_gather_rejects_people_out_of_range() {
        let rules = FormRules::default();
        for people in ["0", "6", "-1", "", "abc", "2.5"] {
            let form = ProjectForm::new("Build API", "Design the backend", people);
            let err = form.gather(&rules).unwrap_err();
            assert_eq!(field_of(err), "people", "input {people:?}");
        }

        for people in ["1", "5", " 4 "] {
            let form = ProjectForm::new("Build API", "Design the backend", people);
            assert!(form.gather(&rules).is_ok(), "input {people:?}");
        }
    }

    #[test]
    fn test_submit_creates_project_and_clears_form() {
        let (store, calls) = counting_store();
        let mut form = ProjectForm::new("Build API", "Design the backend", "3");

        let id = form.submit(&store, &FormRules::default()).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        let project = snapshot.get(&id).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.people, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(form, ProjectForm::default());
    }

    #[test]
    fn test_rejected_submit_changes_nothing() {
        let (store, calls) = counting_store();
        let mut form = ProjectForm::new("X", "short", "2");

        let result = form.submit(&store, &FormRules::default());

        assert!(matches!(result, Err(BoardError::Validation { .. })));
        assert!(store.snapshot().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.description, "short");
    }
}
