pub mod board;
pub mod form;
pub mod project;
pub mod validation;

pub use board::{BoardConfig, FormRules, Lane, LaneConfig};
pub use form::{ProjectForm, ProjectInput};
pub use project::{Project, ProjectId, ProjectStatus};
pub use validation::{check, validate, Constraints, Rule, Validatable};
