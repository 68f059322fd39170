use serde::{Deserialize, Serialize};
use std::fmt;

/// A field value as seen by the validator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Validatable<'a> {
    Text(&'a str),
    Number(f64),
}

impl Validatable<'_> {
    fn as_string(&self) -> String {
        match self {
            Self::Text(text) => (*text).to_string(),
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Constraint set for a single form field
///
/// Every bound is optional. Length bounds apply to text only and numeric
/// bounds to numbers only; a bound that does not apply to the value's kind
/// imposes no check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Constraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn with_max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn with_min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn with_max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// The individual rule a value failed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Min(f64),
    Max(f64),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "must not be empty"),
            Self::MinLength(n) => write!(f, "must be longer than {} characters", n),
            Self::MaxLength(n) => write!(f, "must be shorter than {} characters", n),
            Self::Min(n) => write!(f, "must be at least {}", n),
            Self::Max(n) => write!(f, "must be at most {}", n),
        }
    }
}

/// Returns the first rule `value` breaks, or `None` when it satisfies all of them
///
/// Length bounds are exclusive: a text whose length equals `min_length`
/// fails, as does one whose length equals `max_length`. Numeric bounds are
/// inclusive.
pub fn check(value: Validatable<'_>, constraints: &Constraints) -> Option<Rule> {
    if constraints.required && value.as_string().trim().is_empty() {
        return Some(Rule::Required);
    }

    match value {
        Validatable::Text(text) => {
            let len = text.chars().count();
            if let Some(bound) = constraints.min_length {
                if len <= bound {
                    return Some(Rule::MinLength(bound));
                }
            }
            if let Some(bound) = constraints.max_length {
                if len >= bound {
                    return Some(Rule::MaxLength(bound));
                }
            }
        }
        Validatable::Number(n) => {
            if let Some(bound) = constraints.min {
                if n.is_nan() || n < bound {
                    return Some(Rule::Min(bound));
                }
            }
            if let Some(bound) = constraints.max {
                if n.is_nan() || n > bound {
                    return Some(Rule::Max(bound));
                }
            }
        }
    }

    None
}

/// Checks `value` against every supplied constraint
pub fn validate(value: Validatable<'_>, constraints: &Constraints) -> bool {
    check(value, constraints).is_none()
}
