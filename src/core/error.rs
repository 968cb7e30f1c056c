//! Declaration-time and selection errors.

use thiserror::Error;

/// Invalid transition declarations.
///
/// These are raised while tables and selectors are being built, never while
/// a transition executes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate transition for source '{state}' on '{behavior}'")]
    DuplicateSource { behavior: String, state: String },

    #[error("ONE_OF must receive at least one destination")]
    EmptyOneOf,

    #[error("'{behavior}' selects its destination with ONE_OF; declare it with build_selecting()")]
    SelectorNeedsState { behavior: String },

    #[error("{} configuration errors: {}", .0.len(), join(.0))]
    Several(Vec<ConfigError>),
}

impl ConfigError {
    /// Collapse the errors of one declaration, keeping a lone error as is.
    pub(crate) fn combine(mut errors: Vec<ConfigError>) -> ConfigError {
        if errors.len() == 1 {
            errors.remove(0)
        } else {
            ConfigError::Several(errors)
        }
    }

    /// Every individual error, flattening `Several`.
    pub fn errors(&self) -> Vec<&ConfigError> {
        match self {
            Self::Several(errors) => errors.iter().flat_map(ConfigError::errors).collect(),
            other => vec![other],
        }
    }
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A ONE_OF-governed behavior returned a state outside its destination set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{value}' is not in the list of allowed states [{}]", .allowed.join(", "))]
pub struct InvalidResult {
    pub value: String,
    pub allowed: Vec<String>,
}
