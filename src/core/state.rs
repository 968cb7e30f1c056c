//! Core State trait for transition states.
//!
//! A state is an identifier: something that can be compared, hashed for
//! table lookup, and serialized alongside the object that carries it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state identifiers.
///
/// All methods are pure. States are immutable values describing where an
/// object currently is in its lifecycle.
///
/// # Required Traits
///
/// - `Clone`: states are copied into outcomes and committed to storage
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in error messages and logs
/// - `Serialize` + `Deserialize`: states travel with persisted objects
///
/// `String` implements `State` directly, which covers the common case of
/// textual states such as `"draft"` or `"published"`. Enums usually get an
/// implementation from [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use tagged_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// assert_eq!("draft".to_string().name(), "draft");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display and logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Draft,
        Published,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Published => "Published",
            }
        }
    }

    #[test]
    fn string_state_name_is_its_content() {
        let state = "in_review".to_string();
        assert_eq!(state.name(), "in_review");
    }

    #[test]
    fn enum_state_name_returns_correct_value() {
        assert_eq!(TestState::Draft.name(), "Draft");
        assert_eq!(TestState::Published.name(), "Published");
    }

    #[test]
    fn states_are_hashable_keys() {
        let mut seen = HashSet::new();
        assert!(seen.insert(TestState::Draft));
        assert!(!seen.insert(TestState::Draft));
        assert!(seen.insert(TestState::Published));
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Published;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
