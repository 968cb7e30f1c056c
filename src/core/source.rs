//! Source specifiers for transition rules.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The state (or states) a transition rule may start from.
///
/// `Any` and `AnyOther` are written `*` and `+` in declarations over textual
/// states:
///
/// ```rust
/// use tagged_fsm::core::Source;
///
/// assert_eq!(Source::<String>::from("*"), Source::Any);
/// assert_eq!(Source::<String>::from("+"), Source::AnyOther);
/// assert_eq!(Source::<String>::from("draft"), Source::Exact("draft".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Source<S: State> {
    /// Exactly this state.
    Exact(S),

    /// Any state (`*`).
    Any,

    /// Any state, unless the rule's destination is that same state (`+`).
    AnyOther,
}

impl<S: State> Source<S> {
    /// Textual form of the `Any` wildcard.
    pub const ANY: &'static str = "*";

    /// Textual form of the `AnyOther` wildcard.
    pub const ANY_OTHER: &'static str = "+";

    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Self::Exact(_))
    }
}

impl<S: State> From<S> for Source<S> {
    fn from(state: S) -> Self {
        Source::Exact(state)
    }
}

impl From<&str> for Source<String> {
    fn from(raw: &str) -> Self {
        match raw {
            "*" => Source::Any,
            "+" => Source::AnyOther,
            state => Source::Exact(state.to_string()),
        }
    }
}

impl<S: State> fmt::Display for Source<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(state) => f.write_str(state.name()),
            Self::Any => f.write_str(Self::ANY),
            Self::AnyOther => f.write_str(Self::ANY_OTHER),
        }
    }
}
