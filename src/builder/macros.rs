//! Macros for declaring states and selectors.

/// Declare a fieldless enum usable as a [`State`](crate::core::State).
///
/// The state name of each variant is the variant identifier.
///
/// # Example
///
/// ```
/// use tagged_fsm::core::State;
/// use tagged_fsm::state_enum;
///
/// state_enum! {
///     pub enum Ticket {
///         Open,
///         Assigned,
///         Closed,
///     }
/// }
///
/// assert_eq!(Ticket::Assigned.name(), "Assigned");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a [`OneOf`](crate::core::OneOf) selector from a list of states.
///
/// Evaluates to `Result<OneOf<S>, ConfigError>`; an empty list is an error.
///
/// ```
/// use tagged_fsm::one_of;
/// use tagged_fsm::core::OneOf;
///
/// let verdict: OneOf<String> = one_of!["approved", "rejected"].unwrap();
/// assert_eq!(verdict.states().len(), 2);
/// ```
#[macro_export]
macro_rules! one_of {
    ($($state:expr),* $(,)?) => {
        $crate::core::OneOf::from_vec(::std::vec![$(::std::convert::Into::into($state)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{ConfigError, OneOf, State};

    state_enum! {
        enum Phase {
            Idle,
            Running,
            Stopped,
        }
    }

    #[test]
    fn state_enum_names_variants() {
        assert_eq!(Phase::Idle.name(), "Idle");
        assert_eq!(Phase::Running.name(), "Running");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum Light {
                Red,
                Green,
            }
        }

        assert_ne!(Light::Red, Light::Green);
    }

    #[test]
    fn one_of_accepts_enum_states() {
        let selector: OneOf<Phase> = one_of![Phase::Running, Phase::Stopped].unwrap();
        assert!(selector.contains(&Phase::Stopped));
        assert!(!selector.contains(&Phase::Idle));
    }

    #[test]
    fn empty_one_of_is_rejected() {
        let selector: Result<OneOf<Phase>, ConfigError> = one_of![];
        assert_eq!(selector.unwrap_err(), ConfigError::EmptyOneOf);
    }
}
