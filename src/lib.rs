//! Tagged FSM: declarative state transitions for ordinary objects
//!
//! Each behavior of an object declares which state changes it is allowed to
//! make. Calling the behavior routes through an engine that checks the current
//! state and guards, runs the behavior, commits the new state (or an error
//! fallback) and publishes the outcome.
//!
//! # Core Concepts
//!
//! - **State**: any `State` value; `String` works, enums via `state_enum!`
//! - **Sources**: an exact state, `*` for any state, or `+` for any other state
//! - **Destinations**: a state, a `OneOf` selector, or unchanged
//! - **Guards**: predicates over the object that must all hold
//! - **Stores**: named state holders the engine reads and writes through
//! - **Signal**: observers notified of every committed outcome
//!
//! # Example
//!
//! ```rust
//! use tagged_fsm::builder::TransitionBuilder;
//! use tagged_fsm::engine::Registry;
//! use tagged_fsm::notify::OutcomeLog;
//! use tagged_fsm::storage::{FieldOptions, FieldStore, StateField};
//! use std::convert::Infallible;
//!
//! struct Article {
//!     state: StateField<String>,
//!     reviewed: bool,
//! }
//!
//! let publish = TransitionBuilder::<Article, String>::new("publish")
//!     .source("draft")
//!     .destination("published")
//!     .when(|a: &Article| a.reviewed)
//!     .build(|_: &mut Article, _: ()| Ok::<_, Infallible>(()))
//!     .unwrap();
//!
//! let log = OutcomeLog::new();
//! let mut registry = Registry::new();
//! registry
//!     .store(FieldStore::new("state", |a: &Article| &a.state, |a: &mut Article| &mut a.state))
//!     .register(publish.tag());
//! registry.signal().connect(log.clone());
//! registry.bind().unwrap();
//!
//! let mut article = Article {
//!     state: StateField::with_state("draft", FieldOptions::default()),
//!     reviewed: false,
//! };
//! assert!(publish.call(&mut article, ()).unwrap_err().is_not_allowed());
//!
//! article.reviewed = true;
//! publish.call(&mut article, ()).unwrap();
//! assert_eq!(article.state.get().unwrap(), "published");
//! assert_eq!(log.path(), vec!["draft".to_string(), "published".to_string()]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod notify;
pub mod storage;

// Re-export commonly used types
pub use builder::TransitionBuilder;
pub use crate::core::{ConfigError, Destination, Guard, OneOf, Source, State};
pub use engine::{Registry, Transition, TransitionError};
pub use storage::{FieldOptions, FieldStore, StateField, StateStore};
