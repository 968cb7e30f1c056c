//! Execution of declared transitions against live objects.
//!
//! - `TransitionTag`: a behavior's table plus its late-bound state holder
//! - `execute` / `execute_selecting`: one guarded, committed transition attempt
//! - `Transition` / `SelectingTransition`: behaviors wrapped to always go
//!   through the engine
//! - `Registry`: the explicit step that binds holder names to stores

mod error;
mod executor;
mod registry;
mod tag;
mod transition;

pub use error::{BindError, TransitionError};
pub use executor::{execute, execute_selecting};
pub use registry::Registry;
pub use tag::{Binding, TransitionTag};
pub use transition::{SelectingTransition, Transition};
