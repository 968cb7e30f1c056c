//! Core transition types and matching logic.
//!
//! This module contains the pure part of the engine:
//! - State identifiers via the `State` trait
//! - Sources, destinations and the `OneOf` selector
//! - Guard predicates over the acting object
//! - The per-behavior `TransitionTable` and the resolver that queries it
//!
//! Nothing here reads or writes an object's state; that happens in
//! [`engine`](crate::engine).

mod destination;
mod error;
mod guard;
pub mod resolve;
mod source;
mod state;
mod table;

pub use destination::{Destination, OneOf};
pub use error::{ConfigError, InvalidResult};
pub use guard::Guard;
pub use resolve::{has_transition, resolve};
pub use source::Source;
pub use state::State;
pub use table::{NoTransition, TransitionSpec, TransitionTable};
