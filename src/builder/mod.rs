//! Declaring transition behaviors.
//!
//! A declaration names the behavior, its sources, its destination and the
//! state holder it acts on. Building validates the whole declaration and
//! reports every problem at once.

pub mod macros;
pub mod transition;

pub use crate::core::ConfigError;
pub use transition::{TransitionBuilder, DEFAULT_HOLDER};
