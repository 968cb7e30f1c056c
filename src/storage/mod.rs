//! State storage consumed by the engine.
//!
//! The engine never touches an object's state directly. It performs one
//! [`read`](StateStore::read) per call and at most one
//! [`write`](StateStore::write), both through a store bound to the
//! transition's holder name. Stores are free to add access policy; a refused
//! write surfaces to the caller as
//! [`TransitionError::Storage`](crate::engine::TransitionError::Storage).

mod error;
mod field;

pub use error::StorageError;
pub use field::{FieldOptions, FieldStore, StateField};

use crate::core::State;

/// Read and write access to the state of objects of type `O`.
pub trait StateStore<O, S: State>: Send + Sync {
    /// Name the store is bound under (the holder name of a declaration).
    fn name(&self) -> &str;

    /// Current state of `object`.
    fn read(&self, object: &O) -> Result<S, StorageError>;

    /// Commit `state` to `object`.
    fn write(&self, object: &mut O, state: S) -> Result<(), StorageError>;
}
