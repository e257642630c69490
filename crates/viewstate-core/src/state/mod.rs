//! Mutually exclusive state selection.
//!
//! A [`StateSet`] owns an ordered list of state handles and at most one
//! current handle. Selecting a handle disables every other live handle,
//! enables the new one and then notifies listeners exactly once.

mod actions;
mod change;
mod config;
mod set;
mod snapshot;

pub use actions::{FnActions, StateActions, ToggleActive};
pub use change::{ChangeListeners, ListenerId, StateChange};
pub use config::{InitialSelection, NameMissPolicy, StateSetConfig};
pub use set::StateSet;
pub use snapshot::StateSetSnapshot;

use crate::scene::NodeId;
use thiserror::Error;

/// State selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Cannot set state '{0}': not part of the possible states")]
    InvalidState(NodeId),
    #[error("State '{0}' no longer exists in the scene")]
    DetachedState(NodeId),
    #[error("State '{0}' is already part of the set")]
    DuplicateState(NodeId),
    #[error("More than one state is active: {0:?}")]
    MultipleActive(Vec<NodeId>),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for state operations.
pub type StateResult<T> = Result<T, StateError>;
