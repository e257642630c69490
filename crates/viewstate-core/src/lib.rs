//! Viewstate Core Library
//!
//! Mutually exclusive view state selection over a host scene, with change
//! notification and the bookkeeping editor tooling needs.

pub mod registry;
pub mod scene;
pub mod state;

pub use registry::{ControllerId, ControllerRegistry};
pub use scene::{Node, NodeId, SceneGraph, SceneHost};
pub use state::{
    ChangeListeners, FnActions, InitialSelection, ListenerId, NameMissPolicy, StateActions,
    StateChange, StateError, StateResult, StateSet, StateSetConfig, StateSetSnapshot, ToggleActive,
};
