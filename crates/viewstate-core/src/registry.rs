//! Lookup from state handles to the state set that owns them.
//!
//! Hierarchy tooling needs to answer "which controller manages this node?"
//! for every row it draws. The registry is an explicit object owned by the
//! editor session: create it when the session starts, `rebuild` it when the
//! hierarchy changes, `clear` it on teardown.

use crate::scene::NodeId;
use crate::state::{StateActions, StateSet};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identity of a state set owner (one per panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerId(Uuid);

impl ControllerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ControllerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps every registered handle to its owning controller.
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    owners: HashMap<NodeId, ControllerId>,
    /// Scene revision the map was built against.
    revision: Option<u64>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handles of one controller. A handle already owned by
    /// another controller keeps its first owner.
    pub fn register<A: StateActions>(&mut self, controller: ControllerId, set: &StateSet<A>) {
        for &node in set.states() {
            match self.owners.get(&node) {
                Some(owner) if *owner != controller => {
                    log::warn!(
                        "State {} is claimed by {} and {}, keeping {}",
                        node,
                        owner,
                        controller,
                        owner
                    );
                }
                _ => {
                    self.owners.insert(node, controller);
                }
            }
        }
    }

    /// Replace the whole map from the given controllers. Shared handles go
    /// to whichever controller comes first in iteration order.
    pub fn rebuild<'a, A: StateActions + 'a>(
        &mut self,
        revision: u64,
        controllers: impl IntoIterator<Item = (ControllerId, &'a StateSet<A>)>,
    ) {
        self.owners.clear();
        for (id, set) in controllers {
            self.register(id, set);
        }
        self.revision = Some(revision);
        log::debug!("Controller registry rebuilt: {} states", self.owners.len());
    }

    /// Check whether the map was built against `revision`.
    pub fn is_current(&self, revision: u64) -> bool {
        self.revision == Some(revision)
    }

    /// Controller owning `node`, if any.
    pub fn owner_of(&self, node: NodeId) -> Option<ControllerId> {
        self.owners.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.owners.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Drop every entry. The next `is_current` check fails.
    pub fn clear(&mut self) {
        self.owners.clear();
        self.revision = None;
    }
}
