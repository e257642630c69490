//! Enable/disable strategies applied to state handles.

use crate::scene::{NodeId, SceneHost};

/// Side effects run on a handle when it becomes selected or deselected.
///
/// The strategy is fixed when the state set is constructed.
pub trait StateActions {
    /// Called on the handle that becomes current.
    fn enable(&mut self, host: &mut dyn SceneHost, node: NodeId);

    /// Called on every other live handle when the selection changes.
    fn disable(&mut self, host: &mut dyn SceneHost, node: NodeId);
}

/// Default strategy: toggle the host's active flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleActive;

impl StateActions for ToggleActive {
    fn enable(&mut self, host: &mut dyn SceneHost, node: NodeId) {
        host.set_active(node, true);
    }

    fn disable(&mut self, host: &mut dyn SceneHost, node: NodeId) {
        host.set_active(node, false);
    }
}

/// Strategy built from two closures.
pub struct FnActions<E, D> {
    enable: E,
    disable: D,
}

impl<E, D> FnActions<E, D>
where
    E: FnMut(&mut dyn SceneHost, NodeId),
    D: FnMut(&mut dyn SceneHost, NodeId),
{
    /// Create a strategy from an enable and a disable closure.
    pub fn new(enable: E, disable: D) -> Self {
        Self { enable, disable }
    }
}

impl<E, D> StateActions for FnActions<E, D>
where
    E: FnMut(&mut dyn SceneHost, NodeId),
    D: FnMut(&mut dyn SceneHost, NodeId),
{
    fn enable(&mut self, host: &mut dyn SceneHost, node: NodeId) {
        (self.enable)(host, node)
    }

    fn disable(&mut self, host: &mut dyn SceneHost, node: NodeId) {
        (self.disable)(host, node)
    }
}
