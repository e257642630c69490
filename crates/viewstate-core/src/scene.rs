//! Host scene abstraction.
//!
//! State handles refer to nodes owned by a host scene. The host decides
//! what "active" means for a node; the state set only toggles the flag.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identity of a presentable node in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a fresh random node id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities the host scene provides to state sets and observers.
pub trait SceneHost {
    /// Check whether the node still exists.
    fn contains(&self, node: NodeId) -> bool;

    /// Human-readable name of a node.
    fn name(&self, node: NodeId) -> Option<&str>;

    /// Current active flag of a node. Missing nodes are inactive.
    fn is_active(&self, node: NodeId) -> bool;

    /// Set the active flag of a node. Missing nodes are ignored.
    fn set_active(&mut self, node: NodeId, active: bool);

    /// Children of a node, in sibling order.
    fn children(&self, parent: NodeId) -> Vec<NodeId>;

    /// Create a new node under `parent` (or at the root).
    fn create_child(&mut self, parent: Option<NodeId>, name: &str) -> NodeId;
}

/// A node in the in-memory scene graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub active: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// In-memory scene graph used by the demo shell and tests.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, Node>,
    roots: Vec<NodeId>,
    /// Bumped on every structural change (create/remove/rename).
    revision: u64,
}

impl SceneGraph {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the scene.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root nodes in creation order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Structural revision counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Create a node with an explicit initial active flag.
    pub fn spawn(&mut self, parent: Option<NodeId>, name: &str, active: bool) -> NodeId {
        let id = NodeId::new();
        let parent = parent.filter(|p| self.nodes.contains_key(p));
        self.nodes.insert(
            id,
            Node {
                id,
                name: name.to_string(),
                active,
                parent,
                children: Vec::new(),
            },
        );
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        self.revision += 1;
        id
    }

    /// Rename a node. Returns false if it does not exist.
    pub fn rename(&mut self, id: NodeId, name: &str) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.name = name.to_string();
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Remove a node and its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };
        match node.parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent) => parent.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }
        let mut pending = node.children;
        while let Some(child) = pending.pop() {
            if let Some(child) = self.nodes.remove(&child) {
                pending.extend(child.children);
            }
        }
        self.revision += 1;
        true
    }

    /// First node (depth-first from the roots) with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = self.nodes.get(&id)?;
            if node.name == name {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }
}

impl SceneHost for SceneGraph {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|n| n.name.as_str())
    }

    fn is_active(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.active)
    }

    fn set_active(&mut self, node: NodeId, active: bool) {
        match self.nodes.get_mut(&node) {
            Some(n) => n.active = active,
            None => log::warn!("set_active on missing node {}", node),
        }
    }

    fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&parent)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn create_child(&mut self, parent: Option<NodeId>, name: &str) -> NodeId {
        self.spawn(parent, name, false)
    }
}
