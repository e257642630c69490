//! Serializable form of a state set's ordered handles and selection.

use super::{StateError, StateResult};
use crate::scene::NodeId;
use serde::{Deserialize, Serialize};

/// Ordered handles plus the selected one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateSetSnapshot {
    pub states: Vec<NodeId>,
    #[serde(default)]
    pub selected: Option<NodeId>,
}

impl StateSetSnapshot {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> StateResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StateError::Serialization(e.to_string()))
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> StateResult<Self> {
        serde_json::from_str(json).map_err(|e| StateError::Serialization(e.to_string()))
    }
}
