//! Policies for the ambiguous corners of state selection.

use serde::{Deserialize, Serialize};

/// What `set_state_by_name` does when no state has the requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMissPolicy {
    /// Leave the selection untouched.
    #[default]
    Ignore,
    /// Clear the selection.
    Clear,
}

/// How the initial selection is resolved when several states are already active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialSelection {
    /// The first active state in insertion order wins.
    #[default]
    FirstWins,
    /// Fail construction with `StateError::MultipleActive`.
    Reject,
}

/// Behavior configuration for a state set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSetConfig {
    pub name_miss: NameMissPolicy,
    pub initial: InitialSelection,
}

impl StateSetConfig {
    pub fn with_name_miss(mut self, policy: NameMissPolicy) -> Self {
        self.name_miss = policy;
        self
    }

    pub fn with_initial(mut self, policy: InitialSelection) -> Self {
        self.initial = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: StateSetConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, StateSetConfig::default());
        assert_eq!(config.name_miss, NameMissPolicy::Ignore);
        assert_eq!(config.initial, InitialSelection::FirstWins);
    }

    #[test]
    fn test_snake_case_policies() {
        let config: StateSetConfig =
            serde_json::from_str(r#"{ "name_miss": "clear", "initial": "reject" }"#).unwrap();
        assert_eq!(config.name_miss, NameMissPolicy::Clear);
        assert_eq!(config.initial, InitialSelection::Reject);
    }
}
