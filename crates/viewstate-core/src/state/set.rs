//! The state set: single selection among many handles.

use super::actions::{StateActions, ToggleActive};
use super::change::{ChangeListeners, ListenerId, StateChange};
use super::config::{InitialSelection, NameMissPolicy, StateSetConfig};
use super::snapshot::StateSetSnapshot;
use super::{StateError, StateResult};
use crate::scene::{NodeId, SceneHost};

/// Enforces that at most one of its handles is current.
///
/// The set does not own the scene. Every operation that touches handles
/// takes the host explicitly.
#[derive(Debug)]
pub struct StateSet<A = ToggleActive> {
    /// Handles in navigation order.
    states: Vec<NodeId>,
    /// Current selection, always a member of `states`.
    current: Option<NodeId>,
    actions: A,
    listeners: ChangeListeners,
    config: StateSetConfig,
}

impl StateSet<ToggleActive> {
    /// Create a set with the default actions and configuration.
    ///
    /// The handle already active in the host becomes current.
    pub fn new(host: &mut dyn SceneHost, states: Vec<NodeId>) -> StateResult<Self> {
        Self::with_actions(host, states, ToggleActive, StateSetConfig::default())
    }
}

impl<A: StateActions> StateSet<A> {
    /// Create a set with explicit actions and configuration.
    pub fn with_actions(
        host: &mut dyn SceneHost,
        states: Vec<NodeId>,
        actions: A,
        config: StateSetConfig,
    ) -> StateResult<Self> {
        let active: Vec<NodeId> = states
            .iter()
            .copied()
            .filter(|&s| host.contains(s) && host.is_active(s))
            .collect();
        if active.len() > 1 {
            match config.initial {
                InitialSelection::FirstWins => {
                    log::warn!(
                        "{} states are active at construction, keeping the first",
                        active.len()
                    );
                }
                InitialSelection::Reject => return Err(StateError::MultipleActive(active)),
            }
        }
        Self::build(host, states, active.first().copied(), actions, config)
    }

    /// Rebuild a set from a snapshot. The snapshot's selection wins over
    /// whatever is active in the host.
    pub fn restore(
        host: &mut dyn SceneHost,
        snapshot: StateSetSnapshot,
        actions: A,
        config: StateSetConfig,
    ) -> StateResult<Self> {
        if let Some(selected) = snapshot.selected {
            if !snapshot.states.contains(&selected) {
                return Err(StateError::InvalidState(selected));
            }
            if !host.contains(selected) {
                return Err(StateError::DetachedState(selected));
            }
        }
        Self::build(host, snapshot.states, snapshot.selected, actions, config)
    }

    fn build(
        host: &mut dyn SceneHost,
        states: Vec<NodeId>,
        selected: Option<NodeId>,
        actions: A,
        config: StateSetConfig,
    ) -> StateResult<Self> {
        for (i, state) in states.iter().enumerate() {
            if states[..i].contains(state) {
                return Err(StateError::DuplicateState(*state));
            }
        }

        let mut set = Self {
            states,
            current: selected,
            actions,
            listeners: ChangeListeners::new(),
            config,
        };
        // Bring the host in line with the selection, without notifying.
        set.apply(host, selected);
        log::debug!(
            "State set created with {} states, current {:?}",
            set.states.len(),
            set.current
        );
        Ok(set)
    }

    /// Handles in navigation order.
    pub fn states(&self) -> &[NodeId] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.states.contains(&node)
    }

    /// The current selection.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Index of the current selection, `None` when nothing is selected.
    pub fn current_index(&self) -> Option<usize> {
        self.current
            .and_then(|c| self.states.iter().position(|&s| s == c))
    }

    /// Name of the current selection, empty when nothing is selected.
    pub fn current_name<'h>(&self, host: &'h dyn SceneHost) -> &'h str {
        self.current.and_then(|c| host.name(c)).unwrap_or("")
    }

    pub fn config(&self) -> &StateSetConfig {
        &self.config
    }

    /// The enable/disable strategy.
    pub fn actions(&self) -> &A {
        &self.actions
    }

    /// First handle whose name matches, in insertion order.
    pub fn get_state(&self, host: &dyn SceneHost, name: &str) -> Option<NodeId> {
        self.states
            .iter()
            .copied()
            .find(|&s| host.name(s) == Some(name))
    }

    /// Select a handle, or clear the selection with `None`.
    ///
    /// Selecting the current handle again does nothing. A handle that is
    /// not part of the set is rejected before anything is touched.
    pub fn set_state(&mut self, host: &mut dyn SceneHost, target: Option<NodeId>) -> StateResult<()> {
        if target == self.current {
            return Ok(());
        }
        if let Some(node) = target {
            if !self.states.contains(&node) {
                return Err(StateError::InvalidState(node));
            }
            if !host.contains(node) {
                return Err(StateError::DetachedState(node));
            }
        }

        self.apply(host, target);
        let previous = std::mem::replace(&mut self.current, target);
        log::debug!("State changed: {:?} -> {:?}", previous, target);
        self.listeners.notify(&StateChange {
            previous,
            current: target,
        });
        Ok(())
    }

    /// Select the first handle with the given name.
    pub fn set_state_by_name(&mut self, host: &mut dyn SceneHost, name: &str) -> StateResult<()> {
        if self.current.is_some() && self.current_name(host) == name {
            return Ok(());
        }
        match self.get_state(host, name) {
            Some(node) => self.set_state(host, Some(node)),
            None => match self.config.name_miss {
                NameMissPolicy::Ignore => {
                    log::debug!("No state named '{}', ignoring", name);
                    Ok(())
                }
                NameMissPolicy::Clear => self.set_no_state(host),
            },
        }
    }

    /// Select by position. Out-of-range indices are ignored.
    pub fn set_state_index(&mut self, host: &mut dyn SceneHost, index: usize) -> StateResult<()> {
        match self.states.get(index).copied() {
            Some(node) => self.set_state(host, Some(node)),
            None => {
                log::debug!("State index {} out of range ({} states)", index, self.states.len());
                Ok(())
            }
        }
    }

    /// Clear the selection.
    pub fn set_no_state(&mut self, host: &mut dyn SceneHost) -> StateResult<()> {
        self.set_state(host, None)
    }

    /// Select the next handle, wrapping to the first.
    pub fn next_state(&mut self, host: &mut dyn SceneHost) -> StateResult<()> {
        let len = self.states.len();
        if len == 0 {
            return Ok(());
        }
        let index = match self.current_index() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.set_state_index(host, index)
    }

    /// Select the previous handle, wrapping to the last.
    pub fn previous_state(&mut self, host: &mut dyn SceneHost) -> StateResult<()> {
        let len = self.states.len();
        if len == 0 {
            return Ok(());
        }
        let index = match self.current_index() {
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.set_state_index(host, index)
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StateChange) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Append a handle. It joins disabled, since it is not current.
    pub fn add_state(&mut self, host: &mut dyn SceneHost, node: NodeId) -> StateResult<()> {
        if self.states.contains(&node) {
            return Err(StateError::DuplicateState(node));
        }
        self.states.push(node);
        self.disable_joined(host, node);
        Ok(())
    }

    /// Remove a handle. Removing the current handle clears the selection.
    pub fn remove_state(&mut self, node: NodeId) -> bool {
        let Some(index) = self.states.iter().position(|&s| s == node) else {
            return false;
        };
        self.states.remove(index);
        if self.current == Some(node) {
            self.clear_without_actions(node);
        }
        true
    }

    /// Move a handle to a new position. The selection is kept.
    pub fn move_state(&mut self, from: usize, to: usize) -> bool {
        if from >= self.states.len() || to >= self.states.len() {
            return false;
        }
        let node = self.states.remove(from);
        self.states.insert(to, node);
        true
    }

    /// Replace the handle at `index`, returning the old one.
    ///
    /// Out-of-range indices are ignored. The new handle joins disabled.
    /// Replacing the current handle clears the selection.
    pub fn replace_state(
        &mut self,
        host: &mut dyn SceneHost,
        index: usize,
        node: NodeId,
    ) -> StateResult<Option<NodeId>> {
        let Some(old) = self.states.get(index).copied() else {
            return Ok(None);
        };
        if old == node {
            return Ok(Some(old));
        }
        if self.states.contains(&node) {
            return Err(StateError::DuplicateState(node));
        }
        self.states[index] = node;
        self.disable_joined(host, node);
        if self.current == Some(old) {
            self.clear_without_actions(old);
        }
        Ok(Some(old))
    }

    /// Capture the ordered handles and selection.
    pub fn snapshot(&self) -> StateSetSnapshot {
        StateSetSnapshot {
            states: self.states.clone(),
            selected: self.current,
        }
    }

    /// Disable every live handle except `target`, then enable `target`.
    fn apply(&mut self, host: &mut dyn SceneHost, target: Option<NodeId>) {
        for &node in &self.states {
            if Some(node) == target {
                continue;
            }
            if !host.contains(node) {
                log::warn!("Skipping detached state {}", node);
                continue;
            }
            self.actions.disable(host, node);
        }
        if let Some(node) = target {
            self.actions.enable(host, node);
        }
    }

    fn disable_joined(&mut self, host: &mut dyn SceneHost, node: NodeId) {
        if host.contains(node) {
            self.actions.disable(host, node);
        }
    }

    // The handle left the set; its host flag belongs to the owner now.
    fn clear_without_actions(&mut self, old: NodeId) {
        self.current = None;
        log::debug!("Current state {} left the set", old);
        self.listeners.notify(&StateChange {
            previous: Some(old),
            current: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneGraph;
    use crate::state::FnActions;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scene_with(names: &[&str]) -> (SceneGraph, Vec<NodeId>) {
        let mut scene = SceneGraph::new();
        let root = scene.spawn(None, "Panel", true);
        let ids = names
            .iter()
            .map(|name| scene.spawn(Some(root), name, false))
            .collect();
        (scene, ids)
    }

    fn record_changes<A: StateActions>(set: &mut StateSet<A>) -> Rc<RefCell<Vec<StateChange>>> {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        set.subscribe(move |change| sink.borrow_mut().push(*change));
        changes
    }

    fn active_states(scene: &SceneGraph, ids: &[NodeId]) -> Vec<NodeId> {
        ids.iter().copied().filter(|&id| scene.is_active(id)).collect()
    }

    #[test]
    fn test_example_scenario() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let (a, b, c) = (ids[0], ids[1], ids[2]);

        let calls = Rc::new(RefCell::new(Vec::new()));
        let on_enable = Rc::clone(&calls);
        let on_disable = Rc::clone(&calls);
        let actions = FnActions::new(
            move |host: &mut dyn SceneHost, node| {
                on_enable.borrow_mut().push(("enable", node));
                host.set_active(node, true);
            },
            move |host: &mut dyn SceneHost, node| {
                on_disable.borrow_mut().push(("disable", node));
                host.set_active(node, false);
            },
        );
        let mut set =
            StateSet::with_actions(&mut scene, ids.clone(), actions, StateSetConfig::default())
                .unwrap();
        let changes = record_changes(&mut set);
        assert_eq!(set.current(), None);

        set.next_state(&mut scene).unwrap();
        assert_eq!(set.current(), Some(a));
        assert_eq!(changes.borrow().last().copied(), Some(StateChange { previous: None, current: Some(a) }));

        set.set_state_by_name(&mut scene, "C").unwrap();
        assert_eq!(set.current(), Some(c));
        assert_eq!(changes.borrow().last().copied(), Some(StateChange { previous: Some(a), current: Some(c) }));

        set.set_state_index(&mut scene, 5).unwrap();
        assert_eq!(set.current(), Some(c));
        assert_eq!(changes.borrow().len(), 2);

        calls.borrow_mut().clear();
        set.set_state(&mut scene, Some(b)).unwrap();
        assert_eq!(set.current(), Some(b));
        assert!(calls.borrow().contains(&("enable", b)));
        assert!(calls.borrow().contains(&("disable", c)));
        assert!(!calls.borrow().contains(&("disable", b)));
        assert_eq!(changes.borrow().last().copied(), Some(StateChange { previous: Some(c), current: Some(b) }));
        assert_eq!(active_states(&scene, &ids), vec![b]);
    }

    #[test]
    fn test_initial_selection_from_active_flag() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        scene.set_active(ids[1], true);

        let set = StateSet::new(&mut scene, ids.clone()).unwrap();
        assert_eq!(set.current(), Some(ids[1]));
        assert_eq!(set.current_index(), Some(1));
        assert_eq!(set.current_name(&scene), "B");
    }

    #[test]
    fn test_multiple_active_first_wins() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        scene.set_active(ids[1], true);
        scene.set_active(ids[2], true);

        let set = StateSet::new(&mut scene, ids.clone()).unwrap();
        assert_eq!(set.current(), Some(ids[1]));
        // Construction normalizes the host.
        assert_eq!(active_states(&scene, &ids), vec![ids[1]]);
    }

    #[test]
    fn test_multiple_active_rejected() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        scene.set_active(ids[0], true);
        scene.set_active(ids[1], true);

        let config = StateSetConfig::default().with_initial(InitialSelection::Reject);
        let result = StateSet::with_actions(&mut scene, ids.clone(), ToggleActive, config);
        assert_eq!(result.unwrap_err(), StateError::MultipleActive(ids));
    }

    #[test]
    fn test_duplicate_states_rejected() {
        let (mut scene, ids) = scene_with(&["A"]);
        let result = StateSet::new(&mut scene, vec![ids[0], ids[0]]);
        assert_eq!(result.unwrap_err(), StateError::DuplicateState(ids[0]));
    }

    #[test]
    fn test_idempotent_set_state() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();
        let changes = record_changes(&mut set);

        // Flip the host flag behind the set's back; a no-op call must not repair it.
        scene.set_active(ids[1], true);
        set.set_state(&mut scene, Some(ids[0])).unwrap();
        assert!(changes.borrow().is_empty());
        assert!(scene.is_active(ids[1]));
    }

    #[test]
    fn test_foreign_handle_rejected_atomically() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let foreign = scene.spawn(None, "Foreign", false);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[1])).unwrap();
        let changes = record_changes(&mut set);

        let err = set.set_state(&mut scene, Some(foreign)).unwrap_err();
        assert_eq!(err, StateError::InvalidState(foreign));
        assert_eq!(set.current(), Some(ids[1]));
        assert_eq!(active_states(&scene, &ids), vec![ids[1]]);
        assert!(!scene.is_active(foreign));
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_detached_handle() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        scene.remove(ids[1]);

        let err = set.set_state(&mut scene, Some(ids[1])).unwrap_err();
        assert_eq!(err, StateError::DetachedState(ids[1]));

        // Other selections skip the detached handle.
        set.set_state(&mut scene, Some(ids[2])).unwrap();
        assert_eq!(set.current(), Some(ids[2]));
    }

    #[test]
    fn test_set_no_state() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state_index(&mut scene, 1).unwrap();
        let changes = record_changes(&mut set);

        set.set_no_state(&mut scene).unwrap();
        assert_eq!(set.current(), None);
        assert_eq!(set.current_index(), None);
        assert_eq!(set.current_name(&scene), "");
        assert!(active_states(&scene, &ids).is_empty());
        assert_eq!(*changes.borrow(), vec![StateChange { previous: Some(ids[1]), current: None }]);

        // Already cleared: no second notification.
        set.set_no_state(&mut scene).unwrap();
        assert_eq!(changes.borrow().len(), 1);
    }

    #[test]
    fn test_name_miss_ignore() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state_by_name(&mut scene, "A").unwrap();

        set.set_state_by_name(&mut scene, "Missing").unwrap();
        assert_eq!(set.current(), Some(ids[0]));
    }

    #[test]
    fn test_name_miss_clear() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let config = StateSetConfig::default().with_name_miss(NameMissPolicy::Clear);
        let mut set = StateSet::with_actions(&mut scene, ids.clone(), ToggleActive, config).unwrap();
        set.set_state_by_name(&mut scene, "A").unwrap();

        set.set_state_by_name(&mut scene, "Missing").unwrap();
        assert_eq!(set.current(), None);
        assert!(active_states(&scene, &ids).is_empty());
    }

    #[test]
    fn test_name_lookup_first_match() {
        let (mut scene, ids) = scene_with(&["Same", "Same"]);
        let set = StateSet::new(&mut scene, ids.clone()).unwrap();
        assert_eq!(set.get_state(&scene, "Same"), Some(ids[0]));
        assert_eq!(set.get_state(&scene, "Other"), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();

        set.previous_state(&mut scene).unwrap();
        assert_eq!(set.current_index(), Some(0));
        set.previous_state(&mut scene).unwrap();
        assert_eq!(set.current_index(), Some(2));
        set.next_state(&mut scene).unwrap();
        assert_eq!(set.current_index(), Some(0));
    }

    #[test]
    fn test_empty_set_is_safe() {
        let mut scene = SceneGraph::new();
        let mut set = StateSet::new(&mut scene, Vec::new()).unwrap();
        let changes = record_changes(&mut set);

        set.next_state(&mut scene).unwrap();
        set.previous_state(&mut scene).unwrap();
        set.set_state_index(&mut scene, 0).unwrap();
        assert_eq!(set.current(), None);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_single_notification_per_change() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        set.subscribe(move |change| sink.borrow_mut().push(*change));
        set.set_state(&mut scene, Some(ids[1])).unwrap();

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(active_states(&scene, &ids), vec![ids[1]]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = set.subscribe(move |_| *counter.borrow_mut() += 1);

        set.next_state(&mut scene).unwrap();
        assert!(set.unsubscribe(id));
        set.next_state(&mut scene).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_remove_current_clears_selection() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();
        let changes = record_changes(&mut set);

        assert!(set.remove_state(ids[0]));
        assert_eq!(set.current(), None);
        assert_eq!(set.states(), &[ids[1]]);
        assert_eq!(*changes.borrow(), vec![StateChange { previous: Some(ids[0]), current: None }]);
        assert!(!set.remove_state(ids[0]));
    }

    #[test]
    fn test_move_keeps_selection() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();

        assert!(set.move_state(0, 2));
        assert_eq!(set.states(), &[ids[1], ids[2], ids[0]]);
        assert_eq!(set.current(), Some(ids[0]));
        assert_eq!(set.current_index(), Some(2));
        assert!(!set.move_state(0, 3));
    }

    #[test]
    fn test_add_and_replace() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let extra = scene.spawn(None, "Extra", false);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();

        assert_eq!(set.add_state(&mut scene, ids[0]), Err(StateError::DuplicateState(ids[0])));
        set.add_state(&mut scene, extra).unwrap();
        assert_eq!(set.len(), 3);

        let other = scene.spawn(None, "Other", false);
        assert_eq!(set.replace_state(&mut scene, 0, extra), Err(StateError::DuplicateState(extra)));
        assert_eq!(set.replace_state(&mut scene, 9, other), Ok(None));
        assert_eq!(set.replace_state(&mut scene, 0, ids[0]), Ok(Some(ids[0])));
    }

    #[test]
    fn test_replace_current_notifies_clear() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let other = scene.spawn(None, "Other", false);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[1])).unwrap();
        let changes = record_changes(&mut set);

        assert_eq!(set.replace_state(&mut scene, 1, other), Ok(Some(ids[1])));
        assert_eq!(set.current(), None);
        assert_eq!(set.states(), &[ids[0], other]);
        assert_eq!(*changes.borrow(), vec![StateChange { previous: Some(ids[1]), current: None }]);
    }

    #[test]
    fn test_added_active_node_is_disabled() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();
        let changes = record_changes(&mut set);

        let joined = scene.spawn(None, "Joined", true);
        set.add_state(&mut scene, joined).unwrap();
        assert!(!scene.is_active(joined));
        assert!(changes.borrow().is_empty());

        // The idempotent path must not leave two states active.
        set.set_state(&mut scene, Some(ids[0])).unwrap();
        assert_eq!(active_states(&scene, set.states()), vec![ids[0]]);
    }

    #[test]
    fn test_replacing_node_is_disabled() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[0])).unwrap();

        let incoming = scene.spawn(None, "Incoming", true);
        assert_eq!(set.replace_state(&mut scene, 1, incoming), Ok(Some(ids[1])));
        assert_eq!(set.current(), Some(ids[0]));
        assert_eq!(active_states(&scene, set.states()), vec![ids[0]]);
    }

    #[test]
    fn test_snapshot_restore() {
        let (mut scene, ids) = scene_with(&["A", "B", "C"]);
        let mut set = StateSet::new(&mut scene, ids.clone()).unwrap();
        set.set_state(&mut scene, Some(ids[2])).unwrap();
        let json = set.snapshot().to_json().unwrap();

        // Host drifts before the restore.
        scene.set_active(ids[0], true);
        let snapshot = StateSetSnapshot::from_json(&json).unwrap();
        let restored =
            StateSet::restore(&mut scene, snapshot, ToggleActive, StateSetConfig::default()).unwrap();
        assert_eq!(restored.current(), Some(ids[2]));
        assert_eq!(active_states(&scene, &ids), vec![ids[2]]);
    }

    #[test]
    fn test_restore_rejects_foreign_selection() {
        let (mut scene, ids) = scene_with(&["A"]);
        let foreign = NodeId::new();
        let snapshot = StateSetSnapshot {
            states: ids,
            selected: Some(foreign),
        };
        let result = StateSet::restore(&mut scene, snapshot, ToggleActive, StateSetConfig::default());
        assert_eq!(result.unwrap_err(), StateError::InvalidState(foreign));
    }

    #[test]
    fn test_restore_rejects_removed_selection() {
        let (mut scene, ids) = scene_with(&["A", "B"]);
        scene.set_active(ids[0], true);
        let snapshot = StateSetSnapshot {
            states: ids.clone(),
            selected: Some(ids[1]),
        };
        scene.remove(ids[1]);

        let result = StateSet::restore(&mut scene, snapshot, ToggleActive, StateSetConfig::default());
        assert_eq!(result.unwrap_err(), StateError::DetachedState(ids[1]));
        // Nothing was touched before the failure.
        assert!(scene.is_active(ids[0]));
    }
}
