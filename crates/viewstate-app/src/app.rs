//! Editor session: scene, panels and the observers that mirror them.

use std::collections::HashMap;

use thiserror::Error;
use viewstate_core::{
    ControllerId, NodeId, SceneGraph, SceneHost, StateError, StateSet, StateSetSnapshot,
    ToggleActive,
};
use viewstate_widgets::{HierarchyOverlay, ListAction, PageIndicator, StateListEditor, Visibility};

use crate::commands::Command;
use crate::config::{AppConfig, ConfigError};

/// Demo shell errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error("Unknown panel '{0}'")]
    UnknownPanel(String),
    #[error("Unknown node '{0}'")]
    UnknownNode(String),
    #[error("Missing value for {0}")]
    MissingArgument(String),
}

fn log_changes(set: &mut StateSet, panel: &str) {
    let label = panel.to_string();
    set.subscribe(move |change| {
        log::info!("[{}] {:?} -> {:?}", label, change.previous, change.current);
    });
}

/// A panel: the parent node of a state set plus its per-panel observers.
#[derive(Debug)]
struct Panel {
    id: ControllerId,
    name: String,
    root: NodeId,
    indicator: PageIndicator,
    editor: StateListEditor,
}

/// One editor session.
#[derive(Debug)]
pub struct Session {
    title: String,
    scene: SceneGraph,
    controllers: HashMap<ControllerId, StateSet>,
    panels: Vec<Panel>,
    focused: usize,
    overlay: HierarchyOverlay,
}

impl Session {
    /// Build the scene and state sets described by the config.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let mut scene = SceneGraph::new();
        let mut controllers = HashMap::new();
        let mut panels = Vec::new();

        for panel in &config.panels {
            let root = scene.spawn(None, &panel.name, true);
            let states: Vec<NodeId> = panel
                .states
                .iter()
                .map(|name| {
                    let active = panel.selected.as_deref() == Some(name.as_str());
                    scene.spawn(Some(root), name, active)
                })
                .collect();

            let mut set = StateSet::with_actions(&mut scene, states, ToggleActive, panel.config)?;
            log_changes(&mut set, &panel.name);

            let id = ControllerId::new();
            controllers.insert(id, set);
            panels.push(Panel {
                id,
                name: panel.name.clone(),
                root,
                indicator: PageIndicator::new(),
                editor: StateListEditor::new(Some(root)),
            });
        }

        let mut session = Self {
            title: config.title,
            scene,
            controllers,
            panels,
            focused: 0,
            overlay: HierarchyOverlay::new(),
        };
        session.refresh_observers();
        log::info!("Session '{}' started with {} panels", session.title, session.panels.len());
        Ok(session)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Name of the focused panel.
    pub fn focused_panel(&self) -> Option<&str> {
        self.panels.get(self.focused).map(|p| p.name.as_str())
    }

    /// State set of a panel, by panel name.
    pub fn state_set(&self, panel: &str) -> Option<&StateSet> {
        let panel = self.panels.iter().find(|p| p.name == panel)?;
        self.controllers.get(&panel.id)
    }

    /// Indicator toggles of a panel, by panel name.
    pub fn indicator(&self, panel: &str) -> Option<&[bool]> {
        self.panels
            .iter()
            .find(|p| p.name == panel)
            .map(|p| p.indicator.toggles())
    }

    /// Run one command against the focused panel.
    pub fn execute(&mut self, command: &Command) -> Result<(), AppError> {
        if let Command::Focus(name) = command {
            self.focused = self
                .panels
                .iter()
                .position(|p| &p.name == name)
                .ok_or_else(|| AppError::UnknownPanel(name.clone()))?;
            return Ok(());
        }
        if let Command::Toggle(name) = command {
            let node = self
                .scene
                .find_by_name(name)
                .ok_or_else(|| AppError::UnknownNode(name.clone()))?;
            let on = self.overlay.visibility(node, &self.scene) == Some(Visibility::Hidden);
            self.overlay
                .toggle(node, on, &mut self.controllers, &mut self.scene)?;
            self.refresh_observers();
            return Ok(());
        }

        let panel = self
            .panels
            .get(self.focused)
            .ok_or_else(|| AppError::UnknownPanel("<none>".to_string()))?;
        let set = self
            .controllers
            .get_mut(&panel.id)
            .ok_or_else(|| AppError::UnknownPanel(panel.name.clone()))?;
        let scene = &mut self.scene;

        let mut edited = false;
        match command {
            Command::Next => set.next_state(scene)?,
            Command::Previous => set.previous_state(scene)?,
            Command::NoState => set.set_no_state(scene)?,
            Command::Show(name) => set.set_state_by_name(scene, name)?,
            Command::Index(index) => set.set_state_index(scene, *index)?,
            Command::Add => edited = panel.editor.apply(ListAction::Add, set, scene)?,
            Command::Remove(index) => {
                edited = panel.editor.apply(ListAction::Remove(*index), set, scene)?
            }
            Command::MoveUp(index) => {
                edited = panel.editor.apply(ListAction::MoveUp(*index), set, scene)?
            }
            Command::MoveDown(index) => {
                edited = panel.editor.apply(ListAction::MoveDown(*index), set, scene)?
            }
            Command::Snapshot => println!("{}", set.snapshot().to_json()?),
            Command::Focus(_) | Command::Toggle(_) => {}
        }

        if edited {
            // Removing a state does not touch the scene, so the revision alone
            // would not trigger a rebuild.
            self.overlay.invalidate();
        }
        self.refresh_observers();
        Ok(())
    }

    /// Replace a panel's state set from a snapshot.
    pub fn restore(&mut self, panel: &str, snapshot: StateSetSnapshot) -> Result<(), AppError> {
        let panel = self
            .panels
            .iter()
            .find(|p| p.name == panel)
            .ok_or_else(|| AppError::UnknownPanel(panel.to_string()))?;
        let config = self
            .controllers
            .get(&panel.id)
            .map(|s| *s.config())
            .unwrap_or_default();
        let mut set = StateSet::restore(&mut self.scene, snapshot, ToggleActive, config)?;
        log_changes(&mut set, &panel.name);
        self.controllers.insert(panel.id, set);
        self.overlay.invalidate();
        self.refresh_observers();
        Ok(())
    }

    /// Poll every observer, the way an editor would once per frame.
    fn refresh_observers(&mut self) {
        let ordered = self
            .panels
            .iter()
            .filter_map(|p| self.controllers.get(&p.id).map(|set| (p.id, set)));
        self.overlay.refresh(self.scene.revision(), ordered);
        for panel in &mut self.panels {
            if let Some(set) = self.controllers.get(&panel.id) {
                let sync = panel.indicator.sync(set);
                if sync.rebuilt {
                    log::debug!("[{}] indicator rebuilt with {} dots", panel.name, set.len());
                }
            }
        }
    }

    /// One line per panel: indicator dots and the current state.
    pub fn status(&self) -> String {
        let mut lines = Vec::new();
        for (i, panel) in self.panels.iter().enumerate() {
            let Some(set) = self.controllers.get(&panel.id) else {
                continue;
            };
            let dots: String = panel
                .indicator
                .toggles()
                .iter()
                .map(|&on| if on { '●' } else { '○' })
                .collect();
            let current = match set.current_name(&self.scene) {
                "" => "(none)",
                name => name,
            };
            let marker = if i == self.focused { '>' } else { ' ' };
            lines.push(format!("{} {:12} {} {}", marker, panel.name, dots, current));
        }
        lines.join("\n")
    }

    /// Text rendering of the hierarchy with overlay icons.
    pub fn hierarchy_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for panel in &self.panels {
            lines.push(panel.name.clone());
            for child in self.scene.children(panel.root) {
                let name = self.scene.name(child).unwrap_or("<missing>");
                let icon = match self.overlay.visibility(child, &self.scene) {
                    Some(Visibility::Visible) => "[x]",
                    Some(Visibility::Hidden) => "[ ]",
                    None => "   ",
                };
                lines.push(format!("  {} {}", icon, name));
            }
        }
        lines
    }

    /// End the session and release the overlay registry.
    pub fn shutdown(&mut self) {
        self.overlay.teardown();
        log::info!("Session '{}' closed", self.title);
    }
}
