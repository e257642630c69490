//! Visibility icons drawn next to hierarchy rows that belong to a state set.

use std::collections::HashMap;

use egui::{RichText, Ui};
use viewstate_core::{
    ControllerId, ControllerRegistry, NodeId, SceneHost, StateActions, StateResult, StateSet,
};

use crate::layout::indent;
use crate::{sizing, theme};

/// Icon shown for a registered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    fn icon(self) -> &'static str {
        match self {
            Visibility::Visible => "👁",
            Visibility::Hidden => "–",
        }
    }
}

/// Hierarchy overlay for one editor session.
///
/// Owns the node-to-controller registry. Call [`HierarchyOverlay::refresh`]
/// whenever the hierarchy may have changed and [`HierarchyOverlay::teardown`]
/// when the session ends.
#[derive(Debug, Default)]
pub struct HierarchyOverlay {
    registry: ControllerRegistry,
}

impl HierarchyOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &ControllerRegistry {
        &self.registry
    }

    /// Rebuild the registry if the scene changed since the last build.
    /// Returns true if a rebuild happened.
    ///
    /// `controllers` must come in a stable order (panel order in a session):
    /// the first controller to claim a shared node owns it.
    pub fn refresh<'a, A: StateActions + 'a>(
        &mut self,
        revision: u64,
        controllers: impl IntoIterator<Item = (ControllerId, &'a StateSet<A>)>,
    ) -> bool {
        if self.registry.is_current(revision) {
            return false;
        }
        self.registry.rebuild(revision, controllers);
        true
    }

    /// Force a rebuild on the next refresh, e.g. after a set's states were edited.
    pub fn invalidate(&mut self) {
        self.registry.clear();
    }

    /// End of session.
    pub fn teardown(&mut self) {
        self.registry.clear();
        log::debug!("Hierarchy overlay torn down");
    }

    /// Icon for a node, `None` when no state set manages it.
    pub fn visibility(&self, node: NodeId, host: &dyn SceneHost) -> Option<Visibility> {
        if !self.registry.contains(node) {
            return None;
        }
        Some(if host.is_active(node) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        })
    }

    /// Handle the user flipping a node's icon.
    ///
    /// Switching a node on selects it in its owning set. Switching it off is
    /// ignored: some state has to be current and the user picks which one.
    /// Returns true if a selection was forwarded.
    pub fn toggle<A: StateActions>(
        &self,
        node: NodeId,
        on: bool,
        controllers: &mut HashMap<ControllerId, StateSet<A>>,
        host: &mut dyn SceneHost,
    ) -> StateResult<bool> {
        if !on {
            return Ok(false);
        }
        let Some(owner) = self.registry.owner_of(node) else {
            return Ok(false);
        };
        let Some(set) = controllers.get_mut(&owner) else {
            log::warn!("Registry points {} at missing controller {}", node, owner);
            return Ok(false);
        };
        set.set_state(host, Some(node))?;
        Ok(true)
    }

    /// Draw one hierarchy row: the node name and, for registered nodes,
    /// the visibility icon.
    pub fn show_row<A: StateActions>(
        &self,
        ui: &mut Ui,
        node: NodeId,
        depth: usize,
        controllers: &mut HashMap<ControllerId, StateSet<A>>,
        host: &mut dyn SceneHost,
    ) -> StateResult<()> {
        let name = host.name(node).unwrap_or("<missing>").to_string();
        let visibility = self.visibility(node, host);

        let mut flipped = None;
        ui.horizontal(|ui| {
            indent(ui, depth);
            ui.label(RichText::new(&name).color(theme::TEXT));
            if let Some(visibility) = visibility {
                let mut on = visibility == Visibility::Visible;
                let color = if on { theme::ACCENT } else { theme::TEXT_MUTED };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let response = ui.add_sized(
                        [sizing::SMALL, sizing::ROW_HEIGHT],
                        egui::Button::new(RichText::new(visibility.icon()).color(color)).frame(false),
                    );
                    if response.clicked() {
                        on = !on;
                        flipped = Some(on);
                    }
                });
            }
        });

        if let Some(on) = flipped {
            self.toggle(node, on, controllers, host)?;
        }
        Ok(())
    }
}
