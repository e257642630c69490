//! Inspector list for a state set: reorder, add, remove and activate states.

use egui::{Button, RichText, Ui};
use viewstate_core::{NodeId, SceneHost, StateActions, StateResult, StateSet};

use crate::layout::list_header;
use crate::{sizing, theme};

/// Width rule for a list column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in points.
    Fixed(f32),
    /// Share of whatever the fixed columns leave over.
    Ratio(f32),
}

/// A column of the state list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListColumn {
    pub name: &'static str,
    pub width: ColumnWidth,
}

/// Index, state name, spacer, visibility toggle.
pub const STATE_COLUMNS: [ListColumn; 4] = [
    ListColumn { name: "Id", width: ColumnWidth::Fixed(20.0) },
    ListColumn { name: "State", width: ColumnWidth::Ratio(1.0) },
    ListColumn { name: "", width: ColumnWidth::Fixed(10.0) },
    ListColumn { name: "", width: ColumnWidth::Fixed(15.0) },
];

/// Resolve column widths for a row of `total` points.
///
/// Fixed columns are laid out first; ratio columns split the remainder,
/// which never goes below zero.
pub fn column_widths(columns: &[ListColumn], total: f32) -> Vec<f32> {
    let fixed: f32 = columns
        .iter()
        .filter_map(|c| match c.width {
            ColumnWidth::Fixed(w) => Some(w),
            ColumnWidth::Ratio(_) => None,
        })
        .sum();
    let remainder = (total - fixed).max(0.0);
    columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Ratio(r) => (remainder * r).floor(),
        })
        .collect()
}

/// One row of the list, as read from the set and the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRow {
    pub index: usize,
    pub node: NodeId,
    pub name: String,
    pub active: bool,
    pub current: bool,
    /// The node no longer exists in the host.
    pub detached: bool,
}

/// User action on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Make the state at this index current.
    Select(usize),
    MoveUp(usize),
    MoveDown(usize),
    /// Create a new node and append it as a state.
    Add,
    Remove(usize),
}

/// Inspector list editor for one state set.
#[derive(Debug, Clone, Default)]
pub struct StateListEditor {
    /// Parent for nodes created with [`ListAction::Add`].
    parent: Option<NodeId>,
}

impl StateListEditor {
    pub fn new(parent: Option<NodeId>) -> Self {
        Self { parent }
    }

    /// Read the rows to display.
    pub fn rows<A: StateActions>(&self, set: &StateSet<A>, host: &dyn SceneHost) -> Vec<StateRow> {
        set.states()
            .iter()
            .enumerate()
            .map(|(index, &node)| StateRow {
                index,
                node,
                name: host.name(node).unwrap_or("<missing>").to_string(),
                active: host.is_active(node),
                current: set.current() == Some(node),
                detached: !host.contains(node),
            })
            .collect()
    }

    /// Apply an action to the set. Returns true if the set changed.
    pub fn apply<A: StateActions>(
        &self,
        action: ListAction,
        set: &mut StateSet<A>,
        host: &mut dyn SceneHost,
    ) -> StateResult<bool> {
        match action {
            ListAction::Select(index) => {
                let before = set.current();
                set.set_state_index(host, index)?;
                Ok(set.current() != before)
            }
            ListAction::MoveUp(index) => Ok(index > 0 && set.move_state(index, index - 1)),
            ListAction::MoveDown(index) => Ok(set.move_state(index, index + 1)),
            ListAction::Add => {
                let name = format!("State {}", set.len());
                let node = host.create_child(self.parent, &name);
                set.add_state(host, node)?;
                log::debug!("Added state '{}' ({})", name, node);
                Ok(true)
            }
            ListAction::Remove(index) => match set.states().get(index).copied() {
                Some(node) => Ok(set.remove_state(node)),
                None => Ok(false),
            },
        }
    }

    /// Draw the list and apply whatever the user did this frame.
    pub fn show<A: StateActions>(
        &self,
        ui: &mut Ui,
        set: &mut StateSet<A>,
        host: &mut dyn SceneHost,
    ) -> StateResult<Option<ListAction>> {
        let rows = self.rows(set, host);
        let widths = column_widths(&STATE_COLUMNS, ui.available_width() - sizing::HEADER_INSET);
        let mut action = None;

        list_header(ui, "States", &STATE_COLUMNS, &widths);

        let last = rows.len().saturating_sub(1);
        for row in &rows {
            ui.horizontal(|ui| {
                if ui.add_enabled(row.index > 0, Button::new("▲").small()).clicked() {
                    action = Some(ListAction::MoveUp(row.index));
                }
                if ui.add_enabled(row.index < last, Button::new("▼").small()).clicked() {
                    action = Some(ListAction::MoveDown(row.index));
                }
                ui.add_sized(
                    [widths[0], sizing::ROW_HEIGHT],
                    egui::Label::new(RichText::new(row.index.to_string()).color(theme::TEXT_MUTED)),
                );
                let color = if row.detached { theme::TEXT_MUTED } else { theme::TEXT };
                let name = RichText::new(&row.name).color(color);
                ui.add_sized(
                    [widths[1], sizing::ROW_HEIGHT],
                    egui::Label::new(if row.current { name.strong() } else { name }),
                );
                ui.add_space(widths[2]);
                let icon = if row.active { "👁" } else { "–" };
                let toggle = ui.add_enabled(
                    !row.detached,
                    Button::new(RichText::new(icon).color(if row.active {
                        theme::ACCENT
                    } else {
                        theme::TEXT_MUTED
                    }))
                    .frame(false),
                );
                // Only switching on is forwarded; switching off has no meaning
                // for an exclusive selection.
                if toggle.clicked() && !row.active {
                    action = Some(ListAction::Select(row.index));
                }
                if ui.small_button("✕").on_hover_text("Remove state").clicked() {
                    action = Some(ListAction::Remove(row.index));
                }
            });
        }

        if ui.button("+ Add state").clicked() {
            action = Some(ListAction::Add);
        }

        if let Some(action) = action {
            self.apply(action, set, host)?;
        }
        Ok(action)
    }
}
