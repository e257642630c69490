//! Page indicator: one dot per state, the current state highlighted.

use egui::{vec2, CursorIcon, Pos2, Sense, Stroke, Ui};
use viewstate_core::{SceneHost, StateActions, StateResult, StateSet};

use crate::{sizing, theme};

/// What a call to [`PageIndicator::sync`] had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorSync {
    /// The dots were rebuilt because the number of states changed.
    pub rebuilt: bool,
    /// The highlighted dot moved.
    pub highlighted: bool,
}

/// Mirrors a state set as a row of toggles.
///
/// Only the last polled count and index are remembered; the state set
/// stays the single source of truth.
#[derive(Debug, Clone, Default)]
pub struct PageIndicator {
    toggles: Vec<bool>,
    last_count: Option<usize>,
    last_index: Option<usize>,
}

impl PageIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle states, one per state in the set.
    pub fn toggles(&self) -> &[bool] {
        &self.toggles
    }

    /// Poll the set and update the toggles.
    pub fn sync<A: StateActions>(&mut self, set: &StateSet<A>) -> IndicatorSync {
        let mut outcome = IndicatorSync::default();
        let count = set.len();
        if self.last_count != Some(count) {
            self.toggles = vec![false; count];
            self.last_count = Some(count);
            self.last_index = None;
            outcome.rebuilt = true;
        }

        let index = set.current_index();
        if outcome.rebuilt || index != self.last_index {
            self.toggles.iter_mut().for_each(|t| *t = false);
            if let Some(toggle) = index.and_then(|i| self.toggles.get_mut(i)) {
                *toggle = true;
            }
            self.last_index = index;
            outcome.highlighted = true;
        }
        outcome
    }

    /// Forward a toggle switched on by the user.
    pub fn toggle<A: StateActions>(
        &mut self,
        index: usize,
        set: &mut StateSet<A>,
        host: &mut dyn SceneHost,
    ) -> StateResult<()> {
        set.set_state_index(host, index)?;
        self.sync(set);
        Ok(())
    }

    /// Draw the dots and forward clicks. Returns the clicked index, if any.
    pub fn show<A: StateActions>(
        &mut self,
        ui: &mut Ui,
        set: &mut StateSet<A>,
        host: &mut dyn SceneHost,
    ) -> StateResult<Option<usize>> {
        self.sync(set);

        let mut clicked = None;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = sizing::DOT_SPACING;
            let size = vec2(sizing::DOT_RADIUS * 2.0, sizing::DOT_RADIUS * 2.0);
            for (i, &on) in self.toggles.iter().enumerate() {
                let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                if ui.is_rect_visible(rect) {
                    let center: Pos2 = rect.center();
                    if on {
                        ui.painter().circle_filled(center, sizing::DOT_RADIUS, theme::ACCENT);
                    } else {
                        let color = if response.hovered() {
                            theme::TEXT_MUTED
                        } else {
                            theme::BORDER
                        };
                        ui.painter()
                            .circle_stroke(center, sizing::DOT_RADIUS - 0.5, Stroke::new(1.0, color));
                    }
                }
                if response.on_hover_cursor(CursorIcon::PointingHand).clicked() && !on {
                    clicked = Some(i);
                }
            }
        });

        if let Some(index) = clicked {
            self.toggle(index, set, host)?;
        }
        Ok(clicked)
    }
}
