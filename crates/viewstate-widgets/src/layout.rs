//! Row layout shared by the state list and the hierarchy overlay.

use egui::{vec2, RichText, Sense, Stroke, Ui};

use crate::inspector::ListColumn;
use crate::{sizing, theme};

/// Gap taken by a row separator.
const SEPARATOR_GAP: f32 = 6.0;

/// Title and column names of a state list.
///
/// The names are inset by [`sizing::HEADER_INSET`] so they line up with the
/// rows below, which start with the reorder handles.
pub fn list_header(ui: &mut Ui, title: &str, columns: &[ListColumn], widths: &[f32]) {
    ui.label(RichText::new(title).size(10.0).color(theme::TEXT_MUTED));
    ui.horizontal(|ui| {
        ui.add_space(sizing::HEADER_INSET);
        for (column, width) in columns.iter().zip(widths) {
            ui.add_sized(
                [*width, sizing::ROW_HEIGHT],
                egui::Label::new(RichText::new(column.name).color(theme::TEXT_MUTED)),
            );
        }
    });
    row_separator(ui);
}

/// Thin line between the header and the rows.
pub fn row_separator(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), SEPARATOR_GAP), Sense::hover());
    ui.painter()
        .hline(rect.x_range(), rect.center().y, Stroke::new(1.0, theme::BORDER));
}

/// Indent a hierarchy row by its depth.
pub fn indent(ui: &mut Ui, depth: usize) {
    ui.add_space(depth as f32 * sizing::INDENT);
}
