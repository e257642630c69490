//! egui observers for view state sets.
//!
//! Observers never hold their own copy of the selection. They poll the
//! state set each frame and forward user input back into it:
//!
//! - **Indicator**: one dot per state, the current one highlighted
//! - **Hierarchy**: visibility icons on every row that belongs to a state set
//! - **Inspector**: editable, reorderable list of a set's states

pub mod hierarchy;
pub mod indicator;
pub mod inspector;
pub mod layout;

pub use hierarchy::{HierarchyOverlay, Visibility};
pub use indicator::{IndicatorSync, PageIndicator};
pub use inspector::{
    column_widths, ColumnWidth, ListAction, ListColumn, StateListEditor, StateRow, STATE_COLUMNS,
};
pub use layout::{indent, list_header, row_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small button size (visibility toggles)
    pub const SMALL: f32 = 20.0;
    /// Indicator dot radius
    pub const DOT_RADIUS: f32 = 5.0;
    /// Gap between indicator dots
    pub const DOT_SPACING: f32 = 6.0;
    /// Row height for list and hierarchy rows
    pub const ROW_HEIGHT: f32 = 18.0;
    /// Horizontal inset of list headers (room for the drag handle)
    pub const HEADER_INSET: f32 = 14.0;
    /// Indent per hierarchy depth level
    pub const INDENT: f32 = 12.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
}
