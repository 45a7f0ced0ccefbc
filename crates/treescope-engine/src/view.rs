//! Render-facing data the engine hands to the drawing layer. The terminal
//! renderer consumes these and nothing else.

/// One visible child row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    pub is_selected: bool,
    /// Sentinels, nulls and callables render dimmed.
    pub is_dimmed: bool,
}

/// The explorer panel for the current node's active category. `rows` holds
/// only the visible window; `position`/`total` feed the "x / y" indicator
/// (`position` is 1-based, 0 when the view is empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub title: String,
    /// Category header entries: (label, is_active).
    pub categories: Vec<(String, bool)>,
    pub rows: Vec<RowView>,
    pub position: usize,
    pub total: usize,
}

/// One entry of the ancestor trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailEntry {
    pub label: String,
    pub is_current: bool,
}

/// One row of the filter panel's predicate checkbox list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub label: String,
    pub enabled: bool,
    pub is_selected: bool,
}

/// The preview panel: the selected child's value, type and length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub path: String,
    pub type_label: String,
    pub len: Option<usize>,
    pub text: String,
}
