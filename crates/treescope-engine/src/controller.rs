use crate::filter::FilterSet;
use crate::node::Node;
use crate::stack::{Frame, NavStack};
use crate::view::{FilterRow, PaneView, PreviewView, RowView, TrailEntry};
use crate::viewport::Viewport;
use std::rc::Rc;
use treescope_types::{Category, EntityHandle, EntityKind, Inspect, PredicateKind};

/// Abstract commands fed in by the key-mapping layer. The controller never
/// sees raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveTop,
    MoveBottom,
    /// Enter the selected child; doubles as "accept" inside overlays.
    Descend,
    /// Return to the parent; doubles as "cancel" inside overlays.
    Ascend,
    ToggleCategory,
    OpenFilter,
    OpenSearch,
    OpenStack,
    ToggleHelp,
    TogglePredicate,
    ClearFilters,
    Input(char),
    Backspace,
    Cancel,
    Quit,
    QuitAndPrint,
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
    /// Quit and print this value to stdout once the terminal is restored.
    Emit(String),
}

enum Overlay {
    None,
    Filter { cursor: usize },
    Search { draft: String, saved: String },
    Stack { cursor: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    None,
    Filter,
    Search,
    Stack,
}

/// Whether keys should be read as text (search capture) or as bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Text,
}

/// The top-level state machine: owns the inspector, the navigation stack
/// and the overlay state, and translates commands into component calls.
/// Everything is mutated synchronously, one command at a time.
pub struct Controller {
    inspector: Box<dyn Inspect>,
    stack: NavStack,
    overlay: Overlay,
    help_visible: bool,
    live_filter: bool,
    page: usize,
}

impl Controller {
    pub fn new(
        inspector: Box<dyn Inspect>,
        root: EntityHandle,
        root_label: &str,
        live_filter: bool,
    ) -> Self {
        let node = Node::classify(inspector.as_ref(), root, root_label, root_label);
        Controller {
            inspector,
            stack: NavStack::new(Frame::for_node(node)),
            overlay: Overlay::None,
            help_visible: false,
            live_filter,
            page: 10,
        }
    }

    /// Update the visible-row budget from the current terminal size. Called
    /// before every draw; a resize is just a redraw with a new budget.
    pub fn set_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.reclamp_all();
        }
    }

    pub fn handle(&mut self, cmd: Command) -> Outcome {
        if self.help_visible {
            match cmd {
                Command::ToggleHelp | Command::Cancel | Command::Ascend => {
                    self.help_visible = false;
                }
                Command::Quit => return Outcome::Quit,
                _ => {}
            }
            return Outcome::Continue;
        }

        match cmd {
            Command::ToggleHelp => {
                self.help_visible = true;
                return Outcome::Continue;
            }
            Command::Quit => return Outcome::Quit,
            _ => {}
        }

        match self.overlay {
            Overlay::None => self.browsing(cmd),
            Overlay::Filter { .. } => self.filter_overlay(cmd),
            Overlay::Search { .. } => self.search_overlay(cmd),
            Overlay::Stack { .. } => self.stack_overlay(cmd),
        }
    }

    fn browsing(&mut self, cmd: Command) -> Outcome {
        match cmd {
            Command::MoveUp => {
                if let Some(cat) = self.active_category() {
                    self.stack.top_mut().viewport_mut(cat).move_up();
                }
            }
            Command::MoveDown => {
                if let Some(cat) = self.active_category() {
                    let len = self.filtered_len(cat);
                    let page = self.page;
                    self.stack.top_mut().viewport_mut(cat).move_down(len, page);
                }
            }
            Command::MoveTop => {
                if let Some(cat) = self.active_category() {
                    self.stack.top_mut().viewport_mut(cat).move_top();
                }
            }
            Command::MoveBottom => {
                if let Some(cat) = self.active_category() {
                    let len = self.filtered_len(cat);
                    let page = self.page;
                    self.stack.top_mut().viewport_mut(cat).move_bottom(len, page);
                }
            }
            Command::Descend => self.descend(),
            Command::Ascend => {
                // No-op at the root. The frame below resumes as saved, then
                // is re-clamped in case the page shrank while descended.
                if self.stack.pop().is_some() {
                    self.reclamp_all();
                }
            }
            Command::ToggleCategory => {
                self.stack.top_mut().selector.toggle();
                if let Some(cat) = self.active_category() {
                    let len = self.filtered_len(cat);
                    let page = self.page;
                    self.stack.top_mut().viewport_mut(cat).reclamp(len, page);
                }
            }
            Command::OpenFilter => self.overlay = Overlay::Filter { cursor: 0 },
            Command::OpenSearch => {
                let pattern = self.stack.top().filters.pattern().to_string();
                self.overlay = Overlay::Search {
                    draft: pattern.clone(),
                    saved: pattern,
                };
            }
            Command::OpenStack => {
                self.overlay = Overlay::Stack {
                    cursor: self.stack.depth() - 1,
                };
            }
            Command::ClearFilters => {
                self.stack.top_mut().filters.clear();
                self.reclamp_all();
            }
            Command::QuitAndPrint => return Outcome::Emit(self.emit_text()),
            _ => {}
        }
        Outcome::Continue
    }

    fn filter_overlay(&mut self, cmd: Command) -> Outcome {
        let Overlay::Filter { cursor } = self.overlay else {
            return Outcome::Continue;
        };
        let count = PredicateKind::ALL.len();
        match cmd {
            Command::MoveUp => {
                self.overlay = Overlay::Filter { cursor: cursor.saturating_sub(1) };
            }
            Command::MoveDown => {
                self.overlay = Overlay::Filter { cursor: (cursor + 1).min(count - 1) };
            }
            Command::MoveTop => self.overlay = Overlay::Filter { cursor: 0 },
            Command::MoveBottom => self.overlay = Overlay::Filter { cursor: count - 1 },
            Command::TogglePredicate => {
                self.stack.top_mut().filters.toggle(PredicateKind::ALL[cursor]);
                self.reclamp_all();
            }
            Command::ClearFilters => {
                self.stack.top_mut().filters.clear();
                self.reclamp_all();
            }
            Command::OpenSearch => {
                let pattern = self.stack.top().filters.pattern().to_string();
                self.overlay = Overlay::Search {
                    draft: pattern.clone(),
                    saved: pattern,
                };
            }
            Command::Descend | Command::Ascend | Command::Cancel | Command::OpenFilter => {
                self.overlay = Overlay::None;
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn search_overlay(&mut self, cmd: Command) -> Outcome {
        match cmd {
            Command::Input(c) => {
                if let Overlay::Search { draft, .. } = &mut self.overlay {
                    draft.push(c);
                }
                if self.live_filter {
                    self.apply_draft();
                }
            }
            Command::Backspace => {
                let mut cancel = false;
                if let Overlay::Search { draft, .. } = &mut self.overlay {
                    if draft.is_empty() {
                        cancel = true;
                    } else {
                        draft.pop();
                    }
                }
                if cancel {
                    self.cancel_search();
                } else if self.live_filter {
                    self.apply_draft();
                }
            }
            Command::Descend => self.commit_search(),
            Command::Ascend | Command::Cancel => self.cancel_search(),
            _ => {}
        }
        Outcome::Continue
    }

    fn stack_overlay(&mut self, cmd: Command) -> Outcome {
        let Overlay::Stack { cursor } = self.overlay else {
            return Outcome::Continue;
        };
        let depth = self.stack.depth();
        match cmd {
            Command::MoveUp => {
                self.overlay = Overlay::Stack { cursor: cursor.saturating_sub(1) };
            }
            Command::MoveDown => {
                self.overlay = Overlay::Stack { cursor: (cursor + 1).min(depth - 1) };
            }
            Command::MoveTop => self.overlay = Overlay::Stack { cursor: 0 },
            Command::MoveBottom => self.overlay = Overlay::Stack { cursor: depth - 1 },
            Command::Descend => {
                self.overlay = Overlay::None;
                // Discarded deeper history is intentionally dropped. The
                // restored frame may predate the current page size.
                if self.stack.jump_to(cursor).is_some() {
                    self.reclamp_all();
                }
            }
            Command::Ascend | Command::Cancel | Command::OpenStack => {
                self.overlay = Overlay::None;
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn descend(&mut self) {
        let Some(child) = self.selected_child() else {
            return;
        };
        if !child.is_enterable() {
            return;
        }
        self.stack.push(Frame::for_node(child));
    }

    fn commit_search(&mut self) {
        if let Overlay::Search { draft, .. } = std::mem::replace(&mut self.overlay, Overlay::None) {
            self.stack.top_mut().filters.set_pattern(draft);
            self.reclamp_all();
        }
    }

    fn cancel_search(&mut self) {
        if let Overlay::Search { saved, .. } = std::mem::replace(&mut self.overlay, Overlay::None) {
            self.stack.top_mut().filters.set_pattern(saved);
            self.reclamp_all();
        }
    }

    fn apply_draft(&mut self) {
        if let Overlay::Search { draft, .. } = &self.overlay {
            let draft = draft.clone();
            self.stack.top_mut().filters.set_pattern(draft);
            self.reclamp_all();
        }
    }

    fn reclamp_all(&mut self) {
        for cat in self.stack.top().node.category_tags() {
            let len = self.filtered_len(cat);
            let page = self.page;
            self.stack.top_mut().viewport_mut(cat).reclamp(len, page);
        }
    }

    fn filtered_len(&self, category: Category) -> usize {
        let frame = self.stack.top();
        frame
            .filters
            .apply(&frame.node, self.inspector.as_ref(), category)
            .len()
    }

    fn active_category(&self) -> Option<Category> {
        self.stack.top().selector.active()
    }

    /// The currently selected child in the active (filtered) view.
    pub fn selected_child(&self) -> Option<Rc<Node>> {
        let frame = self.stack.top();
        let cat = frame.selector.active()?;
        let rows = frame.filters.apply(&frame.node, self.inspector.as_ref(), cat);
        let idx = frame.viewport(cat).selected();
        rows.get(idx).map(|(_, node)| Rc::clone(node))
    }

    fn emit_text(&self) -> String {
        let node = self
            .selected_child()
            .unwrap_or_else(|| Rc::clone(&self.stack.top().node));
        if node.kind() == EntityKind::Error {
            node.repr().to_string()
        } else {
            self.inspector.preview(node.handle(), usize::MAX)
        }
    }

    // --- render-facing accessors -------------------------------------------

    pub fn overlay_kind(&self) -> OverlayKind {
        match self.overlay {
            Overlay::None => OverlayKind::None,
            Overlay::Filter { .. } => OverlayKind::Filter,
            Overlay::Search { .. } => OverlayKind::Search,
            Overlay::Stack { .. } => OverlayKind::Stack,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self.overlay {
            Overlay::Search { .. } => InputMode::Text,
            _ => InputMode::Normal,
        }
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn current_node(&self) -> Rc<Node> {
        Rc::clone(&self.stack.top().node)
    }

    pub fn current_viewport(&self) -> Option<Viewport> {
        self.active_category().map(|cat| self.stack.top().viewport(cat))
    }

    pub fn current_category(&self) -> Option<Category> {
        self.active_category()
    }

    pub fn pattern(&self) -> &str {
        self.stack.top().filters.pattern()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.stack.top().filters
    }

    pub fn search_draft(&self) -> Option<&str> {
        match &self.overlay {
            Overlay::Search { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The explorer panel view: windowed rows plus the position indicator.
    pub fn pane(&self) -> PaneView {
        let frame = self.stack.top();
        let categories: Vec<(String, bool)> = frame
            .selector
            .categories()
            .iter()
            .map(|cat| (cat.label().to_string(), Some(*cat) == frame.selector.active()))
            .collect();

        let title = frame.node.path().to_string();
        let Some(cat) = frame.selector.active() else {
            return PaneView {
                title,
                categories,
                rows: Vec::new(),
                position: 0,
                total: 0,
            };
        };

        let filtered = frame.filters.apply(&frame.node, self.inspector.as_ref(), cat);
        let total = filtered.len();
        let vp = frame.viewport(cat);
        let rows = filtered
            .iter()
            .enumerate()
            .skip(vp.offset())
            .take(self.page + 1)
            .map(|(idx, (key, node))| RowView {
                label: match cat {
                    Category::Indexed => node.repr().to_string(),
                    _ => key.clone(),
                },
                is_selected: idx == vp.selected(),
                is_dimmed: node.kind().is_dimmed(),
            })
            .collect();

        PaneView {
            title,
            categories,
            rows,
            position: if total > 0 { vp.selected() + 1 } else { 0 },
            total,
        }
    }

    /// The ancestor trail, highlighting either the stack-view cursor or the
    /// current top frame.
    pub fn trail(&self) -> Vec<TrailEntry> {
        let current = match self.overlay {
            Overlay::Stack { cursor } => cursor,
            _ => self.stack.depth() - 1,
        };
        self.stack
            .frames()
            .iter()
            .enumerate()
            .map(|(idx, frame)| TrailEntry {
                label: format!("{}: {}", frame.node.name(), frame.node.type_label()),
                is_current: idx == current,
            })
            .collect()
    }

    /// The filter panel's predicate checkbox rows.
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let cursor = match self.overlay {
            Overlay::Filter { cursor } => Some(cursor),
            _ => None,
        };
        PredicateKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| FilterRow {
                label: kind.label().to_string(),
                enabled: self.stack.top().filters.is_enabled(*kind),
                is_selected: cursor == Some(idx),
            })
            .collect()
    }

    /// The preview panel for the selected child (falls back to the current
    /// node when the filtered view is empty).
    pub fn preview(&self, max_lines: usize) -> PreviewView {
        let node = self
            .selected_child()
            .unwrap_or_else(|| Rc::clone(&self.stack.top().node));
        let text = if node.kind() == EntityKind::Error {
            node.repr().to_string()
        } else {
            self.inspector.preview(node.handle(), max_lines)
        };
        PreviewView {
            path: node.path().to_string(),
            type_label: node.type_label().to_string(),
            len: node.len(),
            text,
        }
    }
}
