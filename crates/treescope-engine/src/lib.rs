pub mod controller;
pub mod filter;
pub mod node;
pub mod selector;
pub mod stack;
pub mod testing;
pub mod view;
pub mod viewport;

pub use controller::{Command, Controller, InputMode, Outcome, OverlayKind};
pub use filter::FilterSet;
pub use node::Node;
pub use selector::ViewSelector;
pub use stack::{Frame, NavStack};
pub use view::{FilterRow, PaneView, PreviewView, RowView, TrailEntry};
pub use viewport::Viewport;
