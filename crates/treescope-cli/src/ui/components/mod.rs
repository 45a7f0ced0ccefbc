mod explorer;
mod filter_panel;
mod footer;
mod help;
mod preview;
mod search_input;
mod stack_panel;

use ratatui::{Frame, layout::Rect};
use treescope_engine::Controller;

pub(crate) use explorer::ExplorerComponent;
pub(crate) use filter_panel::FilterPanelComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use help::HelpComponent;
pub(crate) use preview::PreviewComponent;
pub(crate) use search_input::SearchInputComponent;
pub(crate) use stack_panel::StackPanelComponent;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller);
}
