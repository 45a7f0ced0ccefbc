use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct SearchInputComponent;

impl Component for SearchInputComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let draft = ctl.search_draft().unwrap_or_default();
        let line = Line::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(draft.to_string()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("search");

        f.render_widget(Paragraph::new(line).block(block), area);
    }
}
