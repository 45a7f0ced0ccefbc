use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct FilterPanelComponent;

impl Component for FilterPanelComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let lines: Vec<Line> = ctl
            .filter_rows()
            .into_iter()
            .map(|row| {
                let check = if row.enabled { "[x]" } else { "[ ]" };
                let mut style = Style::default();
                if row.enabled {
                    style = style.fg(Color::Yellow);
                }
                if row.is_selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(Span::styled(format!("{} {}", check, row.label), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("filter");

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
