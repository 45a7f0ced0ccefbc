use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct StackPanelComponent;

impl Component for StackPanelComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let lines: Vec<Line> = ctl
            .trail()
            .into_iter()
            .enumerate()
            .map(|(depth, entry)| {
                let indent = "  ".repeat(depth);
                let style = if entry.is_current {
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(format!("{}{}", indent, entry.label), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title("stack");

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
