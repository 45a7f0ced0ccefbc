use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct ExplorerComponent;

impl Component for ExplorerComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let pane = ctl.pane();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(Span::styled(
                pane.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_bottom(Line::from(Span::styled(
                format!(" {} / {} ", pane.position, pane.total),
                Style::default().fg(Color::DarkGray),
            )));

        let mut lines = vec![category_header(&pane.categories)];

        if pane.rows.is_empty() {
            lines.push(Line::from(Span::styled(
                "no entries",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for row in &pane.rows {
                let mut style = Style::default();
                if row.is_dimmed {
                    style = style.fg(Color::DarkGray);
                }
                if row.is_selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                lines.push(Line::from(Span::styled(row.label.clone(), style)));
            }
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn category_header(categories: &[(String, bool)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (label, active) in categories {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        let style = if *active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
    }
    Line::from(spans)
}
