use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct PreviewComponent;

impl Component for PreviewComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let budget = area.height.saturating_sub(2).max(1) as usize;
        let preview = ctl.preview(budget);

        let subtitle = match preview.len {
            Some(len) => format!(" {} ({}) ", preview.type_label, len),
            None => format!(" {} ", preview.type_label),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(Span::styled(
                preview.path.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_bottom(Line::from(Span::styled(
                subtitle,
                Style::default().fg(Color::DarkGray),
            )));

        f.render_widget(Paragraph::new(preview.text).block(block), area);
    }
}
