use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use treescope_engine::{Controller, OverlayKind};

use super::Component;

pub(crate) struct FooterComponent;

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, ctl: &Controller) {
        let hints: &[(&str, &str)] = if ctl.help_visible() {
            &[("?", "close help"), ("q", "quit")]
        } else {
            match ctl.overlay_kind() {
                OverlayKind::None => &[
                    ("j/k", "move"),
                    ("l", "enter"),
                    ("h", "back"),
                    ("/", "search"),
                    ("f", "filter"),
                    ("s", "stack"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
                OverlayKind::Search => &[("enter", "apply"), ("esc", "cancel")],
                OverlayKind::Filter => &[
                    ("space", "toggle"),
                    ("c", "clear"),
                    ("/", "search"),
                    ("esc", "close"),
                ],
                OverlayKind::Stack => &[("enter", "jump"), ("esc", "close")],
            }
        };

        let mut spans = Vec::new();
        for (key, action) in hints {
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {}", action)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
