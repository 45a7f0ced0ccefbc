use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use treescope_engine::Controller;

use super::Component;

pub(crate) struct HelpComponent;

const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "move down"),
    ("k / Up", "move up"),
    ("g / Home", "jump to first row"),
    ("G / End", "jump to last row"),
    ("l / Enter", "enter the selected child"),
    ("h / Esc", "return to the parent"),
    ("[ / ]", "switch child category"),
    ("/", "search by name"),
    ("f", "filter by type"),
    ("space", "toggle the highlighted filter"),
    ("c", "clear filters and search"),
    ("s", "show the navigation stack"),
    ("p", "quit and print the selected value"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

impl Component for HelpComponent {
    fn render(&self, f: &mut Frame, area: Rect, _ctl: &Controller) {
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:>10}", keys), Style::default().fg(Color::Yellow)),
                    Span::raw("  "),
                    Span::raw(*action),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("help");

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
