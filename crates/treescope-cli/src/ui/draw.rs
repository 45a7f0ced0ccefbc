use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use treescope_engine::{Controller, OverlayKind};

use super::components::{
    Component, ExplorerComponent, FilterPanelComponent, FooterComponent, HelpComponent,
    PreviewComponent, SearchInputComponent, StackPanelComponent,
};

pub(crate) fn draw(f: &mut Frame, ctl: &Controller) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Body (explorer + preview)
            Constraint::Length(1), // Footer (key hints)
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(chunks[0]);

    draw_left(f, body[0], ctl);

    if ctl.help_visible() {
        HelpComponent.render(f, body[1], ctl);
    } else {
        PreviewComponent.render(f, body[1], ctl);
    }

    FooterComponent.render(f, chunks[1], ctl);
}

/// The explorer column, with the active overlay panel docked below it.
fn draw_left(f: &mut Frame, area: Rect, ctl: &Controller) {
    let panel_height = match ctl.overlay_kind() {
        OverlayKind::None => 0,
        OverlayKind::Search => 3,
        OverlayKind::Filter => ctl.filter_rows().len() as u16 + 2,
        OverlayKind::Stack => ctl.trail().len() as u16 + 2,
    };

    if panel_height == 0 {
        ExplorerComponent.render(f, area, ctl);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(panel_height)])
        .split(area);

    ExplorerComponent.render(f, rows[0], ctl);
    match ctl.overlay_kind() {
        OverlayKind::Search => SearchInputComponent.render(f, rows[1], ctl),
        OverlayKind::Filter => FilterPanelComponent.render(f, rows[1], ctl),
        OverlayKind::Stack => StackPanelComponent.render(f, rows[1], ctl),
        OverlayKind::None => {}
    }
}
