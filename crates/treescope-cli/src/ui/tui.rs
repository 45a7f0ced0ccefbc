use crate::keymap;
use crate::ui::draw;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use treescope_engine::{Controller, Outcome};

/// Raw mode + alternate screen for the lifetime of this guard. Dropping it
/// restores the user's shell even when the event loop errors out.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the browser until the user quits. Returns the value to print on
/// stdout when the session ended with quit-and-print.
pub fn run(controller: &mut Controller, page_margin: u16) -> Result<Option<String>> {
    let _guard = TerminalGuard::new()?;

    // Raw mode swallows keyboard-generated SIGINT; this covers an external
    // one so the shell is never left in the alternate screen.
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(130);
    })?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    loop {
        let size = terminal.size()?;
        let page = size.height.saturating_sub(page_margin).max(1) as usize;
        controller.set_page(page);

        terminal.draw(|f| draw::draw(f, controller))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(cmd) = keymap::map_key(key, controller.input_mode()) else {
                    continue;
                };
                match controller.handle(cmd) {
                    Outcome::Continue => {}
                    Outcome::Quit => return Ok(None),
                    Outcome::Emit(text) => return Ok(Some(text)),
                }
            }
            // A resize is just a redraw with a new page budget.
            Event::Resize(..) => {}
            _ => {}
        }
    }
}
