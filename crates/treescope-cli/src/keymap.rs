use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use treescope_engine::{Command, InputMode};

/// Translate one key press into an engine command. In `Text` mode (search
/// input open) printable keys feed the draft; everywhere else the vim-style
/// bindings apply.
pub fn map_key(key: KeyEvent, mode: InputMode) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match mode {
        InputMode::Text => match key.code {
            KeyCode::Enter => Some(Command::Descend),
            KeyCode::Esc => Some(Command::Cancel),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Char(c) => Some(Command::Input(c)),
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('p') => Some(Command::QuitAndPrint),
            KeyCode::Char('?') => Some(Command::ToggleHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Command::MoveTop),
            KeyCode::Char('G') | KeyCode::End => Some(Command::MoveBottom),
            KeyCode::Char('l') | KeyCode::Enter | KeyCode::Right => Some(Command::Descend),
            KeyCode::Char('h') | KeyCode::Esc | KeyCode::Left => Some(Command::Ascend),
            KeyCode::Char('[') | KeyCode::Char(']') => Some(Command::ToggleCategory),
            KeyCode::Char('/') => Some(Command::OpenSearch),
            KeyCode::Char('f') => Some(Command::OpenFilter),
            KeyCode::Char('s') => Some(Command::OpenStack),
            KeyCode::Char(' ') => Some(Command::TogglePredicate),
            KeyCode::Char('c') => Some(Command::ClearFilters),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_keys_map_in_normal_mode() {
        assert_eq!(
            map_key(press(KeyCode::Char('j')), InputMode::Normal),
            Some(Command::MoveDown)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('G')), InputMode::Normal),
            Some(Command::MoveBottom)
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), InputMode::Normal),
            Some(Command::Descend)
        );
        assert_eq!(
            map_key(press(KeyCode::Esc), InputMode::Normal),
            Some(Command::Ascend)
        );
    }

    #[test]
    fn text_mode_captures_printable_keys() {
        assert_eq!(
            map_key(press(KeyCode::Char('j')), InputMode::Text),
            Some(Command::Input('j'))
        );
        assert_eq!(
            map_key(press(KeyCode::Esc), InputMode::Text),
            Some(Command::Cancel)
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), InputMode::Text),
            Some(Command::Backspace)
        );
    }

    #[test]
    fn ctrl_c_quits_in_both_modes() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key, InputMode::Normal), Some(Command::Quit));
        assert_eq!(map_key(key, InputMode::Text), Some(Command::Quit));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(press(KeyCode::F(5)), InputMode::Normal), None);
        assert_eq!(map_key(press(KeyCode::Tab), InputMode::Text), None);
    }
}
