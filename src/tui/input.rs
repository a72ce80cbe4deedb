//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{Action, SCREEN_ORDER};

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Shorter),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(Action::Longer),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            Some(Action::Toggle(SCREEN_ORDER[idx]))
        }
        KeyCode::Enter | KeyCode::Char('g') => Some(Action::Generate),
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}
