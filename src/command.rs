use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Move(Direction),
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if (ev.modifiers, ev.code) == (KeyModifiers::CONTROL, KeyCode::Char('c')) {
            return Some(Command::Quit);
        }
        if !normal_modifiers.contains(ev.modifiers) {
            return None;
        }
        match ev.code {
            KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up => Some(Command::Move(Direction::Up)),
            KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down => Some(Command::Move(Direction::Down)),
            KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left => Some(Command::Move(Direction::Left)),
            KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right => {
                Some(Command::Move(Direction::Right))
            }
            KeyCode::Char('r') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}
