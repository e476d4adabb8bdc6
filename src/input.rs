use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::snake::Direction;

/// What the shell should do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
    None,
}

pub fn command_for(key: &KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::None;
    }

    if is_ctrl_c(key) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        _ => Command::None,
    }
}

pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(&press(KeyCode::Up)), Command::Move(Direction::Up));
        assert_eq!(command_for(&press(KeyCode::Down)), Command::Move(Direction::Down));
        assert_eq!(command_for(&press(KeyCode::Left)), Command::Move(Direction::Left));
        assert_eq!(command_for(&press(KeyCode::Right)), Command::Move(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(command_for(&press(KeyCode::Char('w'))), Command::Move(Direction::Up));
        assert_eq!(command_for(&press(KeyCode::Char('a'))), Command::Move(Direction::Left));
        assert_eq!(command_for(&press(KeyCode::Char('s'))), Command::Move(Direction::Down));
        assert_eq!(command_for(&press(KeyCode::Char('D'))), Command::Move(Direction::Right));
    }

    #[test]
    fn test_quit_and_restart() {
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for(&press(KeyCode::Esc)), Command::Quit);
        assert_eq!(command_for(&press(KeyCode::Char('r'))), Command::Restart);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl_c), Command::Quit);
        assert!(is_ctrl_c(&ctrl_c));
    }

    #[test]
    fn test_plain_c_is_ignored() {
        assert_eq!(command_for(&press(KeyCode::Char('c'))), Command::None);
        assert_eq!(command_for(&press(KeyCode::Char('x'))), Command::None);
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(command_for(&release), Command::None);
    }
}
