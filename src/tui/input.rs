//! Keyboard input mapped onto layout actions.

use crate::layout::{Direction, Layout};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Something the user asked the layout to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(Direction),
    /// Click the cell under the cursor.
    Mark,
    /// Press the start/reset button.
    ToggleStart,
    /// Type a digit into the counter input.
    CounterDigit(char),
    /// Delete from the counter input.
    CounterBackspace,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Up => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Mark),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('r') => Some(Action::ToggleStart),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::CounterDigit(c)),
        KeyCode::Backspace => Some(Action::CounterBackspace),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Applies an action to the layout. Returns false when the user quits.
pub fn apply(layout: &mut Layout, action: Action) -> bool {
    debug!(?action, "Applying action");
    match action {
        Action::Cursor(direction) => layout.move_cursor(direction),
        Action::Mark => {
            layout.click_cursor();
        }
        Action::ToggleStart => layout.on_start_clicked(),
        Action::CounterDigit(c) => layout.counter_input(c),
        Action::CounterBackspace => layout.counter_backspace(),
        Action::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        assert_eq!(
            action_for(press(KeyCode::Left)),
            Some(Action::Cursor(Direction::Left))
        );
        assert_eq!(
            action_for(press(KeyCode::Down)),
            Some(Action::Cursor(Direction::Down))
        );
    }

    #[test]
    fn test_digits_go_to_counter() {
        assert_eq!(
            action_for(press(KeyCode::Char('4'))),
            Some(Action::CounterDigit('4'))
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(Action::Quit));
        assert_eq!(action_for(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }

    #[test]
    fn test_keyboard_game_flow() {
        let mut layout = Layout::new(&GameSettings::default()).unwrap();
        assert!(apply(&mut layout, Action::ToggleStart));
        assert!(apply(&mut layout, Action::Mark));
        assert_eq!(layout.status_text(), "It's X's turn.");
        assert!(apply(&mut layout, Action::Cursor(Direction::Right)));
        assert!(apply(&mut layout, Action::Mark));
        assert_eq!(layout.status_text(), "It's O's turn.");
        assert!(!apply(&mut layout, Action::Quit));
    }
}
