//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Operation;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append a digit
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Append a binary operator
    Operator(Operation),
    /// Append the `**` power marker (the `^` key)
    Power,
    /// Take the square root of the input line (the `r` key)
    Sqrt,
    /// Square the input line (the `s` key)
    Square,
    /// Evaluate the expression
    Evaluate,
    /// Delete the last character
    Backspace,
    /// Clear both display lines
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c @ '0'..='9') => {
                KeyAction::Digit(c.to_digit(10).unwrap_or_default() as u8)
            }
            KeyCode::Char('.') => KeyAction::Decimal,
            KeyCode::Char('^') => KeyAction::Power,
            KeyCode::Char('r') => KeyAction::Sqrt,
            KeyCode::Char('s') => KeyAction::Square,
            KeyCode::Char('c') => KeyAction::Clear,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('=') | KeyCode::Enter => KeyAction::Evaluate,
            KeyCode::Char(c) => Operation::from_char(c).map_or(KeyAction::None, KeyAction::Operator),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Backspace,
            KeyCode::Esc => KeyAction::Clear,
            _ => KeyAction::None,
        }
    }
}
