//! TUI application state: the state machine plus keypad highlight and
//! the quit flag.

use crate::core::CalculatorState;
use crate::tui::input::KeyAction;
use crate::tui::keypad::{ButtonAction, Keypad};

/// Calculator application state.
#[derive(Debug)]
pub struct CalculatorApp {
    /// The expression state machine
    state: CalculatorState,
    /// The visual keypad (button highlight state)
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Creates a calculator app with a custom display precision.
    #[must_use]
    pub fn with_precision(precision: u32) -> Self {
        Self {
            state: CalculatorState::with_precision(precision),
            keypad: Keypad::new(),
            should_quit: false,
        }
    }

    /// Returns the expression state machine.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the visual keypad.
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses the keypad button at `index` (the mouse path).
    pub fn press_at(&mut self, index: usize) {
        if let Some(button) = self.keypad.get_button(index) {
            self.press(button.action);
        }
    }

    /// Performs a button action and highlights the matching button.
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight(action);
        self.apply(action);
    }

    /// Routes a keyboard action.
    ///
    /// Unlike the toggle button, the keyboard has distinct backspace and
    /// clear keys; both highlight the toggle button when they fire.
    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
            KeyAction::Digit(d) => self.press(ButtonAction::Digit(d)),
            KeyAction::Decimal => self.press(ButtonAction::Decimal),
            KeyAction::Operator(op) => self.press(ButtonAction::Operator(op)),
            KeyAction::Power => self.press(ButtonAction::Power),
            KeyAction::Sqrt => self.press(ButtonAction::Sqrt),
            KeyAction::Square => self.press(ButtonAction::Square),
            KeyAction::Evaluate => self.press(ButtonAction::Equals),
            KeyAction::Backspace => {
                self.keypad.highlight(ButtonAction::ClearOrBackspace);
                self.state.backspace();
            }
            KeyAction::Clear => {
                self.keypad.highlight(ButtonAction::ClearOrBackspace);
                self.state.clear();
            }
        }
    }

    fn apply(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::Digit(d) => self.state.append_digit(d),
            ButtonAction::Decimal => self.state.append_decimal(),
            ButtonAction::Operator(op) => self.state.append_operator(op),
            ButtonAction::Power => self.state.append_power(),
            ButtonAction::Square => self.state.square(),
            ButtonAction::Sqrt => self.state.sqrt(),
            ButtonAction::Equals => self.state.evaluate(),
            ButtonAction::ClearOrBackspace => {
                if self.state.is_empty() {
                    self.state.clear();
                } else {
                    self.state.backspace();
                }
            }
        }
    }
}
