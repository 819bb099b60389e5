//! The keypad: a 5×4 button grid mirroring the desktop layout.
//!
//! ```text
//! [C/⌫] [x²] [√] [÷]
//! [ 7 ] [ 8] [9] [×]
//! [ 4 ] [ 5] [6] [−]
//! [ 1 ] [ 2] [3] [+]
//! [ ^ ] [ 0] [.] [=]
//! ```
//!
//! Buttons display glyphs (`÷ × − ^`) but feed the plain characters the
//! state machine understands; the power key feeds the `**` marker. The
//! clear key is a toggle: it clears while the input line is empty and
//! backspaces once it is not.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::Operation;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Actions that keypad buttons can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0–9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Append a binary operator
    Operator(Operation),
    /// Append the `**` power marker
    Power,
    /// Square the input line
    Square,
    /// Take the square root of the input line
    Sqrt,
    /// Evaluate the expression
    Equals,
    /// Clear when the input line is empty, backspace otherwise
    ClearOrBackspace,
}

impl ButtonAction {
    /// The label shown on the button.
    ///
    /// Only the clear key depends on `entry_empty`: `C` while the input
    /// line is empty, `⌫` once it is not.
    #[must_use]
    pub fn label(self, entry_empty: bool) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(op) => op.glyph(),
            Self::Power => "^",
            Self::Square => "x²",
            Self::Sqrt => "√",
            Self::Equals => "=",
            Self::ClearOrBackspace => {
                if entry_empty {
                    "C"
                } else {
                    "⌫"
                }
            }
        }
    }
}

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a new unpressed button.
    #[must_use]
    pub fn new(action: ButtonAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }

    /// Sets the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The 5×4 keypad grid.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad.
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{
            ClearOrBackspace, Decimal, Digit, Equals, Operator, Power, Sqrt, Square,
        };

        let buttons = [
            // Row 1: C/⌫ x² √ ÷
            ClearOrBackspace,
            Square,
            Sqrt,
            Operator(Operation::Divide),
            // Row 2: 7 8 9 ×
            Digit(7),
            Digit(8),
            Digit(9),
            Operator(Operation::Multiply),
            // Row 3: 4 5 6 −
            Digit(4),
            Digit(5),
            Digit(6),
            Operator(Operation::Subtract),
            // Row 4: 1 2 3 +
            Digit(1),
            Digit(2),
            Digit(3),
            Operator(Operation::Add),
            // Row 5: ^ 0 . =
            Power,
            Digit(0),
            Decimal,
            Equals,
        ]
        .into_iter()
        .map(KeypadButton::new)
        .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons.
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index.
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column.
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the index of the button performing `action`.
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Sets a button as pressed by index.
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons.
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button performing `action`, releasing the rest.
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_button(action) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons.
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions.
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position inside `area` to a button index.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for the border (1 cell on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering.
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    entry_empty: bool,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget.
    ///
    /// `entry_empty` drives the clear key's toggle label.
    #[must_use]
    pub fn new(keypad: &'a Keypad, entry_empty: bool) -> Self {
        Self {
            keypad,
            entry_empty,
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) => Style::default().fg(Color::White),
                    ButtonAction::Operator(_) | ButtonAction::Power => {
                        Style::default().fg(Color::Yellow)
                    }
                    ButtonAction::Equals => Style::default().fg(Color::Green),
                    ButtonAction::ClearOrBackspace => Style::default().fg(Color::Red),
                    ButtonAction::Decimal | ButtonAction::Square | ButtonAction::Sqrt => {
                        Style::default().fg(Color::Cyan)
                    }
                }
            };

            if btn_width >= 3 {
                let label = format!("[{}]", btn.action.label(self.entry_empty));
                let width = label.chars().count() as u16;
                let label_x = x + (btn_width.saturating_sub(width)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ButtonAction tests =====

    #[test]
    fn test_digit_labels() {
        for d in 0..=9u8 {
            assert_eq!(
                ButtonAction::Digit(d).label(true),
                DIGIT_LABELS[d as usize]
            );
        }
    }

    #[test]
    fn test_operator_labels_use_glyphs() {
        assert_eq!(ButtonAction::Operator(Operation::Divide).label(true), "÷");
        assert_eq!(ButtonAction::Operator(Operation::Multiply).label(true), "×");
        assert_eq!(ButtonAction::Operator(Operation::Subtract).label(true), "−");
        assert_eq!(ButtonAction::Operator(Operation::Add).label(true), "+");
    }

    #[test]
    fn test_special_labels() {
        assert_eq!(ButtonAction::Power.label(true), "^");
        assert_eq!(ButtonAction::Square.label(true), "x²");
        assert_eq!(ButtonAction::Sqrt.label(true), "√");
        assert_eq!(ButtonAction::Equals.label(true), "=");
        assert_eq!(ButtonAction::Decimal.label(true), ".");
    }

    #[test]
    fn test_clear_key_toggles_label() {
        assert_eq!(ButtonAction::ClearOrBackspace.label(true), "C");
        assert_eq!(ButtonAction::ClearOrBackspace.label(false), "⌫");
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::new(ButtonAction::Digit(5));
        assert!(!btn.pressed);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_top_row() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.get_button_at(0, 0).unwrap().action,
            ButtonAction::ClearOrBackspace
        );
        assert_eq!(keypad.get_button_at(0, 1).unwrap().action, ButtonAction::Square);
        assert_eq!(keypad.get_button_at(0, 2).unwrap().action, ButtonAction::Sqrt);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().action,
            ButtonAction::Operator(Operation::Divide)
        );
    }

    #[test]
    fn test_keypad_bottom_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(4, 0).unwrap().action, ButtonAction::Power);
        assert_eq!(
            keypad.get_button_at(4, 1).unwrap().action,
            ButtonAction::Digit(0)
        );
        assert_eq!(keypad.get_button_at(4, 2).unwrap().action, ButtonAction::Decimal);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().action, ButtonAction::Equals);
    }

    #[test]
    fn test_keypad_has_all_digits() {
        let keypad = Keypad::new();
        for d in 0..=9u8 {
            assert!(
                keypad.find_button(ButtonAction::Digit(d)).is_some(),
                "missing digit {d}"
            );
        }
    }

    #[test]
    fn test_keypad_has_all_operators() {
        let keypad = Keypad::new();
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert!(keypad.find_button(ButtonAction::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    // ===== Highlight tests =====

    #[test]
    fn test_highlight_presses_one_button() {
        let mut keypad = Keypad::new();
        keypad.highlight(ButtonAction::Digit(7));
        let pressed: Vec<usize> = keypad
            .buttons()
            .enumerate()
            .filter_map(|(i, b)| b.pressed.then_some(i))
            .collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(
            keypad.get_button(pressed[0]).unwrap().action,
            ButtonAction::Digit(7)
        );
    }

    #[test]
    fn test_highlight_replaces_previous() {
        let mut keypad = Keypad::new();
        keypad.highlight(ButtonAction::Digit(7));
        keypad.highlight(ButtonAction::Equals);
        let pressed_count = keypad.buttons().filter(|b| b.pressed).count();
        assert_eq!(pressed_count, 1);
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        keypad.press_button(5);
        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    // ===== Hit test tests =====

    #[test]
    fn test_hit_test_outside_area() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 12);
        assert!(keypad.hit_test(area, 5, 5).is_none());
        assert!(keypad.hit_test(area, 50, 15).is_none());
    }

    #[test]
    fn test_hit_test_on_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 21, 11).is_none());
    }

    #[test]
    fn test_hit_test_first_button() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        let index = keypad.hit_test(area, 1, 1).unwrap();
        assert_eq!(
            keypad.get_button(index).unwrap().action,
            ButtonAction::ClearOrBackspace
        );
    }

    #[test]
    fn test_hit_test_too_small_area() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 5, 4);
        assert!(keypad.hit_test(area, 2, 2).is_none());
    }

    #[test]
    fn test_hit_test_round_trips_with_positions() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // Buttons are 5 wide and 2 tall inside the border.
        for ((row, col), btn) in keypad.buttons_with_positions() {
            let x = 1 + col as u16 * 5;
            let y = 1 + row as u16 * 2;
            let index = keypad.hit_test(area, area.x + x, area.y + y).unwrap();
            assert_eq!(keypad.get_button(index).unwrap().action, btn.action);
        }
    }

    // ===== Widget render tests =====

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 17);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, true).render(area, &mut buf);

        let text = buffer_text(&buf);
        for label in ["[7]", "[0]", "[÷]", "[=]", "[C]", "[√]", "[x²]", "[^]"] {
            assert!(text.contains(label), "missing {label} in:\n{text}");
        }
    }

    #[test]
    fn test_widget_shows_backspace_when_entry_nonempty() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 26, 17);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, false).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("[⌫]"));
        assert!(!text.contains("[C]"));
    }

    #[test]
    fn test_widget_tiny_area_does_not_panic() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad, true).render(area, &mut buf);
    }
}
