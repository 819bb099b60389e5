//! TUI rendering: the two-line display above the keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::ERROR_SENTINEL;

/// Renders the calculator UI to the frame.
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUi::new(app), area);
}

/// Splits the frame into display, keypad, and help areas.
///
/// Pure so the binary can hit-test mouse events against the same
/// rectangles the renderer used.
fn layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Two display lines + border
            Constraint::Min(12),   // Keypad
            Constraint::Length(1), // Help line
        ])
        .split(area)
        .to_vec()
}

/// The rectangle the keypad occupies within `area`.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    layout(area)[1]
}

/// Calculator UI widget.
#[derive(Debug)]
pub struct CalculatorUi<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUi<'a> {
    /// Creates a new calculator UI widget.
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the two display lines, right-aligned: the dim history
    /// echo above the bold input line.
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();

        let total_line = Line::from(Span::styled(
            state.total_expression().to_owned(),
            Style::default().fg(Color::DarkGray),
        ));

        let current_style = if state.current_expression() == ERROR_SENTINEL {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };
        let current_line = Line::from(Span::styled(
            state.current_expression().to_owned(),
            current_style,
        ));

        let paragraph = Paragraph::new(vec![total_line, current_line])
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Calculator ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        paragraph.render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let help = Paragraph::new(Span::styled(
            " enter =  ·  ^ power  ·  r √  ·  s x²  ·  c clear  ·  q quit",
            Style::default().fg(Color::DarkGray),
        ));
        help.render(area, buf);
    }
}

impl Widget for CalculatorUi<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = layout(area);

        self.render_display(chunks[0], buf);

        let keypad = KeypadWidget::new(self.app.keypad(), self.app.state().is_empty());
        keypad.render(chunks[1], buf);

        self.render_help(chunks[2], buf);
    }
}
