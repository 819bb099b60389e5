//! The expression state machine behind the keypad.
//!
//! Owns the two display strings: the echo of the last submitted
//! expression (`total_expression`) and the expression under construction
//! (`current_expression`). Every user action is a mutation of this state;
//! the frontend re-reads both strings afterwards. Faults never escape:
//! any failure replaces the current expression with the `"Error"`
//! sentinel and the machine keeps accepting input.

use tracing::{debug, warn};

use crate::core::{evaluator, CalcError, CalcResult, Operation, ERROR_SENTINEL};

/// Decimal places a fractional result is rounded to by default.
pub const DEFAULT_PRECISION: u32 = 2;

/// Keypad-facing calculator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    total_expression: String,
    current_expression: String,
    precision: u32,
    errored: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates an empty calculator with the default display precision.
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Creates an empty calculator rounding fractional results to
    /// `precision` decimal places.
    #[must_use]
    pub fn with_precision(precision: u32) -> Self {
        Self {
            total_expression: String::new(),
            current_expression: String::new(),
            precision,
            errored: false,
        }
    }

    /// The history line: the last submitted expression, or the
    /// pretty-printed unary operation (e.g. `√(9)`).
    #[must_use]
    pub fn total_expression(&self) -> &str {
        &self.total_expression
    }

    /// The input line: the expression under construction.
    #[must_use]
    pub fn current_expression(&self) -> &str {
        &self.current_expression
    }

    /// Returns true if the input line is empty.
    ///
    /// Drives the clear-or-backspace toggle key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_expression.is_empty()
    }

    /// Appends a digit to the input line. Digits above 9 are ignored.
    pub fn append_digit(&mut self, digit: u8) {
        self.reset_after_error();
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            self.current_expression.push(c);
        }
    }

    /// Appends a decimal point.
    ///
    /// A second dot inside the same number is not rejected here; the
    /// malformed literal surfaces as an error at evaluation time.
    pub fn append_decimal(&mut self) {
        self.reset_after_error();
        self.current_expression.push('.');
    }

    /// Appends a binary operator.
    ///
    /// If the input line already ends with an operator character, that
    /// character is replaced: of consecutive operator presses only the
    /// most recent survives. Pressing an operator right after the power
    /// key strips one `*` of the marker (`5**` then `-` gives `5*-`).
    pub fn append_operator(&mut self, op: Operation) {
        self.reset_after_error();
        if let Some(last) = self.current_expression.chars().last() {
            if Operation::is_operator_char(last) {
                self.current_expression.pop();
            }
        }
        self.current_expression.push_str(op.symbol());
    }

    /// Appends the two-character power marker `**`, unconditionally —
    /// no trailing-operator collapsing, unlike [`Self::append_operator`].
    pub fn append_power(&mut self) {
        self.reset_after_error();
        self.current_expression.push_str(Operation::Power.symbol());
    }

    /// Empties both display lines. Idempotent.
    pub fn clear(&mut self) {
        self.total_expression.clear();
        self.current_expression.clear();
        self.errored = false;
    }

    /// Removes the last character of the input line; an empty line stays
    /// empty. After a failure the whole sentinel is erased at once — it
    /// was never typed character-by-character.
    pub fn backspace(&mut self) {
        if self.errored {
            self.current_expression.clear();
            self.errored = false;
        } else {
            self.current_expression.pop();
        }
    }

    /// Submits the input line for evaluation.
    ///
    /// The attempt is echoed into the history line first, so a failed
    /// expression stays visible above the `"Error"` sentinel. On success
    /// the input line becomes the formatted result and can be extended
    /// with further keystrokes.
    pub fn evaluate(&mut self) {
        self.total_expression = self.current_expression.clone();
        match evaluator::evaluate_str(&self.current_expression).and_then(finite) {
            Ok(value) => {
                debug!(expression = %self.total_expression, value, "evaluated");
                self.current_expression = self.format(value);
                self.errored = false;
            }
            Err(err) => {
                warn!(expression = %self.total_expression, %err, "evaluation failed");
                self.set_error();
            }
        }
    }

    /// Squares the input line, which must hold a single number.
    ///
    /// The history line is left untouched — the observed asymmetry with
    /// [`Self::sqrt`] is preserved.
    pub fn square(&mut self) {
        match self.unary_operand().and_then(|v| finite(v * v)) {
            Ok(squared) => {
                debug!(operand = %self.current_expression, squared, "squared");
                self.current_expression = self.format(squared);
                self.errored = false;
            }
            Err(err) => {
                warn!(operand = %self.current_expression, %err, "square failed");
                self.set_error();
            }
        }
    }

    /// Takes the square root of the input line, which must hold a single
    /// non-negative number. The history line shows the operation applied,
    /// e.g. `√(9)`.
    pub fn sqrt(&mut self) {
        let result = self.unary_operand().and_then(|v| {
            if v < 0.0 {
                Err(CalcError::NegativeSqrt)
            } else {
                finite(v.sqrt())
            }
        });
        match result {
            Ok(root) => {
                debug!(operand = %self.current_expression, root, "took square root");
                self.total_expression = format!("\u{221a}({})", self.current_expression);
                self.current_expression = self.format(root);
                self.errored = false;
            }
            Err(err) => {
                warn!(operand = %self.current_expression, %err, "square root failed");
                self.set_error();
            }
        }
    }

    fn reset_after_error(&mut self) {
        if self.errored {
            self.current_expression.clear();
            self.errored = false;
        }
    }

    fn set_error(&mut self) {
        self.current_expression = ERROR_SENTINEL.to_owned();
        self.errored = true;
    }

    fn unary_operand(&self) -> CalcResult<f64> {
        self.current_expression
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CalcError::NotANumber(self.current_expression.clone()))
    }

    fn format(&self, value: f64) -> String {
        format_number(round_places(value, self.precision))
    }
}

fn finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}

fn round_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Formats a result value for display: integral values without a decimal
/// point, fractional values with their (already rounded) digits.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".into()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
