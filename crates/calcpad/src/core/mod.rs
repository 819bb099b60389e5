//! Calculator core: binary operations, expression parsing, evaluation,
//! and the keypad-facing expression state machine.
//!
//! Nothing in this module touches a terminal. The TUI layer (and any
//! other frontend) drives [`CalculatorState`] and re-reads its two
//! display strings after every call.

pub mod evaluator;
mod operations;
pub mod parser;
pub mod state;

pub use operations::Operation;
pub use state::CalculatorState;

use thiserror::Error;

/// Result type for calculator operations.
pub type CalcResult<T> = Result<T, CalcError>;

/// The literal shown in place of a result after any failure.
///
/// Every error kind collapses to this sentinel in the display; the
/// distinction between kinds only survives in the logs.
pub const ERROR_SENTINEL: &str = "Error";

/// Calculator error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division (or an expression reducing to division) by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The expression buffer was empty when evaluation was requested.
    #[error("empty expression")]
    EmptyExpression,
    /// The expression could not be tokenized or parsed.
    #[error("invalid expression: {0}")]
    Parse(String),
    /// Evaluation produced NaN or an infinity.
    #[error("result is not a finite number")]
    NonFinite,
    /// A unary operation was applied to a buffer that is not one number.
    #[error("not a number: {0:?}")]
    NotANumber(String),
    /// Square root of a negative operand.
    #[error("square root of a negative number")]
    NegativeSqrt,
}
