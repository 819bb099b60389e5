//! calcpad — a keypad calculator with a two-line expression display.
//!
//! The [`core`] module holds everything a frontend needs: a type-safe
//! [`Operation`](core::Operation) set, an expression parser/evaluator for
//! `+ - * /` and the `**` power marker, and the
//! [`CalculatorState`](core::CalculatorState) machine the keypad drives.
//! The [`tui`] module (default `tui` feature) renders the keypad in a
//! terminal with ratatui.
//!
//! # Example
//!
//! ```rust
//! use calcpad::prelude::*;
//!
//! let mut state = CalculatorState::new();
//! state.append_digit(2);
//! state.append_operator(Operation::Add);
//! state.append_digit(3);
//! state.append_operator(Operation::Multiply);
//! // Consecutive operator presses collapse: only the last one survives.
//! assert_eq!(state.current_expression(), "2+3*");
//! state.append_digit(4);
//! state.evaluate();
//! assert_eq!(state.total_expression(), "2+3*4");
//! assert_eq!(state.current_expression(), "14");
//!
//! // Failures collapse to the sentinel and never escape.
//! state.clear();
//! state.append_digit(1);
//! state.append_operator(Operation::Divide);
//! state.append_digit(0);
//! state.evaluate();
//! assert_eq!(state.current_expression(), ERROR_SENTINEL);
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, CalculatorState, Operation, ERROR_SENTINEL};

    #[cfg(feature = "tui")]
    pub use crate::tui::{ButtonAction, CalculatorApp, KeyAction};
}
