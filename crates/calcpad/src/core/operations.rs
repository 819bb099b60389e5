//! Binary arithmetic operations.

use crate::core::{CalcError, CalcResult};

/// Type-safe binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`**`)
    Power,
}

impl Operation {
    /// The textual form fed into the expression buffer.
    ///
    /// Power is the two-character `**` marker, not `^`.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    /// The glyph shown on the keypad button.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{00d7}",
            Self::Divide => "\u{00f7}",
            Self::Power => "^",
        }
    }

    /// Precedence level for operator ordering (higher binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// Returns true if this operation is left-associative.
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        !matches!(self, Self::Power)
    }

    /// Maps a single binary-operator character to its operation.
    ///
    /// Power has no single-character form and is never returned here.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns true if `c` is one of the four binary-operator characters.
    #[must_use]
    pub fn is_operator_char(c: char) -> bool {
        Self::from_char(c).is_some()
    }

    /// Applies the operation to two operands.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Power => a.powf(b),
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::NonFinite)
        }
    }
}
