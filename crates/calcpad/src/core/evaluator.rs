//! AST evaluation.
//!
//! The walk is stateless; all failure modes surface as [`CalcError`].

use crate::core::parser::{AstNode, Parser};
use crate::core::CalcResult;

/// Evaluates an AST node and returns the numeric result.
pub fn evaluate(node: &AstNode) -> CalcResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Negate(inner) => evaluate(inner).map(|v| -v),
        AstNode::BinaryOp { left, op, right } => {
            let left_val = evaluate(left)?;
            let right_val = evaluate(right)?;
            op.apply(left_val, right_val)
        }
    }
}

/// Parses and evaluates a string expression.
pub fn evaluate_str(input: &str) -> CalcResult<f64> {
    let ast = Parser::parse_str(input)?;
    evaluate(&ast)
}
