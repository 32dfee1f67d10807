//! Arithmetic engine.
//!
//! Addition, subtraction and multiplication run as checked 32-bit
//! integer arithmetic after truncating each operand toward zero.
//! Division alone runs at full f64 precision, with a strict zero check
//! on the divisor instead of relying on IEEE infinity semantics.

use crate::{Error, Operation, Result, Value};

/// Parse an operator token.
///
/// Only the exact single-character tokens `+`, `-`, `*` and `/` are
/// accepted; anything else (including empty input) is rejected.
pub fn parse_operation(token: &str) -> Result<Operation> {
    match token {
        "+" => Ok(Operation::Add),
        "-" => Ok(Operation::Subtract),
        "*" => Ok(Operation::Multiply),
        "/" => Ok(Operation::Divide),
        _ => Err(Error::InvalidOperation(token.to_string())),
    }
}

/// Parse an operand as a 64-bit float
pub fn parse_operand(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::MalformedNumber(text.to_string()))
}

/// Perform one calculation.
///
/// `+`, `-` and `*` yield `Value::Int`; `/` yields `Value::Float`.
pub fn calculate(op: Operation, lhs: f64, rhs: f64) -> Result<Value> {
    match op {
        Operation::Add => int_op(lhs, rhs, i32::checked_add),
        Operation::Subtract => int_op(lhs, rhs, i32::checked_sub),
        Operation::Multiply => int_op(lhs, rhs, i32::checked_mul),
        Operation::Divide => {
            // Strict zero check, applied before dividing
            if rhs == 0.0 {
                Err(Error::DivisionByZero)
            } else {
                Ok(Value::Float(lhs / rhs))
            }
        }
    }
}

/// Truncate both operands to i32 and apply a checked integer operation
fn int_op(lhs: f64, rhs: f64, op: fn(i32, i32) -> Option<i32>) -> Result<Value> {
    let l = truncate_to_i32(lhs)?;
    let r = truncate_to_i32(rhs)?;
    op(l, r).map(Value::Int).ok_or(Error::ArithmeticOverflow)
}

/// Truncate toward zero to a 32-bit signed integer.
///
/// Values whose integer part does not fit the i32 range, and NaN, are
/// overflow.
fn truncate_to_i32(value: f64) -> Result<i32> {
    let truncated = value.trunc();
    // The comparison is false for NaN, which lands in the error arm
    if truncated >= i32::MIN as f64 && truncated <= i32::MAX as f64 {
        Ok(truncated as i32)
    } else {
        Err(Error::ArithmeticOverflow)
    }
}
