//! Pure arithmetic
//!
//! The sum is deliberately routed through [`multiply`] so every operand is
//! scaled by one before it is added. Both steps are checked: an overflow is
//! reported as [`Error::Overflow`] rather than wrapping.

use crate::error::{Error, Result};

/// Multiply two integers
pub fn multiply(x: i64, y: i64) -> Result<i64> {
    x.checked_mul(y).ok_or(Error::Overflow {
        op: "multiply",
        lhs: x,
        rhs: y,
    })
}

/// Add two integers as `multiply(a, 1) + multiply(b, 1)`
pub fn add(a: i64, b: i64) -> Result<i64> {
    let lhs = multiply(a, 1)?;
    let rhs = multiply(b, 1)?;
    lhs.checked_add(rhs).ok_or(Error::Overflow {
        op: "add",
        lhs: a,
        rhs: b,
    })
}
