//! Console report for a computed result
//!
//! Every function writes to a caller-supplied sink. The binary hands in
//! locked stdout; tests hand in a `Vec<u8>`.

use std::io::Write;
use tracing::trace;

use crate::error::Result;

/// Which branch a result takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    /// Anything not strictly greater than zero, including zero itself
    Negative,
}

impl Sign {
    pub fn of(value: i64) -> Self {
        if value > 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Write the `Result: <n>` header line
pub fn print_result<W: Write>(out: &mut W, n: i64) -> Result<()> {
    writeln!(out, "Result: {n}")?;
    Ok(())
}

/// Dispatch on the sign of `value` and return the branch taken
pub fn process_result<W: Write>(out: &mut W, value: i64) -> Result<Sign> {
    let sign = Sign::of(value);
    match sign {
        Sign::Positive => print_positive(out, value)?,
        Sign::Negative => print_negative(out, value)?,
    }
    Ok(sign)
}

pub fn print_positive<W: Write>(out: &mut W, n: i64) -> Result<()> {
    writeln!(out, "Positive number: {n}")?;
    log_value(out, n)
}

pub fn print_negative<W: Write>(out: &mut W, n: i64) -> Result<()> {
    writeln!(out, "Negative number: {n}")?;
    log_value(out, n)
}

pub fn log_value<W: Write>(out: &mut W, n: i64) -> Result<()> {
    trace!("Logging value {}", n);
    writeln!(out, "Logging: {n}")?;
    Ok(())
}
