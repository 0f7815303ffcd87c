//! # sumsign
//!
//! Adds two operands by way of multiplication, prints the result, then reports
//! whether it is positive or negative.
//!
//! ## Usage
//!
//! ```bash
//! sumsign [-v] [--config ops.toml] [--lhs N] [--rhs N]
//! ```
//!
//! With no arguments the operands are `1` and `2`, and the output is:
//!
//! ```text
//! Result: 3
//! Positive number: 3
//! Logging: 3
//! ```
//!
//! ## Modules
//!
//! - `arith` - Checked `multiply` and `add`
//! - `report` - Sign classification and the console lines
//! - `config` - Operand defaults, TOML loading and overrides
//! - `cli` - Command-line arguments
//! - `error` - Crate error type
pub mod arith;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

use std::io::Write;
use tracing::debug;

pub use config::Operands;
pub use error::{Error, Result};
pub use report::Sign;

/// Compute the sum of `operands`, print it, and report its sign to `out`.
pub fn run<W: Write>(operands: Operands, out: &mut W) -> Result<Sign> {
    let sum = arith::add(operands.lhs, operands.rhs)?;
    debug!("add({}, {}) = {}", operands.lhs, operands.rhs, sum);

    report::print_result(out, sum)?;
    let sign = report::process_result(out, sum)?;
    debug!("Took {:?} branch", sign);

    out.flush()?;
    Ok(sign)
}
