//! CLI argument structures

use clap::Parser;
use std::path::PathBuf;

use crate::config::Operands;
use crate::error::Result;

/// Sum two operands and report the sign of the result
#[derive(Parser, Debug)]
#[command(name = "sumsign")]
#[command(about = "sumsign - Sum two operands and report the sign of the result", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace with targets, -vvv adds line numbers)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML file providing `lhs` and `rhs`
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Left operand (default: 1)
    #[arg(long, allow_negative_numbers = true)]
    pub lhs: Option<i64>,

    /// Right operand (default: 2)
    #[arg(long, allow_negative_numbers = true)]
    pub rhs: Option<i64>,
}

impl Cli {
    /// Filter directive for the tracing subscriber
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Operands from defaults, the `--config` file and `--lhs`/`--rhs`, in that order
    pub fn operands(&self) -> Result<Operands> {
        Operands::resolve(self.config.as_deref(), self.lhs, self.rhs)
    }
}
