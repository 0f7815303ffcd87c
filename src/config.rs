//! Operand configuration.
//!
//! Operands are resolved with layered precedence:
//!
//! 1. Hardcoded defaults (`lhs = 1`, `rhs = 2`) (lowest priority)
//! 2. TOML config file passed with `--config`
//! 3. `--lhs` / `--rhs` command-line flags (highest priority)
//!
//! # Example
//!
//! ```toml
//! lhs = 10
//! rhs = -4
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// The two inputs to the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Operands {
    #[serde(default = "default_lhs")]
    pub lhs: i64,

    #[serde(default = "default_rhs")]
    pub rhs: i64,
}

fn default_lhs() -> i64 {
    1
}

fn default_rhs() -> i64 {
    2
}

impl Default for Operands {
    fn default() -> Self {
        Self {
            lhs: default_lhs(),
            rhs: default_rhs(),
        }
    }
}

impl Operands {
    /// Parse operands from TOML text. Keys left out fall back to the defaults.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load operands from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading operands from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Apply command-line overrides on top of these operands.
    pub fn with_overrides(self, lhs: Option<i64>, rhs: Option<i64>) -> Self {
        Self {
            lhs: lhs.unwrap_or(self.lhs),
            rhs: rhs.unwrap_or(self.rhs),
        }
    }

    /// Resolve operands from an optional config file plus overrides.
    pub fn resolve(config: Option<&Path>, lhs: Option<i64>, rhs: Option<i64>) -> Result<Self> {
        let base = match config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(lhs, rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        assert_eq!(Operands::default(), Operands { lhs: 1, rhs: 2 });
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let ops = Operands::from_toml_str("rhs = -9\n", Path::new("ops.toml")).unwrap();
        assert_eq!(ops, Operands { lhs: 1, rhs: -9 });
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let ops = Operands::from_toml_str("", Path::new("ops.toml")).unwrap();
        assert_eq!(ops, Operands::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Operands::from_toml_str("lhs = 1\nthird = 3\n", Path::new("ops.toml"))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("ops.toml"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = Operands::from_toml_str("lhs = \"one\"\n", Path::new("ops.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let ops = Operands { lhs: 10, rhs: 20 }.with_overrides(None, Some(-1));
        assert_eq!(ops, Operands { lhs: 10, rhs: -1 });
    }

    #[test]
    fn test_resolve_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lhs = 7\nrhs = 8").unwrap();

        let ops = Operands::resolve(Some(file.path()), None, None).unwrap();
        assert_eq!(ops, Operands { lhs: 7, rhs: 8 });

        let ops = Operands::resolve(Some(file.path()), Some(0), None).unwrap();
        assert_eq!(ops, Operands { lhs: 0, rhs: 8 });
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Operands::resolve(Some(&path), None, None).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
