use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading a table, parsing a formula,
/// or converting between units.
///
/// None of these are fatal: a failed operation leaves whatever was
/// computed before it untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed formula '{formula}' at position {position}: {reason}")]
    MalformedFormula {
        formula: String,
        position: usize,
        reason: String,
    },

    #[error("element '{0}' not found")]
    UnknownElement(String),

    #[error("could not calculate weight for '{formula}': total weight is zero")]
    ZeroWeight { formula: String },

    #[error("invalid number '{input}': {reason}")]
    InvalidNumericInput { input: String, reason: String },

    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("formula not provided")]
    NoFormula,

    #[error("I/O error reading periodic table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read periodic table: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid periodic table row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("duplicate element symbol '{symbol}' at line {line}")]
    DuplicateSymbol { symbol: String, line: u64 },

    #[error("invalid principal quantum number {0}, must be 1 to 7")]
    InvalidShell(u8),

    #[error("invalid magnetic quantum number {ml} for {kind} subshell, valid values are 0 to {max}")]
    InvalidMagneticNumber { kind: char, ml: usize, max: usize },
}

impl Error {
    pub fn malformed(formula: &str, position: usize, reason: impl Into<String>) -> Self {
        Self::MalformedFormula {
            formula: formula.to_owned(),
            position,
            reason: reason.into(),
        }
    }

    pub fn invalid_number(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }

    pub fn invalid_row(line: u64, reason: impl Into<String>) -> Self {
        Self::InvalidRow {
            line,
            reason: reason.into(),
        }
    }

    pub fn from_io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
