//! Error types.
//!
//! Structural input problems are fatal and surface as [`InputError`].
//! The enumerator itself is total for valid dimensions; [`EnumError`]
//! only covers the depth guard and failures of the leaf visitor.

use std::io;
use thiserror::Error;

/// Fatal problems while reading the symbol table or the directive section.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("read error: {0}")]
    Read(#[from] io::Error),

    #[error("line {line}: wrong number of fields (expected {expected}, found {found}): {text}")]
    Format {
        line: usize,
        expected: usize,
        found: usize,
        text: String,
    },

    #[error("symbol table is empty")]
    EmptyTable,

    #[error("input ended before the separator line")]
    MissingSeparator,

    #[error("missing newline at end of input")]
    Truncated,

    #[error("line {line}: duplicate symbol: {symbol}")]
    DuplicateSymbol { line: usize, symbol: String },
}

/// Failures that stop an enumeration.
#[derive(Debug, Error)]
pub enum EnumError {
    #[error("search depth {depth} exceeds limit {limit}")]
    DepthLimit { depth: usize, limit: usize },

    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Result type for input parsing.
pub type Result<T> = std::result::Result<T, InputError>;
