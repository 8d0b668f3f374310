//! Whole-input parsing: symbol table, then directives.

use crate::directive::{parse_directives, RuleSet};
use crate::error::Result;
use crate::lines::LineSource;
use crate::symbols::{load_symbols, LoadConfig, SymbolTable};
use std::io::BufRead;
use tracing::debug;

/// A parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    pub symbols: SymbolTable,
    /// Parsed directives. Not consulted by the enumerator.
    pub rules: RuleSet,
}

/// Reads both input segments from `reader`.
///
/// Any structural problem aborts with an [`InputError`](crate::InputError)
/// before anything is enumerated.
///
/// # Examples
///
/// ```
/// use u_logigrid::{read_puzzle, LoadConfig};
///
/// let input = "r0 r1\na b\n%%\nN r0 b\n";
/// let puzzle = read_puzzle(input.as_bytes(), &LoadConfig::default()).unwrap();
/// assert_eq!(puzzle.symbols.dimensions(), 1);
/// assert_eq!(puzzle.rules.len(), 1);
/// ```
pub fn read_puzzle<R: BufRead>(reader: R, config: &LoadConfig) -> Result<Puzzle> {
    let mut source = LineSource::new(reader);
    let symbols = load_symbols(&mut source, config)?;
    let rules = parse_directives(&mut source, &symbols)?;
    debug!(
        rules = rules.len(),
        warnings = rules.warnings.len(),
        lines = source.line_number(),
        "input parsed"
    );
    Ok(Puzzle { symbols, rules })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn test_read_puzzle() {
        let input = "Bob Chuck\nHall King\n%%\nN Bob King\nE Chuck Zed\n";
        let puzzle = read_puzzle(input.as_bytes(), &LoadConfig::default()).unwrap();
        assert_eq!(puzzle.symbols.width(), 2);
        assert_eq!(puzzle.rules.len(), 2);
        assert_eq!(puzzle.rules.rules[1].line, 5);
        assert_eq!(puzzle.rules.warnings.len(), 1);
        assert_eq!(puzzle.rules.warnings[0].line, 5);
    }

    #[test]
    fn test_no_directives() {
        let puzzle = read_puzzle("r0\na\n%%\n".as_bytes(), &LoadConfig::default()).unwrap();
        assert!(puzzle.rules.is_empty());
    }

    #[test]
    fn test_format_error_before_directives() {
        let err = read_puzzle("a b\nc\n%%\nN a\n".as_bytes(), &LoadConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::Format { line: 2, .. }));
    }

    #[test]
    fn test_truncated_directives() {
        let err = read_puzzle("a b\n%%\nN a".as_bytes(), &LoadConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::Truncated));
    }
}
