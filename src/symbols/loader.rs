//! Symbol table loader.

use super::config::LoadConfig;
use super::table::SymbolTable;
use crate::error::{InputError, Result};
use crate::lines::LineSource;
use std::collections::HashSet;
use std::io::BufRead;
use tracing::debug;

/// Reads table rows up to and including the separator line.
///
/// The first row fixes the width; every later row must match it. On
/// success the source is positioned on the line after the separator.
pub fn load_symbols<R: BufRead>(
    source: &mut LineSource<R>,
    config: &LoadConfig,
) -> Result<SymbolTable> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width = 0usize;
    let mut seen: HashSet<String> = HashSet::new();

    loop {
        let Some(line) = source.next_line()? else {
            return Err(InputError::MissingSeparator);
        };

        if line.text == config.separator {
            if !line.terminated {
                return Err(InputError::Truncated);
            }
            break;
        }
        if !line.terminated {
            return Err(InputError::MissingSeparator);
        }

        let tokens: Vec<String> = line.text.split_whitespace().map(str::to_owned).collect();

        if rows.is_empty() {
            width = tokens.len();
        } else if tokens.len() != width {
            return Err(InputError::Format {
                line: line.number,
                expected: width,
                found: tokens.len(),
                text: line.text.to_string(),
            });
        }

        if config.reject_duplicates {
            for token in &tokens {
                if !seen.insert(token.clone()) {
                    return Err(InputError::DuplicateSymbol {
                        line: line.number,
                        symbol: token.clone(),
                    });
                }
            }
        }

        rows.push(tokens);
    }

    if rows.is_empty() {
        return Err(InputError::EmptyTable);
    }

    let table = SymbolTable::from_checked(rows, width);
    debug!(
        width = table.width(),
        dimensions = table.dimensions(),
        "symbol table loaded"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> Result<SymbolTable> {
        load_with(input, &LoadConfig::default())
    }

    fn load_with(input: &str, config: &LoadConfig) -> Result<SymbolTable> {
        let mut src = LineSource::new(input.as_bytes());
        load_symbols(&mut src, config)
    }

    #[test]
    fn test_basic_table() {
        let t = load("r0 r1\na b\nx   y\n%%\n").unwrap();
        assert_eq!(t.width(), 2);
        assert_eq!(t.dimensions(), 2);
        assert_eq!(t.symbol(1, 1), "y");
    }

    #[test]
    fn test_stops_after_separator() {
        let mut src = LineSource::new("r0\na\n%%\nE a\n".as_bytes());
        load_symbols(&mut src, &LoadConfig::default()).unwrap();
        assert_eq!(src.line_number(), 3);
        let next = src.next_line().unwrap().unwrap();
        assert_eq!(next.text, "E a");
    }

    #[test]
    fn test_wrong_field_count() {
        let err = load("r0 r1\na b c\n%%\n").unwrap_err();
        match err {
            InputError::Format {
                line,
                expected,
                found,
                text,
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
                assert_eq!(text, "a b c");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_label_only_table() {
        let t = load("r0 r1 r2\n%%\n").unwrap();
        assert_eq!(t.dimensions(), 0);
        assert_eq!(t.width(), 3);
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(load("%%\n"), Err(InputError::EmptyTable)));
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            load("r0 r1\na b\n"),
            Err(InputError::MissingSeparator)
        ));
        assert!(matches!(
            load("r0 r1\na b"),
            Err(InputError::MissingSeparator)
        ));
        assert!(matches!(load(""), Err(InputError::MissingSeparator)));
    }

    #[test]
    fn test_unterminated_separator() {
        assert!(matches!(load("r0\na\n%%"), Err(InputError::Truncated)));
    }

    #[test]
    fn test_crlf_accepted() {
        let t = load("r0 r1\r\na b\r\n%%\r\n").unwrap();
        assert_eq!(t.row(1), &["a", "b"]);
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        let t = load("a b\nb a\n%%\n").unwrap();
        assert_eq!(t.dimensions(), 1);
    }

    #[test]
    fn test_duplicates_rejected_when_strict() {
        let config = LoadConfig::default().with_reject_duplicates(true);
        let err = load_with("r0 r1\na b\nx a\n%%\n", &config).unwrap_err();
        match err {
            InputError::DuplicateSymbol { line, symbol } => {
                assert_eq!(line, 3);
                assert_eq!(symbol, "a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_separator() {
        let config = LoadConfig::default().with_separator("---");
        let t = load_with("r0\na\n---\n", &config).unwrap();
        assert_eq!(t.dimensions(), 1);
    }
}
