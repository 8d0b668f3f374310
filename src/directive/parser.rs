//! Directive section parser.

use super::types::{Rule, RuleKind, RuleSet, UnresolvedSymbol};
use crate::error::{InputError, Result};
use crate::lines::LineSource;
use crate::symbols::SymbolTable;
use std::io::BufRead;
use tracing::{trace, warn};

/// Parses every remaining line of `source` as a directive.
///
/// Lines tagged `E` or `N` become [`Rule`]s; their operands are resolved
/// with [`SymbolTable::find`]. A token that matches nothing is logged,
/// recorded as an [`UnresolvedSymbol`] and skipped. Other lines are
/// ignored. A final line without a newline is still parsed, after which
/// [`InputError::Truncated`] is returned.
pub fn parse_directives<R: BufRead>(
    source: &mut LineSource<R>,
    symbols: &SymbolTable,
) -> Result<RuleSet> {
    let mut set = RuleSet::default();
    let mut truncated = false;

    while let Some(line) = source.next_line()? {
        truncated = !line.terminated;

        let mut tokens = line.text.split_whitespace();
        let Some(kind) = tokens.next().and_then(RuleKind::from_tag) else {
            trace!(line = line.number, "skipping non-directive line");
            continue;
        };

        let mut operands = Vec::new();
        for token in tokens {
            match symbols.find(token) {
                Some(pos) => operands.push(pos),
                None => {
                    warn!(line = line.number, token, "ignoring unrecognized token");
                    set.warnings.push(UnresolvedSymbol {
                        line: line.number,
                        token: token.to_string(),
                    });
                }
            }
        }

        set.rules.push(Rule {
            kind,
            line: line.number,
            operands,
        });
    }

    if truncated {
        return Err(InputError::Truncated);
    }
    Ok(set)
}
