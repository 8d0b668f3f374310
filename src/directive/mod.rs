//! Directive section.
//!
//! Everything after the separator line. Lines whose first token is `E`
//! or `N` are directives; each remaining token names a symbol and is
//! resolved to its [`SymbolPosition`](crate::symbols::SymbolPosition).
//!
//! Directives are parsed and validated only. The enumerator never reads
//! them: every combination is produced regardless of the rule set.

mod parser;
mod types;

pub use parser::parse_directives;
pub use types::{Rule, RuleKind, RuleSet, UnresolvedSymbol};
