//! Rule records.

use crate::symbols::SymbolPosition;
use std::fmt;

/// Directive tag: the first token of a directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RuleKind {
    /// Line tagged `E`.
    E,
    /// Line tagged `N`.
    N,
}

impl RuleKind {
    /// Parses a directive tag. Other tags are not directives.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "E" => Some(RuleKind::E),
            "N" => Some(RuleKind::N),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            RuleKind::E => "E",
            RuleKind::N => "N",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub kind: RuleKind,
    /// 1-based input line.
    pub line: usize,
    /// Resolved operands in token order. Unresolved tokens are absent.
    pub operands: Vec<SymbolPosition>,
}

/// A directive token that matched no symbol. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnresolvedSymbol {
    pub line: usize,
    pub token: String,
}

impl fmt::Display for UnresolvedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: ignoring unrecognized token '{}'",
            self.line, self.token
        )
    }
}

/// All rules of an input, in order, plus the warnings raised while
/// resolving them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub warnings: Vec<UnresolvedSymbol>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules of the given kind.
    pub fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(RuleKind::from_tag("E"), Some(RuleKind::E));
        assert_eq!(RuleKind::from_tag("N"), Some(RuleKind::N));
        assert_eq!(RuleKind::from_tag("e"), None);
        assert_eq!(RuleKind::from_tag("="), None);
        assert_eq!(RuleKind::N.to_string(), "N");
    }

    #[test]
    fn test_warning_display() {
        let w = UnresolvedSymbol {
            line: 7,
            token: "Zed".into(),
        };
        assert_eq!(w.to_string(), "line 7: ignoring unrecognized token 'Zed'");
    }
}
