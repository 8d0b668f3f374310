//! The symbol table.

use crate::error::{InputError, Result};

/// Location of a token in a [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolPosition {
    /// Table row. Row 0 is the label row.
    pub row: usize,
    /// Column within the row.
    pub column: usize,
}

/// A fixed-width table of string tokens.
///
/// Row 0 names the output rows; each further row lists the candidate
/// symbols of one dimension. Every row has exactly [`width`](Self::width)
/// tokens and the table always has at least the label row.
///
/// # Examples
///
/// ```
/// use u_logigrid::symbols::SymbolTable;
///
/// let table = SymbolTable::new([["r0", "r1"], ["a", "b"], ["x", "y"]]).unwrap();
/// assert_eq!(table.width(), 2);
/// assert_eq!(table.dimensions(), 2);
/// assert_eq!(table.symbol(1, 0), "x");
/// assert_eq!(table.combination_count(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolTable {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl SymbolTable {
    /// Builds a table, checking that every row is as wide as the first.
    ///
    /// Row numbers in [`InputError::Format`] are 1-based.
    pub fn new<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();

        let width = rows.first().ok_or(InputError::EmptyTable)?.len();
        for (i, row) in rows.iter().enumerate().skip(1) {
            if row.len() != width {
                return Err(InputError::Format {
                    line: i + 1,
                    expected: width,
                    found: row.len(),
                    text: row.join(" "),
                });
            }
        }

        Ok(Self { rows, width })
    }

    /// Wraps rows the loader has already validated.
    pub(super) fn from_checked(rows: Vec<Vec<String>>, width: usize) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { rows, width }
    }

    /// Tokens per row (`m`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of dimension rows (`D`), i.e. all rows but the label row.
    pub fn dimensions(&self) -> usize {
        self.rows.len() - 1
    }

    /// All rows, label row first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Row `r` of the table.
    pub fn row(&self, r: usize) -> &[String] {
        &self.rows[r]
    }

    /// Label of output row `k`.
    pub fn label(&self, k: usize) -> &str {
        &self.rows[0][k]
    }

    /// Symbol `index` of dimension `dim` (table row `dim + 1`).
    pub fn symbol(&self, dim: usize, index: usize) -> &str {
        &self.rows[dim + 1][index]
    }

    /// First position holding `token`, scanning rows then columns in order.
    pub fn find(&self, token: &str) -> Option<SymbolPosition> {
        self.rows.iter().enumerate().find_map(|(row, tokens)| {
            tokens
                .iter()
                .position(|t| t == token)
                .map(|column| SymbolPosition { row, column })
        })
    }

    /// Number of combinations a full enumeration produces: `(m!)^D`.
    ///
    /// `None` if the count does not fit in a `u128`.
    pub fn combination_count(&self) -> Option<u128> {
        combination_count(self.width, self.dimensions())
    }
}

/// `(width!)^dims` with overflow detection.
pub fn combination_count(width: usize, dims: usize) -> Option<u128> {
    let per_dim = (1..=width as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))?;
    let exp = u32::try_from(dims).ok()?;
    per_dim.checked_pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::new([
            ["Bob", "Chuck", "Dave"],
            ["Hall", "King", "Noyes"],
            ["AL", "AR", "AS"],
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let t = table();
        assert_eq!(t.width(), 3);
        assert_eq!(t.dimensions(), 2);
        assert_eq!(t.label(2), "Dave");
        assert_eq!(t.symbol(0, 1), "King");
        assert_eq!(t.symbol(1, 2), "AS");
        assert_eq!(t.row(2), &["AL", "AR", "AS"]);
    }

    #[test]
    fn test_find_first_match() {
        let t = SymbolTable::new([["a", "b"], ["c", "a"]]).unwrap();
        assert_eq!(t.find("a"), Some(SymbolPosition { row: 0, column: 0 }));
        assert_eq!(t.find("c"), Some(SymbolPosition { row: 1, column: 0 }));
        assert_eq!(t.find("zzz"), None);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SymbolTable::new(vec![vec!["a", "b"], vec!["c"]]).unwrap_err();
        match err {
            InputError::Format {
                line,
                expected,
                found,
                ..
            } => assert_eq!((line, expected, found), (2, 2, 1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_rejected() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert!(matches!(
            SymbolTable::new(rows),
            Err(InputError::EmptyTable)
        ));
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(combination_count(0, 3), Some(1));
        assert_eq!(combination_count(4, 0), Some(1));
        assert_eq!(combination_count(3, 1), Some(6));
        assert_eq!(combination_count(3, 2), Some(36));
        assert_eq!(combination_count(6, 2), Some(518_400));
        assert_eq!(table().combination_count(), Some(36));
        // 35! alone overflows u128
        assert_eq!(combination_count(35, 1), None);
        assert_eq!(combination_count(20, 3), None);
    }
}
