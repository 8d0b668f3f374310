//! Assignment matrix and the leaf visitor seam.

use std::io;

/// The per-combination table mapping `(output row, dimension)` to a
/// symbol index.
///
/// Stored row-major: `rows` output rows by `dims` dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    rows: usize,
    dims: usize,
    cells: Vec<usize>,
}

impl Assignment {
    /// A zero-filled `rows` × `dims` matrix.
    pub fn new(rows: usize, dims: usize) -> Self {
        Self {
            rows,
            dims,
            cells: vec![0; rows * dims],
        }
    }

    /// Number of output rows (`m`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of dimensions (`D`).
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// True when the matrix has no cells (`m = 0` or `D = 0`).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol index chosen for output row `row` in dimension `dim`.
    pub fn get(&self, row: usize, dim: usize) -> usize {
        self.cells[row * self.dims + dim]
    }

    pub(crate) fn set(&mut self, row: usize, dim: usize, value: usize) {
        self.cells[row * self.dims + dim] = value;
    }

    /// Symbol indices of output row `row`, one per dimension.
    pub fn row(&self, row: usize) -> &[usize] {
        let start = row * self.dims;
        &self.cells[start..start + self.dims]
    }

    /// The permutation chosen for dimension `dim`, in output-row order.
    pub fn column(&self, dim: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows).map(move |row| self.get(row, dim))
    }
}

/// Receives every complete combination.
///
/// The matrix is only valid for the duration of the call; it is mutated
/// in place as the walk continues. Returning an error aborts the walk.
///
/// Implemented for closures:
///
/// ```
/// use u_logigrid::enumerate::{Assignment, EnumConfig, EnumRunner};
///
/// let mut seen = Vec::new();
/// let mut visitor = |a: &Assignment| -> std::io::Result<()> {
///     seen.push(a.column(0).collect::<Vec<_>>());
///     Ok(())
/// };
/// EnumRunner::run(3, 1, &EnumConfig::default(), &mut visitor).unwrap();
/// assert_eq!(seen.len(), 6);
/// ```
pub trait LeafVisitor {
    fn visit(&mut self, assignment: &Assignment) -> io::Result<()>;
}

impl<F> LeafVisitor for F
where
    F: FnMut(&Assignment) -> io::Result<()>,
{
    fn visit(&mut self, assignment: &Assignment) -> io::Result<()> {
        self(assignment)
    }
}

/// A visitor that only counts combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationCounter {
    pub count: u64,
}

impl LeafVisitor for CombinationCounter {
    fn visit(&mut self, _assignment: &Assignment) -> io::Result<()> {
        self.count += 1;
        Ok(())
    }
}
