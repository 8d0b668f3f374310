//! Plain-text rendering of combinations.

use crate::enumerate::{Assignment, LeafVisitor};
use crate::symbols::SymbolTable;
use std::io::{self, Write};

/// Writes one combination: for each output row, its label followed by
/// the chosen symbol of every dimension, separated by single spaces.
///
/// ```text
/// Bob King AR
/// Chuck Hall AL
/// ```
pub fn write_combination<W: Write>(
    out: &mut W,
    symbols: &SymbolTable,
    assignment: &Assignment,
) -> io::Result<()> {
    for k in 0..assignment.rows() {
        out.write_all(symbols.label(k).as_bytes())?;
        for (dim, &index) in assignment.row(k).iter().enumerate() {
            out.write_all(b" ")?;
            out.write_all(symbols.symbol(dim, index).as_bytes())?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// A [`LeafVisitor`] printing every combination to `W`.
///
/// No separator is written between combinations.
pub struct TablePrinter<'a, W> {
    symbols: &'a SymbolTable,
    out: W,
}

impl<'a, W: Write> TablePrinter<'a, W> {
    pub fn new(symbols: &'a SymbolTable, out: W) -> Self {
        Self { symbols, out }
    }

    /// Flushes and returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> LeafVisitor for TablePrinter<'_, W> {
    fn visit(&mut self, assignment: &Assignment) -> io::Result<()> {
        write_combination(&mut self.out, self.symbols, assignment)
    }
}
