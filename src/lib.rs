//! Exhaustive logic-grid enumeration.
//!
//! Reads a symbol table (a label row plus one row per dimension) and
//! prints every way of assigning each dimension's symbols to the labels:
//! one permutation per dimension, all combined as a Cartesian product,
//! `(m!)^D` combinations in total.
//!
//! - **Symbols** ([`symbols`]): the fixed-width token table and its loader
//! - **Directives** ([`directive`]): `E`/`N` rule lines resolved against
//!   the table; parsed and validated, never applied to the search
//! - **Enumerate** ([`enumerate`]): in-place swap/restore backtracking
//!   over per-dimension permutations, with budget, time limit and
//!   cancellation
//! - **Render** ([`render`]): one text line per output row
//!
//! # Example
//!
//! ```
//! use u_logigrid::enumerate::{EnumConfig, EnumRunner};
//! use u_logigrid::render::TablePrinter;
//! use u_logigrid::{read_puzzle, LoadConfig};
//!
//! let puzzle = read_puzzle("r0 r1\na b\n%%\n".as_bytes(), &LoadConfig::default()).unwrap();
//! let table = &puzzle.symbols;
//!
//! let mut printer = TablePrinter::new(table, Vec::new());
//! EnumRunner::run(table.width(), table.dimensions(), &EnumConfig::default(), &mut printer)
//!     .unwrap();
//! let text = String::from_utf8(printer.finish().unwrap()).unwrap();
//! assert_eq!(text, "r0 b\nr1 a\nr0 a\nr1 b\n");
//! ```

pub mod directive;
pub mod enumerate;
pub mod error;
mod input;
pub mod lines;
pub mod render;
pub mod symbols;

pub use error::{EnumError, InputError};
pub use input::{read_puzzle, Puzzle};
pub use symbols::LoadConfig;
