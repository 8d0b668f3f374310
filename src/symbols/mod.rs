//! Symbol table and its loader.
//!
//! The first input segment is a block of whitespace-separated lines, all
//! with the same number of tokens, closed by a separator line (`%%` by
//! default). Row 0 labels the output rows; every further row is one
//! dimension of the enumeration.
//!
//! ```text
//! Bob Chuck Dave
//! Hall King Noyes
//! AL AR AS
//! %%
//! ```

mod config;
mod loader;
mod table;

pub use config::{LoadConfig, DEFAULT_SEPARATOR};
pub use loader::load_symbols;
pub use table::{combination_count, SymbolPosition, SymbolTable};
