//! Permutation Cartesian enumerator.
//!
//! Produces every tuple of `D` permutations of `0..m`, one permutation per
//! dimension, in a fixed order: dimension 0 varies slowest, the last
//! dimension fastest. Each tuple is delivered to a [`LeafVisitor`] as an
//! [`Assignment`] matrix whose cell `(k, i)` is the symbol index chosen
//! for output row `k` in dimension `i`.
//!
//! # Key Types
//!
//! - [`EnumRunner`]: executes the walk
//! - [`EnumConfig`]: budget, time limit, depth guard
//! - [`EnumContext`]: the mutable state, reusable across runs
//! - [`EnumResult`]: combinations visited and why the walk ended
//!
//! # Example
//!
//! ```
//! use u_logigrid::enumerate::{CombinationCounter, EnumConfig, EnumRunner};
//!
//! let mut counter = CombinationCounter::default();
//! let result = EnumRunner::run(3, 2, &EnumConfig::default(), &mut counter).unwrap();
//! assert_eq!(counter.count, 36);
//! assert!(result.is_complete());
//! ```

mod config;
mod context;
mod runner;
mod types;

pub use config::EnumConfig;
pub use context::EnumContext;
pub use runner::{EnumResult, EnumRunner, StopReason};
pub use types::{Assignment, CombinationCounter, LeafVisitor};
