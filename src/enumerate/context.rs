//! Mutable search state.

use super::types::Assignment;

/// All mutable state of one walk: a permutation slot and a remaining
/// count per dimension, plus the assignment matrix.
///
/// Allocated once and mutated in place. Between walks every slot is the
/// identity and every remaining count equals the width.
#[derive(Debug, Clone)]
pub struct EnumContext {
    width: usize,
    slots: Vec<Vec<usize>>,
    remaining: Vec<usize>,
    assignment: Assignment,
}

impl EnumContext {
    pub fn new(width: usize, dims: usize) -> Self {
        Self {
            width,
            slots: vec![(0..width).collect(); dims],
            remaining: vec![width; dims],
            assignment: Assignment::new(width, dims),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> usize {
        self.slots.len()
    }

    /// Deepest recursion a full walk reaches.
    pub fn depth(&self) -> usize {
        self.width.saturating_mul(self.dimensions())
    }

    /// Working permutation of dimension `dim`.
    pub fn slot(&self, dim: usize) -> &[usize] {
        &self.slots[dim]
    }

    /// Entries of dimension `dim` not yet fixed.
    pub fn remaining(&self, dim: usize) -> usize {
        self.remaining[dim]
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// True when every slot is the identity and nothing is fixed.
    pub fn is_restored(&self) -> bool {
        self.remaining.iter().all(|&n| n == self.width)
            && self
                .slots
                .iter()
                .all(|s| s.iter().enumerate().all(|(i, &v)| i == v))
    }

    /// Lowest-indexed dimension with entries left to fix.
    pub(super) fn first_open(&self) -> Option<usize> {
        self.remaining.iter().position(|&n| n != 0)
    }

    /// Fixes the last free output row of `dim` to the candidate at `k`
    /// and moves that candidate out of the active range.
    pub(super) fn fix(&mut self, dim: usize, k: usize) {
        let last = self.remaining[dim] - 1;
        self.remaining[dim] = last;
        self.assignment.set(last, dim, self.slots[dim][k]);
        self.slots[dim].swap(k, last);
    }

    /// Undoes [`fix`](Self::fix); `v` is the remaining count before it.
    pub(super) fn unfix(&mut self, dim: usize, k: usize, v: usize) {
        let last = v - 1;
        self.slots[dim].swap(k, last);
        debug_assert_eq!(self.slots[dim][k], self.assignment.get(last, dim));
        self.remaining[dim] = v;
    }
}
