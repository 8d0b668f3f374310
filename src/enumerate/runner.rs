//! Depth-first walk over the Cartesian product of permutations.
//!
//! # Algorithm
//!
//! 1. Check the stop conditions (cancel flag, budget, deadline)
//! 2. Pick the lowest-indexed dimension `i` with entries left to fix;
//!    if there is none, hand the matrix to the visitor
//! 3. With `v` entries left, for each candidate position `k < v`:
//!    fix output row `v - 1` to the symbol at `k`, swap it out of the
//!    active range, recurse, swap it back
//!
//! Dimension 0 is the outermost loop and varies slowest. Each dimension
//! yields every permutation exactly once, so a full walk visits
//! `(m!)^D` leaves. With no dimensions, or `m = 0`, the walk visits a
//! single leaf holding an empty matrix.

use super::config::EnumConfig;
use super::context::EnumContext;
use super::types::{Assignment, LeafVisitor};
use crate::error::EnumError;
use crate::symbols::combination_count;
use std::io;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Search nodes between deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Why a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// Every combination was visited.
    Completed,
    /// The cancellation flag was raised.
    Cancelled,
    /// `max_combinations` were visited.
    BudgetExhausted,
    /// `time_limit_ms` elapsed.
    TimeLimit,
}

/// Summary of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumResult {
    /// Combinations handed to the visitor.
    pub combinations: u64,
    /// Why the walk ended.
    pub stop: StopReason,
    /// Wall-clock duration in milliseconds.
    pub elapsed_ms: u64,
}

impl EnumResult {
    /// Whether the walk visited every combination.
    pub fn is_complete(&self) -> bool {
        self.stop == StopReason::Completed
    }
}

/// Executes the enumeration.
pub struct EnumRunner;

impl EnumRunner {
    /// Enumerates every combination of `dims` permutations of `0..width`.
    pub fn run<V: LeafVisitor>(
        width: usize,
        dims: usize,
        config: &EnumConfig,
        visitor: &mut V,
    ) -> Result<EnumResult, EnumError> {
        Self::run_with_cancel(width, dims, config, None, visitor)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is checked before every search node; once it is set the
    /// walk unwinds and reports [`StopReason::Cancelled`].
    pub fn run_with_cancel<V: LeafVisitor>(
        width: usize,
        dims: usize,
        config: &EnumConfig,
        cancel: Option<Arc<AtomicBool>>,
        visitor: &mut V,
    ) -> Result<EnumResult, EnumError> {
        let mut ctx = EnumContext::new(width, dims);
        Self::run_in(&mut ctx, config, cancel, visitor)
    }

    /// Runs over a caller-owned context.
    ///
    /// The context is left restored whether the walk completes, stops
    /// early or fails.
    pub fn run_in<V: LeafVisitor>(
        ctx: &mut EnumContext,
        config: &EnumConfig,
        cancel: Option<Arc<AtomicBool>>,
        visitor: &mut V,
    ) -> Result<EnumResult, EnumError> {
        check_depth(ctx.depth(), config)?;
        log_start(ctx.width(), ctx.dimensions());

        let started = Instant::now();
        let limits = Limits::new(config, cancel, started);
        let flow = Walk::new(ctx, visitor, &limits).descend()?;

        Ok(finish(&limits, stop_reason(flow), started))
    }

    /// Runs the walk with one rayon task per top-level branch.
    ///
    /// The `width` branches of dimension 0 each get an isolated context
    /// and a visitor from `make_visitor(branch)`. Visitors come back in
    /// branch order, so concatenating their output reproduces the
    /// sequential order. With a budget set, which combinations make it
    /// under the budget is unspecified.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<V, F>(
        width: usize,
        dims: usize,
        config: &EnumConfig,
        cancel: Option<Arc<AtomicBool>>,
        make_visitor: F,
    ) -> Result<(Vec<V>, EnumResult), EnumError>
    where
        V: LeafVisitor + Send,
        F: Fn(usize) -> V + Sync,
    {
        if width == 0 || dims == 0 {
            let mut visitor = make_visitor(0);
            let result = Self::run_with_cancel(width, dims, config, cancel, &mut visitor)?;
            return Ok((vec![visitor], result));
        }

        check_depth(width.saturating_mul(dims), config)?;
        log_start(width, dims);

        let started = Instant::now();
        let limits = Limits::new(config, cancel, started);

        let branches: Vec<(V, io::Result<ControlFlow<StopReason>>)> = (0..width)
            .into_par_iter()
            .map(|k| {
                let mut visitor = make_visitor(k);
                let mut ctx = EnumContext::new(width, dims);
                ctx.fix(0, k);
                let flow = Walk::new(&mut ctx, &mut visitor, &limits).descend();
                ctx.unfix(0, k, width);
                (visitor, flow)
            })
            .collect();

        let mut visitors = Vec::with_capacity(branches.len());
        let mut flow = ControlFlow::Continue(());
        for (visitor, outcome) in branches {
            if let (ControlFlow::Continue(()), ControlFlow::Break(reason)) = (flow, outcome?) {
                flow = ControlFlow::Break(reason);
            }
            visitors.push(visitor);
        }

        Ok((visitors, finish(&limits, stop_reason(flow), started)))
    }
}

fn check_depth(depth: usize, config: &EnumConfig) -> Result<(), EnumError> {
    if depth > config.max_depth {
        return Err(EnumError::DepthLimit {
            depth,
            limit: config.max_depth,
        });
    }
    Ok(())
}

fn log_start(width: usize, dims: usize) {
    match combination_count(width, dims) {
        Some(expected) => info!(width, dimensions = dims, expected = %expected, "enumeration started"),
        None => info!(width, dimensions = dims, "enumeration started, count exceeds u128"),
    }
}

fn stop_reason(flow: ControlFlow<StopReason>) -> StopReason {
    match flow {
        ControlFlow::Continue(()) => StopReason::Completed,
        ControlFlow::Break(reason) => reason,
    }
}

fn finish(limits: &Limits, stop: StopReason, started: Instant) -> EnumResult {
    let result = EnumResult {
        combinations: limits.emitted.load(Ordering::Relaxed),
        stop,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    if result.is_complete() {
        info!(
            combinations = result.combinations,
            elapsed_ms = result.elapsed_ms,
            "enumeration finished"
        );
    } else {
        warn!(
            combinations = result.combinations,
            stop = ?result.stop,
            "enumeration stopped early"
        );
    }
    result
}

/// Stop conditions shared by every walk of one run.
struct Limits {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
    budget: Option<u64>,
    emitted: AtomicU64,
}

impl Limits {
    fn new(config: &EnumConfig, cancel: Option<Arc<AtomicBool>>, started: Instant) -> Self {
        Self {
            cancel,
            deadline: config
                .time_limit_ms
                .map(|ms| started + Duration::from_millis(ms)),
            budget: config.max_combinations,
            emitted: AtomicU64::new(0),
        }
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn budget_spent(&self) -> bool {
        self.budget
            .is_some_and(|b| self.emitted.load(Ordering::Relaxed) >= b)
    }

    /// Claims one slot of the budget for a leaf about to be visited.
    fn claim_leaf(&self) -> bool {
        let prev = self.emitted.fetch_add(1, Ordering::Relaxed);
        match self.budget {
            Some(b) if prev >= b => {
                self.emitted.fetch_sub(1, Ordering::Relaxed);
                false
            }
            _ => true,
        }
    }
}

struct Walk<'a, V> {
    ctx: &'a mut EnumContext,
    visitor: &'a mut V,
    limits: &'a Limits,
    nodes: u64,
}

impl<'a, V: LeafVisitor> Walk<'a, V> {
    fn new(ctx: &'a mut EnumContext, visitor: &'a mut V, limits: &'a Limits) -> Self {
        Self {
            ctx,
            visitor,
            limits,
            nodes: 0,
        }
    }

    fn descend(&mut self) -> io::Result<ControlFlow<StopReason>> {
        if let Some(reason) = self.should_stop() {
            return Ok(ControlFlow::Break(reason));
        }

        let Some(dim) = self.ctx.first_open() else {
            return self.leaf();
        };

        let v = self.ctx.remaining(dim);
        for k in 0..v {
            self.ctx.fix(dim, k);
            let outcome = self.descend();
            self.ctx.unfix(dim, k, v);
            if let ControlFlow::Break(reason) = outcome? {
                return Ok(ControlFlow::Break(reason));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn leaf(&mut self) -> io::Result<ControlFlow<StopReason>> {
        if !self.limits.claim_leaf() {
            return Ok(ControlFlow::Break(StopReason::BudgetExhausted));
        }
        let assignment: &Assignment = self.ctx.assignment();
        self.visitor.visit(assignment)?;
        Ok(ControlFlow::Continue(()))
    }

    fn should_stop(&mut self) -> Option<StopReason> {
        let node = self.nodes;
        self.nodes += 1;

        if self.limits.cancelled() {
            return Some(StopReason::Cancelled);
        }
        if self.limits.budget_spent() {
            return Some(StopReason::BudgetExhausted);
        }
        if node % DEADLINE_CHECK_INTERVAL == 0 {
            if let Some(deadline) = self.limits.deadline {
                if Instant::now() >= deadline {
                    return Some(StopReason::TimeLimit);
                }
            }
        }
        None
    }
}
