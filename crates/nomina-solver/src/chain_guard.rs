//! Cycle detection and depth limiting for super-chain walks.
//!
//! A super chain only ends when a class has no resolvable parent. Index data
//! is written by hand (`---@class A : B`) and can easily contain loops such as
//! `A : B`, `B : A`, so every walk runs under a `ChainGuard` that combines:
//! 1. **Cycle detection** via a visited-name set (`FxHashSet<String>`)
//! 2. **Depth limiting**, only when the caller configured a limit
//!
//! Unlike a general recursion guard there is no `leave`: a chain is a single
//! path, so every visited name stays visited until the walk ends.

use rustc_hash::FxHashSet;

/// Result of attempting to step onto a class in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStep {
    /// Proceed with this level.
    Entered,
    /// This class was already visited by the current walk.
    Cycle,
    /// The walk already visited `max_depth` levels.
    DepthExceeded,
}

impl ChainStep {
    #[inline]
    pub fn is_entered(self) -> bool {
        matches!(self, Self::Entered)
    }

    /// Returns `true` if entry was denied for any reason.
    #[inline]
    pub fn is_denied(self) -> bool {
        !self.is_entered()
    }
}

#[derive(Debug)]
pub struct ChainGuard {
    visited: FxHashSet<String>,
    depth: u32,
    max_depth: u32,
}

impl ChainGuard {
    /// Create a guard allowing at most `max_depth` levels (at least one).
    pub fn new(max_depth: u32) -> Self {
        Self {
            visited: FxHashSet::default(),
            depth: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Create a guard that only stops on cycles.
    pub fn unbounded() -> Self {
        Self::new(u32::MAX)
    }

    /// Try to step onto `name`.
    ///
    /// The cycle check runs first so that a loop shorter than the depth limit
    /// is always reported as a cycle.
    pub fn enter(&mut self, name: &str) -> ChainStep {
        if self.visited.contains(name) {
            return ChainStep::Cycle;
        }
        if self.depth >= self.max_depth {
            return ChainStep::DepthExceeded;
        }
        self.visited.insert(name.to_string());
        self.depth += 1;
        ChainStep::Entered
    }

    /// Number of levels entered so far.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }
}

impl Default for ChainGuard {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
#[path = "../tests/chain_guard_tests.rs"]
mod tests;
