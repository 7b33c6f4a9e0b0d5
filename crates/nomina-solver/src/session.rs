//! Per-request resolution state.
//!
//! A `ResolveSession` lives for one query (one completion request, one
//! go-to-member lookup). It owns everything the chain walks need that is not
//! part of the index itself:
//!
//! - the `name -> TypeNode` memo, so a parent is fetched from the index at
//!   most once per request
//! - the optional chain depth limit and the diagnostics produced when a walk
//!   is cut short
//! - counters used by tests and by `--stats` in the CLI

use std::ops::ControlFlow;

use nomina_common::{
    Diagnostic, SearchContext, diagnostic_codes, diagnostic_messages, format_message,
};
use nomina_index::MemberIndex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::chain_guard::{ChainGuard, ChainStep};
use crate::super_type::SuperTypeResolver;
use crate::type_node::TypeNode;

/// Counters for one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    /// Successful parent resolutions performed by chain walks.
    pub super_hops: u32,
    /// Class lookups that reached the index.
    pub class_lookups: u32,
    /// Class lookups answered from the memo.
    pub memo_hits: u32,
}

/// One level of a super chain as seen by a walk visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainLevel<'n> {
    pub name: &'n str,
    /// `0` for the type the walk started from.
    pub depth: u32,
}

impl ChainLevel<'_> {
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

pub struct ResolveSession<'a> {
    index: &'a dyn MemberIndex,
    ctx: SearchContext,
    classes: FxHashMap<String, Option<TypeNode>>,
    max_chain_depth: Option<u32>,
    diagnostics: Vec<Diagnostic>,
    stats: SessionStats,
}

impl<'a> ResolveSession<'a> {
    pub fn new(index: &'a dyn MemberIndex, ctx: SearchContext) -> Self {
        Self {
            index,
            ctx,
            classes: FxHashMap::default(),
            max_chain_depth: None,
            diagnostics: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    /// Builder: limit walks to `max_depth` levels (at least one). Without a
    /// limit only a cycle stops a walk before the chain ends.
    pub fn with_max_chain_depth(mut self, max_depth: u32) -> Self {
        self.max_chain_depth = Some(max_depth.max(1));
        self
    }

    pub fn index(&self) -> &'a dyn MemberIndex {
        self.index
    }

    pub fn context(&self) -> SearchContext {
        self.ctx
    }

    pub fn max_chain_depth(&self) -> Option<u32> {
        self.max_chain_depth
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Chain diagnostics recorded so far, without duplicates.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Resolve a class name to its declared type, memoized for the session.
    pub fn resolve_class(&mut self, name: &str) -> Option<TypeNode> {
        if let Some(cached) = self.classes.get(name) {
            self.stats.memo_hits += 1;
            return cached.clone();
        }

        self.stats.class_lookups += 1;
        let resolved = self
            .index
            .find_class(name, &self.ctx)
            .map(|record| TypeNode::from_record(&record));
        trace!(class = name, found = resolved.is_some(), "class lookup");
        self.classes.insert(name.to_string(), resolved.clone());
        resolved
    }

    /// Walk the super chain of `root`, most-derived level first.
    ///
    /// `visit` is called once per level. The walk stops when the visitor
    /// breaks (its value is returned), when a level has no resolvable parent,
    /// or when the guard detects a cycle or hits the depth limit. The last two
    /// record a diagnostic on the session and yield `None`.
    pub fn walk_chain<T, R>(
        &mut self,
        root: &T,
        mut visit: impl FnMut(ChainLevel<'_>) -> ControlFlow<R>,
    ) -> Option<R>
    where
        T: SuperTypeResolver + ?Sized,
    {
        let root_name = root.class_name();
        let mut guard = match self.max_chain_depth {
            Some(max_depth) => ChainGuard::new(max_depth),
            None => ChainGuard::unbounded(),
        };

        if !self.enter_level(&mut guard, root_name, root_name) {
            return None;
        }
        if let ControlFlow::Break(found) = visit(ChainLevel {
            name: root_name,
            depth: 0,
        }) {
            return Some(found);
        }

        let mut current = root.super_type(self)?;
        loop {
            self.stats.super_hops += 1;
            if !self.enter_level(&mut guard, root_name, current.name()) {
                return None;
            }
            if let ControlFlow::Break(found) = visit(ChainLevel {
                name: current.name(),
                depth: guard.depth() - 1,
            }) {
                return Some(found);
            }
            current = current.super_type(self)?;
        }
    }

    /// Names of every level of the chain of `root`, most-derived first.
    pub fn super_chain<T>(&mut self, root: &T) -> SmallVec<[String; 8]>
    where
        T: SuperTypeResolver + ?Sized,
    {
        let mut names = SmallVec::new();
        self.walk_chain(root, |level| {
            names.push(level.name.to_string());
            ControlFlow::<()>::Continue(())
        });
        names
    }

    fn enter_level(&mut self, guard: &mut ChainGuard, root: &str, name: &str) -> bool {
        match guard.enter(name) {
            ChainStep::Entered => true,
            ChainStep::Cycle => {
                warn!(root, at = name, "cyclic super chain");
                self.report(Diagnostic::new(
                    root,
                    format_message(diagnostic_messages::CYCLIC_SUPER_CHAIN, &[root, name]),
                    diagnostic_codes::CYCLIC_SUPER_CHAIN,
                ));
                false
            }
            ChainStep::DepthExceeded => {
                let limit = guard.max_depth().to_string();
                warn!(root, at = name, limit = guard.max_depth(), "super chain too deep");
                self.report(Diagnostic::new(
                    root,
                    format_message(
                        diagnostic_messages::SUPER_CHAIN_TOO_DEEP,
                        &[root, limit.as_str()],
                    ),
                    diagnostic_codes::SUPER_CHAIN_TOO_DEEP,
                ));
                false
            }
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.diagnostics.contains(&diagnostic) {
            self.diagnostics.push(diagnostic);
        }
    }
}

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod tests;
