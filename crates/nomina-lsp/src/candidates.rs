//! Candidate collection along the super chain.
//!
//! Output order is fixed:
//! 1. fields of every level, then
//! 2. static methods of every level, then
//! 3. instance methods of every level.
//!
//! Within each group levels appear most-derived first and members keep the
//! index's declaration order. Nothing is re-sorted and nothing is
//! deduplicated: a member shadowed by a derived declaration still shows up
//! again, later and not emphasized, under its ancestor.

use nomina_index::MethodDef;
use nomina_solver::{ResolveSession, SuperTypeResolver};
use tracing::debug;

/// What kind of member a candidate is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    Field,
    Method,
    StaticMethod,
}

/// Whether a candidate is declared on the queried type or an ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    Own,
    Inherited,
}

impl Origin {
    fn at_depth(depth: usize) -> Self {
        if depth == 0 { Self::Own } else { Self::Inherited }
    }

    /// Own members are rendered with emphasis by hosts.
    pub fn is_emphasized(self) -> bool {
        matches!(self, Self::Own)
    }
}

/// How a method candidate should be inserted when accepted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "style", rename_all = "camelCase")]
pub enum InsertionHint {
    /// Insert the bare name (`obj.method` passed as a value).
    AsFieldReference,
    /// Insert a call with one placeholder per parameter.
    CallTemplate { params: Vec<String> },
}

impl InsertionHint {
    /// Snippet text with tab stops, e.g. `move(${1:dx}, ${2:dy})`.
    pub fn snippet(&self, name: &str) -> String {
        match self {
            Self::AsFieldReference => name.to_string(),
            Self::CallTemplate { params } => {
                let placeholders: Vec<String> = params
                    .iter()
                    .enumerate()
                    .map(|(i, param)| format!("${{{}:{}}}", i + 1, param))
                    .collect();
                format!("{}({})", name, placeholders.join(", "))
            }
        }
    }
}

/// A completion candidate, free of any rendering concern.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Candidate {
    pub name: String,
    pub kind: MemberKind,
    /// Class declaring the member, shown as type text.
    pub owner: String,
    pub origin: Origin,
    /// `None` for fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insertion: Option<InsertionHint>,
}

/// Receives candidates in output order.
pub trait CandidateSink {
    fn accept(&mut self, candidate: Candidate);
}

impl CandidateSink for Vec<Candidate> {
    fn accept(&mut self, candidate: Candidate) {
        self.push(candidate);
    }
}

/// Decides which member names are offered. Case handling is the matcher's
/// business.
pub trait PrefixMatcher {
    fn prefix_matches(&self, name: &str) -> bool;
}

/// Matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PrefixMatcher for AcceptAll {
    fn prefix_matches(&self, _name: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct PlainPrefixMatcher {
    prefix: String,
    case_sensitive: bool,
}

impl PlainPrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            case_sensitive: true,
        }
    }

    pub fn case_insensitive(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            case_sensitive: false,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PrefixMatcher for PlainPrefixMatcher {
    fn prefix_matches(&self, name: &str) -> bool {
        if self.case_sensitive {
            return name.starts_with(&self.prefix);
        }
        let mut name_chars = name.chars();
        self.prefix.chars().all(|p| {
            name_chars
                .next()
                .is_some_and(|n| n.to_lowercase().eq(p.to_lowercase()))
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Insert instance methods as references instead of calls. Static methods
    /// are always inserted as calls.
    pub use_as_field: bool,
}

pub struct CandidateCollector<'s, 'a> {
    session: &'s mut ResolveSession<'a>,
}

impl<'s, 'a> CandidateCollector<'s, 'a> {
    pub fn new(session: &'s mut ResolveSession<'a>) -> Self {
        Self { session }
    }

    /// Collect every member kind in output order. Returns the number of
    /// candidates emitted.
    pub fn collect<T, M, S>(
        &mut self,
        root: &T,
        matcher: &M,
        options: CollectOptions,
        sink: &mut S,
    ) -> usize
    where
        T: SuperTypeResolver + ?Sized,
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let chain = self.session.super_chain(root);
        let emitted = self.emit_fields(&chain, matcher, sink)
            + self.emit_methods(&chain, matcher, MemberKind::StaticMethod, options, sink)
            + self.emit_methods(&chain, matcher, MemberKind::Method, options, sink);
        debug!(
            class = root.class_name(),
            levels = chain.len(),
            emitted,
            "collected member candidates"
        );
        emitted
    }

    pub fn collect_fields<T, M, S>(&mut self, root: &T, matcher: &M, sink: &mut S) -> usize
    where
        T: SuperTypeResolver + ?Sized,
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let chain = self.session.super_chain(root);
        self.emit_fields(&chain, matcher, sink)
    }

    pub fn collect_static_methods<T, M, S>(
        &mut self,
        root: &T,
        matcher: &M,
        sink: &mut S,
    ) -> usize
    where
        T: SuperTypeResolver + ?Sized,
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let chain = self.session.super_chain(root);
        self.emit_methods(
            &chain,
            matcher,
            MemberKind::StaticMethod,
            CollectOptions::default(),
            sink,
        )
    }

    pub fn collect_methods<T, M, S>(
        &mut self,
        root: &T,
        matcher: &M,
        options: CollectOptions,
        sink: &mut S,
    ) -> usize
    where
        T: SuperTypeResolver + ?Sized,
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let chain = self.session.super_chain(root);
        self.emit_methods(&chain, matcher, MemberKind::Method, options, sink)
    }

    fn emit_fields<M, S>(&self, chain: &[String], matcher: &M, sink: &mut S) -> usize
    where
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let index = self.session.index();
        let scope = self.session.context().scope();
        let mut emitted = 0;
        for (depth, class_name) in chain.iter().enumerate() {
            for field in index.lookup_fields(class_name, scope) {
                if !matcher.prefix_matches(&field.name) {
                    continue;
                }
                sink.accept(Candidate {
                    name: field.name,
                    kind: MemberKind::Field,
                    owner: class_name.clone(),
                    origin: Origin::at_depth(depth),
                    insertion: None,
                });
                emitted += 1;
            }
        }
        emitted
    }

    fn emit_methods<M, S>(
        &self,
        chain: &[String],
        matcher: &M,
        kind: MemberKind,
        options: CollectOptions,
        sink: &mut S,
    ) -> usize
    where
        M: PrefixMatcher + ?Sized,
        S: CandidateSink + ?Sized,
    {
        let index = self.session.index();
        let scope = self.session.context().scope();
        let mut emitted = 0;
        for (depth, class_name) in chain.iter().enumerate() {
            let methods = match kind {
                MemberKind::StaticMethod => index.lookup_static_methods(class_name, scope),
                _ => index.lookup_instance_methods(class_name, scope),
            };
            for method in methods {
                if !matcher.prefix_matches(&method.name) {
                    continue;
                }
                let insertion = insertion_hint(&method, kind, options);
                sink.accept(Candidate {
                    name: method.name,
                    kind,
                    owner: class_name.clone(),
                    origin: Origin::at_depth(depth),
                    insertion: Some(insertion),
                });
                emitted += 1;
            }
        }
        emitted
    }
}

fn insertion_hint(method: &MethodDef, kind: MemberKind, options: CollectOptions) -> InsertionHint {
    if kind == MemberKind::Method && options.use_as_field {
        InsertionHint::AsFieldReference
    } else {
        InsertionHint::CallTemplate {
            params: method.params.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/candidates_tests.rs"]
mod tests;
